mod footer;
mod navbar;
mod reveal;
mod star_canvas;

pub use footer::Footer;
pub use navbar::Navbar;
pub use reveal::{now, use_mounted, use_reveal};
pub use star_canvas::StarCanvas;
