//! Platform-independent pieces of the portfolio site.
//!
//! Everything here compiles natively and to `wasm32`, so the behaviour of the
//! front end (routing, entrance animations, the starfield and the contact
//! form) can be tested without a browser.
//!
//! - [`route`] - pages, nav items and navbar state
//! - [`theme`] - colors, fonts, breakpoints and shadows
//! - [`content`] - profile, skills, projects and links
//! - [`reveal`] - scroll reveal and fade-in state machines
//! - [`typewriter`] - the looping headline animation
//! - [`starfield`] - point generation, rotation and projection
//! - [`contact`] / [`mailer`] - the contact form and its EmailJS relay
//! - [`config`] - site configuration

pub mod config;
pub mod contact;
pub mod content;
pub mod mailer;
pub mod reveal;
pub mod route;
pub mod sanitize;
pub mod starfield;
pub mod theme;
pub mod typewriter;

pub use config::SiteConfig;
pub use contact::{ContactForm, ContactPayload, Field, SubmitStatus};
pub use mailer::{EmailJsMailer, Mailer};
pub use route::{NAV_ITEMS, NavItem, NavState, Route};
pub use theme::Theme;
