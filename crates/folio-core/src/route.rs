use std::fmt;

/// Scroll offset (px) past which the navbar casts a shadow
pub const SCROLL_SHADOW_OFFSET: f64 = 50.0;

/// Top-level pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Contact,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Projects, Route::Contact];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Contact => "/contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
        }
    }

    /// Resolve a URL path to a route. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            Some(_) => "/",
            None => path,
        };
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub route: Route,
}

impl NavItem {
    pub fn path(&self) -> &'static str {
        self.route.path()
    }

    /// Whether this item matches the current location.
    pub fn is_active(&self, current_path: &str) -> bool {
        Route::from_path(current_path) == Some(self.route)
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { title: "Home", route: Route::Home },
    NavItem { title: "About", route: Route::About },
    NavItem { title: "Projects", route: Route::Projects },
    NavItem { title: "Contact", route: Route::Contact },
];

/// Navbar UI state. Derived entirely from user input; nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    menu_open: bool,
    scrolled: bool,
}

impl NavState {
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A nav link was chosen. Always closes the mobile menu.
    pub fn select(&mut self, route: Route) -> &'static str {
        self.menu_open = false;
        route.path()
    }

    /// The location changed by any means; the menu never stays open.
    pub fn close(&mut self) {
        self.menu_open = false;
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLL_SHADOW_OFFSET;
    }

    /// Glyph shown on the mobile menu button.
    pub fn menu_icon(&self) -> &'static str {
        if self.menu_open { "✕" } else { "☰" }
    }
}
