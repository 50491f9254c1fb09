//! Page identifiers.
//!
//! The storefront has four pages. Which one a request is for is decided by the
//! last segment of its path, so `/index.html`, `/shop/index.html` and `/` all
//! name the home page.

use core::fmt;

/// A storefront page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Catalog listing.
    Home,
    /// Login form.
    Login,
    /// Login-gated welcome page.
    Dashboard,
    /// Cart contents and total.
    Cart,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Cart, Self::Login, Self::Dashboard];

    /// Resolve a URL path to a page using its last segment.
    ///
    /// ```
    /// use corner_shop_core::Page;
    ///
    /// assert_eq!(Page::from_path("/"), Some(Page::Home));
    /// assert_eq!(Page::from_path("/shop/cart.html"), Some(Page::Cart));
    /// assert_eq!(Page::from_path("/about.html"), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let name = path.rsplit('/').next().unwrap_or_default();
        Self::from_file_name(name)
    }

    /// Resolve a bare page name (`""` counts as the home page).
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        match name {
            "" | "index.html" => Some(Self::Home),
            "login.html" => Some(Self::Login),
            "dashboard.html" => Some(Self::Dashboard),
            "cart.html" => Some(Self::Cart),
            _ => None,
        }
    }

    /// The page's file name.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Login => "login.html",
            Self::Dashboard => "dashboard.html",
            Self::Cart => "cart.html",
        }
    }

    /// Absolute link to the page, used for redirects and navigation.
    #[must_use]
    pub const fn href(self) -> &'static str {
        match self {
            Self::Home => "/index.html",
            Self::Login => "/login.html",
            Self::Dashboard => "/dashboard.html",
            Self::Cart => "/cart.html",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
