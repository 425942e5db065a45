use serde::Serialize;
use std::fmt;

use crate::config;

/// Identifier of a page fragment, e.g. `gallery` for `pages/gallery.html`.
///
/// Any string is a valid id; ids without a fragment on the server simply
/// load the fallback content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn home() -> Self {
        Self::new(config::home_page())
    }

    /// Reads the page from a location hash such as `#gallery`. An absent or
    /// empty anchor means the home page.
    pub fn from_hash(hash: &str) -> Self {
        let id = hash.strip_prefix('#').unwrap_or(hash);
        if id.is_empty() {
            Self::home()
        } else {
            Self::new(id)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Anchor pushed onto the history stack for this page.
    pub fn hash(&self) -> String {
        format!("#{}", self.0)
    }

    pub fn is_gallery(&self) -> bool {
        self.0 == GALLERY_PAGE
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const GALLERY_PAGE: &str = "gallery";

/// A navigation control in the header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub page: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { page: "home", label: "Home" },
    NavLink { page: "about", label: "About Me" },
    NavLink { page: "services", label: "Services" },
    NavLink { page: GALLERY_PAGE, label: "Gallery" },
    NavLink { page: "testimonials", label: "Happy Families" },
    NavLink { page: "contact", label: "Book a Session" },
];

/// Pages of [`NAV_LINKS`] that should carry the `active` class. Only the
/// link matching `current` qualifies, so at most one is ever returned.
pub fn active_links(current: &PageId) -> Vec<&'static NavLink> {
    NAV_LINKS
        .iter()
        .filter(|link| link.page == current.as_str())
        .collect()
}
