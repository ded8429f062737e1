//! Page location handling
//!
//! The current page URL is injected by the host rather than read from a
//! global, so bootstrapping is deterministic and testable.

use serde::{Deserialize, Serialize};

/// The location of the page being annotated.
///
/// Wraps the full href as the host observed it, including any fragment.
/// The storage service identifies pages by the fragment-free form, which
/// [`document_uri`](PageLocation::document_uri) provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLocation {
    href: String,
}

impl PageLocation {
    /// Create a location from a full href
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// The full href, fragment included
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The href with the fragment and its leading `#` removed.
    ///
    /// This is the URI under which annotations for the page are stored and
    /// searched. For an href without a fragment this returns the href
    /// unchanged.
    pub fn document_uri(&self) -> &str {
        match self.href.find('#') {
            Some(idx) => &self.href[..idx],
            None => &self.href,
        }
    }

    /// The fragment portion after `#`, if present
    pub fn fragment(&self) -> Option<&str> {
        self.href.find('#').map(|idx| &self.href[idx + 1..])
    }
}

impl From<&str> for PageLocation {
    fn from(href: &str) -> Self {
        Self::new(href)
    }
}
