//! In-page anchor navigation
//!
//! Resolves `#section` links to a scroll target that clears the fixed header.

use crate::config::AnchorSettings;
use serde::{Deserialize, Serialize};

/// Prefix of links owned by the FAQ accordion
const FAQ_ANCHOR_PREFIX: &str = "#faq-";

/// A scrollable section of the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Element id, without `#`
    pub id: String,
    /// Distance from the document top to the section
    pub offset_top: f64,
}

/// Resolve an anchor link to a scroll target.
///
/// Returns `None` when the link is not handled here (a bare `#`, FAQ links,
/// non-fragment links) or names no known section.
pub fn resolve_anchor(href: &str, sections: &[Section], settings: AnchorSettings) -> Option<f64> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || href.starts_with(FAQ_ANCHOR_PREFIX) {
        return None;
    }

    sections
        .iter()
        .find(|section| section.id == id)
        .map(|section| section.offset_top - f64::from(settings.scroll_offset_px))
}
