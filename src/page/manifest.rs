//! Page manifest
//!
//! Describes the page-rendered elements the engine works over: project
//! cards, filter controls, FAQ items, reveal targets and anchor sections.
//! Read once at startup; the counts never change afterwards.

use crate::error::{Result, ShowcaseError};
use crate::filter::{Card, Filter, FilterControl};
use crate::widgets::Section;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Static description of a rendered page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageManifest {
    /// Project cards in document order
    pub cards: Vec<Card>,
    /// Filter buttons in page order
    pub filters: Vec<FilterControl>,
    /// Whether the page has a "load more" button
    pub load_more: bool,
    /// Number of FAQ items
    pub faq_items: usize,
    /// Ids of elements revealed on scroll
    pub reveal_targets: Vec<String>,
    /// Sections reachable through in-page links
    pub sections: Vec<Section>,
    /// Contact form submit button text; no form when absent
    pub submit_label: Option<String>,
    /// Whether the page embeds the location map
    pub map: bool,
}

impl PageManifest {
    /// Read and validate a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ShowcaseError::ManifestError(Box::new(e)))?;
        let manifest = Self::parse(&json)?;
        info!(
            "Loaded page manifest {} ({} cards, {} filters)",
            path.display(),
            manifest.cards.len(),
            manifest.filters.len()
        );
        Ok(manifest)
    }

    /// Parse and validate a manifest document
    pub fn parse(json: &str) -> Result<Self> {
        let manifest: Self =
            serde_json::from_str(json).map_err(|e| ShowcaseError::ManifestError(Box::new(e)))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check that the filter controls can keep exactly one control active
    ///
    /// A page without filter controls is only valid when it has no cards.
    pub fn validate(&self) -> Result<()> {
        if self.filters.is_empty() {
            if self.cards.is_empty() {
                return Ok(());
            }
            return Err(ShowcaseError::InvalidManifest(format!(
                "{} cards but no filter controls",
                self.cards.len()
            )));
        }

        let mut seen = HashSet::new();
        for control in &self.filters {
            let id = control.filter.control_id();
            if id.is_empty() {
                return Err(ShowcaseError::InvalidManifest(
                    "filter control with an empty id".to_string(),
                ));
            }
            if !seen.insert(id) {
                return Err(ShowcaseError::InvalidManifest(format!(
                    "duplicate filter control \"{id}\""
                )));
            }
        }

        if !self.filters.iter().any(|control| control.filter == Filter::All) {
            return Err(ShowcaseError::InvalidManifest(
                "no \"all\" filter control".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "cards": [{"category": "residential"}, {"category": "industrial"}],
        "filters": [{"id": "all", "label": "Tous"}, {"id": "residential"}, {"id": "industrial"}],
        "load_more": true,
        "faq_items": 3,
        "sections": [{"id": "contact", "offset_top": 2400.0}],
        "submit_label": "Envoyer"
    }"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = PageManifest::parse(MANIFEST).unwrap();
        assert_eq!(manifest.cards.len(), 2);
        assert_eq!(manifest.filters[0].filter, Filter::All);
        assert_eq!(manifest.filters[0].label, "Tous");
        assert!(manifest.load_more);
        assert_eq!(manifest.faq_items, 3);
        assert!(manifest.reveal_targets.is_empty());
        assert!(!manifest.map);
    }

    #[test]
    fn test_duplicate_control_rejected() {
        let json = r#"{"filters": [{"id": "all"}, {"id": "web"}, {"id": "web"}]}"#;
        let error = PageManifest::parse(json).unwrap_err();
        assert!(matches!(error, ShowcaseError::InvalidManifest(ref m) if m.contains("web")));
    }

    #[test]
    fn test_missing_all_control_rejected() {
        let json = r#"{"filters": [{"id": "web"}]}"#;
        assert!(matches!(
            PageManifest::parse(json),
            Err(ShowcaseError::InvalidManifest(_))
        ));
    }

    #[test]
    fn test_page_without_filters_is_valid() {
        let manifest = PageManifest::parse("{}").unwrap();
        assert_eq!(manifest, PageManifest::default());
    }

    #[test]
    fn test_cards_without_filters_rejected() {
        let json = r#"{"cards": [{"category": "web"}], "filters": []}"#;
        let error = PageManifest::parse(json).unwrap_err();
        assert!(matches!(error, ShowcaseError::InvalidManifest(ref m) if m.contains("no filter controls")));
    }

    #[test]
    fn test_malformed_json_is_manifest_error() {
        assert!(matches!(
            PageManifest::parse("[1, 2"),
            Err(ShowcaseError::ManifestError(_))
        ));
    }
}
