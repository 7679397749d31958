//! Filter data models
//!
//! Cards, categories, filters and the filter controls that select them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Control identifier reserved for the "show everything" filter
pub const ALL_FILTER_ID: &str = "all";

/// Category tag assigned to a card when the page is built
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a category tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The raw tag string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// A project card on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Category the card belongs to
    pub category: CategoryId,
}

impl Card {
    /// Create a card in the given category
    pub fn new(category: impl Into<CategoryId>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

/// Selection criterion narrowing the card collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Every card matches
    #[default]
    All,
    /// Only cards of this category match
    Category(CategoryId),
}

impl Filter {
    /// Parse a control identifier; `"all"` is the sentinel for [`Filter::All`]
    pub fn from_control_id(id: &str) -> Self {
        if id == ALL_FILTER_ID {
            Self::All
        } else {
            Self::Category(CategoryId::new(id))
        }
    }

    /// Identifier of the control that selects this filter
    pub fn control_id(&self) -> &str {
        match self {
            Self::All => ALL_FILTER_ID,
            Self::Category(category) => category.as_str(),
        }
    }

    /// Whether a card passes this filter
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => card.category == *category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_id())
    }
}

// Filters travel as their control identifier so manifests read naturally
impl Serialize for Filter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.control_id())
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Self::from_control_id(&id))
    }
}

/// A filter button on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterControl {
    /// Filter selected by this control
    #[serde(rename = "id")]
    pub filter: Filter,
    /// Visible button text
    #[serde(default)]
    pub label: String,
}

impl FilterControl {
    /// Create a control for a filter, labelled with its identifier
    pub fn new(filter: Filter) -> Self {
        let label = filter.control_id().to_string();
        Self { filter, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_parses_to_all() {
        assert_eq!(Filter::from_control_id("all"), Filter::All);
        assert_eq!(
            Filter::from_control_id("residential"),
            Filter::Category(CategoryId::new("residential"))
        );
    }

    #[test]
    fn test_sentinel_is_case_sensitive() {
        // "All" is a legitimate category tag, not the sentinel
        assert_eq!(
            Filter::from_control_id("All"),
            Filter::Category(CategoryId::new("All"))
        );
    }

    #[test]
    fn test_filter_matches() {
        let card = Card::new("industrial");
        assert!(Filter::All.matches(&card));
        assert!(Filter::from_control_id("industrial").matches(&card));
        assert!(!Filter::from_control_id("commercial").matches(&card));
    }

    #[test]
    fn test_filter_serializes_as_control_id() {
        let json = serde_json::to_string(&Filter::All).unwrap();
        assert_eq!(json, "\"all\"");

        let filter: Filter = serde_json::from_str("\"commercial\"").unwrap();
        assert_eq!(filter, Filter::Category(CategoryId::new("commercial")));
    }

    #[test]
    fn test_control_deserializes_without_label() {
        let control: FilterControl = serde_json::from_str(r#"{"id":"all"}"#).unwrap();
        assert_eq!(control.filter, Filter::All);
        assert!(control.label.is_empty());
    }
}
