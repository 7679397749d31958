//! FAQ accordion
//!
//! At most one item is expanded. Opening an item collapses every other one;
//! activating the open item collapses it.

use tracing::{debug, warn};

/// FAQ accordion state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    item_count: usize,
    open: Option<usize>,
}

impl FaqAccordion {
    /// Create an accordion with every item collapsed
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            open: None,
        }
    }

    /// Activate the question of item `index`
    pub fn toggle(&mut self, index: usize) {
        if index >= self.item_count {
            warn!(
                "Ignoring FAQ toggle for item {} (only {} items)",
                index, self.item_count
            );
            return;
        }

        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!("FAQ open item: {:?}", self.open);
    }

    /// Index of the expanded item
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    /// Whether item `index` is expanded
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.item_count
    }

    /// Whether the page has no FAQ items
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_one_closes_others() {
        let mut faq = FaqAccordion::new(3);
        faq.toggle(0);
        assert!(faq.is_open(0));
        faq.toggle(2);
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
    }

    #[test]
    fn test_toggle_open_item_collapses() {
        let mut faq = FaqAccordion::new(2);
        faq.toggle(1);
        faq.toggle(1);
        assert_eq!(faq.open_item(), None);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut faq = FaqAccordion::new(2);
        faq.toggle(0);
        faq.toggle(5);
        assert_eq!(faq.open_item(), Some(0));
        assert!(FaqAccordion::new(0).is_empty());
    }
}
