//! Reveal-on-scroll
//!
//! Elements start hidden and are revealed for good once their top edge
//! scrolls above a fraction of the viewport height.

use crate::config::RevealSettings;
use smallvec::SmallVec;
use tracing::debug;

/// Reveal-on-scroll state for a fixed set of target elements
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    settings: RevealSettings,
    targets: Vec<String>,
    revealed: SmallVec<[bool; 16]>,
}

impl ScrollReveal {
    /// Track the given targets, all initially hidden
    pub fn new(targets: Vec<String>, settings: RevealSettings) -> Self {
        let revealed = SmallVec::from_elem(false, targets.len());
        Self {
            settings,
            targets,
            revealed,
        }
    }

    /// Apply a viewport measurement.
    ///
    /// `tops` holds the top edge of each target relative to the viewport,
    /// in target order; missing entries leave their target untouched.
    /// Returns the ids revealed by this measurement.
    pub fn on_viewport(&mut self, tops: &[f64], viewport_height: f64) -> Vec<&str> {
        let line = viewport_height / self.settings.viewport_ratio;
        let mut newly_revealed = Vec::new();

        for ((id, revealed), top) in self.targets.iter().zip(self.revealed.iter_mut()).zip(tops) {
            if !*revealed && *top < line {
                *revealed = true;
                newly_revealed.push(id.as_str());
            }
        }

        if !newly_revealed.is_empty() {
            debug!("Revealed on scroll: {:?}", newly_revealed);
        }
        newly_revealed
    }

    /// Whether the target with this id has been revealed
    pub fn is_revealed(&self, id: &str) -> bool {
        self.targets
            .iter()
            .position(|target| target == id)
            .is_some_and(|index| self.revealed[index])
    }

    /// Target ids paired with their revealed flag
    pub fn states(&self) -> impl Iterator<Item = (&str, bool)> {
        self.targets
            .iter()
            .map(String::as_str)
            .zip(self.revealed.iter().copied())
    }
}
