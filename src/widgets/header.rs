//! Header shrink-on-scroll state

use crate::config::HeaderSettings;
use tracing::debug;

/// Sticky header state
#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    settings: HeaderSettings,
    scrolled: bool,
}

impl HeaderState {
    /// Create a header in its unscrolled state
    pub fn new(settings: HeaderSettings) -> Self {
        Self {
            settings,
            scrolled: false,
        }
    }

    /// Update for a new vertical scroll offset
    pub fn on_scroll(&mut self, scroll_y: f64) {
        let scrolled = scroll_y > f64::from(self.settings.scroll_threshold_px);
        if scrolled != self.scrolled {
            debug!("Header scrolled state -> {} at y={}", scrolled, scroll_y);
        }
        self.scrolled = scrolled;
    }

    /// Whether the header carries the compact "scrolled" look
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}
