//! Back-to-top button

use crate::config::BackToTopSettings;

/// Back-to-top button state
#[derive(Debug, Clone, Copy, Default)]
pub struct BackToTop {
    settings: BackToTopSettings,
    visible: bool,
}

impl BackToTop {
    /// Create a hidden button
    pub fn new(settings: BackToTopSettings) -> Self {
        Self {
            settings,
            visible: false,
        }
    }

    /// Update for a new vertical scroll offset
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.visible = scroll_y > f64::from(self.settings.threshold_px);
    }

    /// Button pressed; returns the scroll target
    pub fn activate(&self) -> f64 {
        0.0
    }

    /// Whether the button is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
