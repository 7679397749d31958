//! Mobile navigation menu

use tracing::debug;

/// Hamburger menu state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Hamburger pressed
    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!("Navigation menu open: {}", self.open);
    }

    /// A navigation link was followed; the menu always closes
    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    /// Whether the link list is expanded
    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());

        menu.toggle();
        menu.link_clicked();
        assert!(!menu.is_open());

        // Closing an already closed menu is harmless
        menu.link_clicked();
        assert!(!menu.is_open());
    }
}
