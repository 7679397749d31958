//! Configuration data models
//!
//! This module defines the data structures used for page configuration.
//! Every section falls back to its defaults when absent from the file.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Top-level page configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Project grid pagination
    pub pagination: PaginationSettings,
    /// Header shrink-on-scroll
    pub header: HeaderSettings,
    /// Back-to-top button
    pub back_to_top: BackToTopSettings,
    /// Reveal-on-scroll
    pub reveal: RevealSettings,
    /// In-page anchor navigation
    pub anchors: AnchorSettings,
    /// Location map
    pub map: MapSettings,
    /// Contact form feedback
    pub contact: ContactSettings,
}

/// Project grid pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
    /// Cards revealed right after a filter is selected
    pub initial_page_size: usize,
    /// Cards added by each "load more"
    pub page_increment: usize,
}

/// Header shrink-on-scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderSettings {
    /// Scroll offset past which the header is marked scrolled
    pub scroll_threshold_px: u32,
}

/// Back-to-top button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackToTopSettings {
    /// Scroll offset past which the button is shown
    pub threshold_px: u32,
}

/// Reveal-on-scroll
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// An element is revealed once its top is above `viewport_height / viewport_ratio`
    pub viewport_ratio: f64,
}

/// In-page anchor navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorSettings {
    /// Height of the fixed header subtracted from the section offset
    pub scroll_offset_px: u32,
}

/// Location map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Marker latitude
    pub latitude: f64,
    /// Marker longitude
    pub longitude: f64,
    /// Initial zoom level
    pub zoom: u8,
    /// Tile server URL template
    pub tile_url: String,
    /// Tile attribution HTML
    pub attribution: String,
    /// Marker popup HTML
    pub popup: String,
}

/// Contact form feedback messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    /// Submit button text while a submission is in flight
    pub sending_label: String,
    /// Shown when the submission is accepted
    pub success_message: String,
    /// Shown when the submission fails without details
    pub error_message: String,
    /// Prefix for server-reported field errors
    pub error_prefix: String,
}

impl ShowcaseConfig {
    /// Replace sections whose values would break page behavior with their defaults
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.pagination = self.pagination.sanitized();
        self
    }
}

impl PaginationSettings {
    /// Both sizes must be at least one card
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.initial_page_size > 0 && self.page_increment > 0
    }

    /// Fall back to the defaults when either size is zero
    #[must_use]
    pub fn sanitized(self) -> Self {
        if self.is_valid() {
            self
        } else {
            warn!(
                "Invalid pagination (initial_page_size={}, page_increment={}), using defaults",
                self.initial_page_size, self.page_increment
            );
            Self::default()
        }
    }
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            initial_page_size: 6,
            page_increment: 3,
        }
    }
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 50,
        }
    }
}

impl Default for BackToTopSettings {
    fn default() -> Self {
        Self { threshold_px: 300 }
    }
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            viewport_ratio: 1.3,
        }
    }
}

impl Default for AnchorSettings {
    fn default() -> Self {
        Self {
            scroll_offset_px: 80,
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            latitude: 33.5731,
            longitude: -7.5898,
            zoom: 15,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
            popup: "SOMIMAM<br>Quartier des Affaires, Casablanca".to_string(),
        }
    }
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            sending_label: "Envoi en cours...".to_string(),
            success_message:
                "Votre message a été envoyé avec succès ! Nous vous contacterons bientôt."
                    .to_string(),
            error_message: "Une erreur est survenue lors de l'envoi du message.".to_string(),
            error_prefix: "Erreur: ".to_string(),
        }
    }
}
