//! Location map widget descriptor
//!
//! The map itself is drawn by a third-party tile widget on the host page.
//! This module only assembles what that widget needs from configuration.

use crate::config::MapSettings;
use serde::Serialize;

/// Marker icon size in pixels
const MARKER_SIZE: [u16; 2] = [40, 40];

/// Popup offset from the icon anchor, one icon height up
const POPUP_ANCHOR: [i16; 2] = [0, -40];

/// Geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

/// Marker pinned at the map center
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    /// Marker position
    pub position: LatLng,
    /// Icon size in pixels
    pub icon_size: [u16; 2],
    /// Icon point placed on the position (bottom center)
    pub icon_anchor: [u16; 2],
    /// Popup offset from the icon anchor (opens above the icon)
    pub popup_anchor: [i16; 2],
    /// Popup HTML, opened on load
    pub popup: String,
}

/// Everything the host needs to initialize the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapWidget {
    /// Initial view center
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: u8,
    /// Tile server URL template
    pub tile_url: String,
    /// Tile attribution HTML
    pub attribution: String,
    /// The single location marker
    pub marker: MapMarker,
}

impl MapWidget {
    /// Build the widget descriptor from configuration
    pub fn from_settings(settings: &MapSettings) -> Self {
        let center = LatLng {
            lat: settings.latitude,
            lng: settings.longitude,
        };
        Self {
            center,
            zoom: settings.zoom,
            tile_url: settings.tile_url.clone(),
            attribution: settings.attribution.clone(),
            marker: MapMarker {
                position: center,
                icon_size: MARKER_SIZE,
                icon_anchor: [MARKER_SIZE[0] / 2, MARKER_SIZE[1]],
                popup_anchor: POPUP_ANCHOR,
                popup: settings.popup.clone(),
            },
        }
    }
}
