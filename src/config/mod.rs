//! Configuration management module
//!
//! This module handles loading, saving, and managing page configuration:
//! pagination sizes, scroll thresholds, map location and contact messages.
//! Configuration is stored in `$SHOWCASE_HOME/Showcase/config.json` with
//! atomic writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{
    AnchorSettings, BackToTopSettings, ContactSettings, HeaderSettings, MapSettings,
    PaginationSettings, RevealSettings, ShowcaseConfig,
};
