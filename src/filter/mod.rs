//! Project filter and progressive disclosure
//!
//! Narrows a fixed, page-rendered list of project cards to one category and
//! reveals matching cards a page at a time.
//!
//! # Overview
//!
//! - **Filter controls** select `all` or a single category; exactly one is active
//! - **Reveal count** starts at the initial page size and grows by a fixed
//!   increment each time "load more" is activated
//! - **Visibility** is derived, never stored per card: the first
//!   `min(reveal_count, matches)` matching cards in document order are shown
//!
//! # Architecture
//!
//! - `FilterController`: owns cards, active filter and reveal count
//! - `VisibilityState`: per-card flags plus the "load more" flag, consumed by
//!   the render step
//! - `Filter`, `Card`, `CategoryId`, `FilterControl`: page data models
//!
//! # Transition Rules
//!
//! 1. **Filter selected**: reset reveal count to the initial page size, recompute
//! 2. **Load more**: if the affordance is shown, add the increment, recompute
//!
//! The reveal count may overshoot the match count after the final page.
//! Every consumer reads the clamped `visible_count()` instead.

pub mod controller;
pub mod models;

pub use controller::{FilterController, VisibilityState};
pub use models::{ALL_FILTER_ID, Card, CategoryId, Filter, FilterControl};
