//! Page event dispatch module
//!
//! This module wires user input to the page components and publishes the
//! resulting state to the presentation layer.
//!
//! # Event Flow
//!
//! ```text
//! Host listener → PageEvent → PageController → component transition
//!                                   ↓
//!                               PageState → Renderer
//! ```
//!
//! State transitions and rendering are separate steps: the controller never
//! touches presentation, and the renderer never mutates state. Transitions
//! are therefore testable without any rendering surface.
//!
//! Events are handled one at a time in arrival order. No handler blocks or
//! performs I/O.

pub mod controller;
pub mod events;
pub mod manifest;

pub use controller::{PageController, PageState};
pub use events::PageEvent;
pub use manifest::PageManifest;
