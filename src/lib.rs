//! `showcase` - Interactive behavior engine for a marketing showcase site
//!
//! Models the page's interactive parts as small state machines driven by
//! discrete user events. The centerpiece is the project grid: filter buttons
//! narrow a fixed list of project cards to one category and a "load more"
//! button discloses matching cards a page at a time.
//!
//! Each event goes through `PageController`, which applies a pure state
//! transition and then publishes a `PageState` snapshot for a separate render
//! step. Everything runs synchronously on one thread.

// Module declarations
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod map;
pub mod page;
pub mod render;
pub mod utils;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use error::{Result, ShowcaseError};
