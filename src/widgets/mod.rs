//! Page chrome components
//!
//! Small, independent state machines for the parts of the page around the
//! project grid. Each owns its own state; nothing here is global.
//!
//! - `HeaderState`: compact header once the page is scrolled
//! - `NavMenu`: mobile hamburger menu
//! - `FaqAccordion`: single-open FAQ list
//! - `BackToTop`: scroll-to-top button
//! - `ScrollReveal`: one-shot reveal of sections entering the viewport
//! - `resolve_anchor`: smooth-scroll target for in-page links

pub mod accordion;
pub mod anchor;
pub mod back_to_top;
pub mod header;
pub mod nav_menu;
pub mod reveal;

pub use accordion::FaqAccordion;
pub use anchor::{Section, resolve_anchor};
pub use back_to_top::BackToTop;
pub use header::HeaderState;
pub use nav_menu::NavMenu;
pub use reveal::ScrollReveal;
