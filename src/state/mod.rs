//! State management modules for the Folio GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (active mode)
//! - Nav state (menu flag, active link, smooth-scroll animation)
//! - Scroll state (section registry, live offset, measurements)
//! - Reveal state (one-shot reveal scheduler)
//! - Gallery state (project gallery paging cursor)

mod gallery_state;
mod nav_state;
mod reveal_state;
mod scroll_state;
mod theme_state;

pub use gallery_state::GalleryState;
pub use nav_state::NavState;
pub use reveal_state::RevealState;
pub use scroll_state::ScrollState;
pub use theme_state::ThemeState;
