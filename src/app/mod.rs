//! Application-level modules for the Folio GUI.
//!
//! This module contains the main application coordinator, theme
//! persistence and centralized state management.

mod app_state;
mod application_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
