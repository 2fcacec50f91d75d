//! Centralized application state for the Folio GUI.
//!
//! Composes focused state components that each manage one aspect of the
//! page: theme, navigation, scrolling, reveal animations, the project
//! gallery and the contact form. Each component has private fields with
//! intent-revealing methods so its invariants stay local; no component
//! mutates another's state.

use crate::state::{GalleryState, NavState, RevealState, ScrollState, ThemeState};
use folio::{ContactForm, SiteContent, ThemeMode};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Static page content; read-only for the whole session.
    pub content: SiteContent,

    /// Active visual mode.
    pub theme: ThemeState,

    /// Menu, active link and smooth-scroll state.
    pub nav: NavState,

    /// Section registry, live scroll offset and layout measurements.
    pub scroll: ScrollState,

    /// One-shot reveal scheduler.
    pub reveal: RevealState,

    /// Project gallery paging cursor.
    pub gallery: GalleryState,

    /// The single contact form instance.
    pub form: ContactForm,
}

impl AppState {
    /// Creates the application state for the given content with the theme
    /// mode resolved from storage.
    pub fn new(content: SiteContent, theme_mode: ThemeMode) -> Self {
        let nav = NavState::new(&content.nav_entries);
        Self {
            content,
            theme: ThemeState::with_mode(theme_mode),
            nav,
            scroll: ScrollState::new(),
            reveal: RevealState::new(),
            gallery: GalleryState::new(),
            form: ContactForm::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_follow_content() {
        let state = AppState::new(SiteContent::builtin().clone(), ThemeMode::Dark);
        assert_eq!(state.nav.links().len(), state.content.nav_entries.len());
        assert!(state.nav.links().iter().all(|l| !l.is_active));
    }
}
