//! Theme state management.
//!
//! This module encapsulates the active visual mode. The mode changes only
//! through [`ThemeState::toggle`]; persistence is handled by the theme
//! coordinator.

use folio::ThemeMode;

/// State related to the visual theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    /// Creates a theme state with the dark default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a theme state with a mode resolved from storage.
    pub fn with_mode(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Returns the active mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flips between dark and light and returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_returns_new_mode() {
        let mut state = ThemeState::new();
        assert_eq!(state.mode(), ThemeMode::Dark);
        assert_eq!(state.toggle(), ThemeMode::Light);
        assert_eq!(state.mode(), ThemeMode::Light);
        assert_eq!(state.toggle(), ThemeMode::Dark);
    }
}
