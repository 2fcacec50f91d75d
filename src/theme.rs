//! Theme support module for the Folio GUI
//!
//! The portfolio uses exactly two visual modes, dark and light, with dark as
//! the default when no preference has been persisted. The persisted value is
//! the literal lowercase mode name ("dark" or "light"); anything else read
//! back from storage falls back to dark.
//!
//! # Examples
//!
//! ```
//! use folio::theme::ThemeMode;
//!
//! let mode = ThemeMode::from_persisted(Some("light"));
//! assert_eq!(mode, ThemeMode::Light);
//! assert_eq!(mode.toggled(), ThemeMode::Dark);
//! ```

use egui::Color32;

/// The two supported visual modes.
///
/// Exactly one mode is active at any time. The mode is mutated only by
/// toggling; it is persisted on every change and read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

impl ThemeMode {
    /// Parses a persisted preference string.
    ///
    /// Returns `Dark` for a missing value or any value other than the
    /// literal "light". Persistence unavailability is therefore non-fatal;
    /// the session just runs on the default.
    pub fn from_persisted(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    /// Returns the literal string persisted for this mode.
    ///
    /// The persisted value always equals the active mode.
    pub fn persisted_value(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Returns the opposite mode without mutating anything.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Returns the color palette for this mode.
    pub fn colors(&self) -> &'static ThemeColors {
        match self {
            ThemeMode::Dark => &DARK_COLORS,
            ThemeMode::Light => &LIGHT_COLORS,
        }
    }

    /// Applies this mode's palette to egui visuals.
    ///
    /// Called once per frame so a toggle takes effect immediately.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self {
            ThemeMode::Dark => egui::Visuals::dark(),
            ThemeMode::Light => egui::Visuals::light(),
        };

        let colors = self.colors();

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.primary;

        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;

        ctx.set_visuals(visuals);
    }
}

/// Color palette covering the UI elements of the portfolio.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub card_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Semantic colors
    pub primary: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
}

/// Dark palette (gray-900 family of the source design).
static DARK_COLORS: ThemeColors = ThemeColors {
    background: Color32::from_rgb(17, 24, 39),
    panel_background: Color32::from_rgb(17, 24, 39),
    extreme_background: Color32::from_rgb(11, 15, 25),
    card_background: Color32::from_rgb(31, 41, 55),

    text: Color32::from_rgb(243, 244, 246),
    text_dim: Color32::from_rgb(156, 163, 175),
    text_strong: Color32::from_rgb(255, 255, 255),

    selection: Color32::from_rgb(50, 80, 120),
    hover: Color32::from_rgb(55, 65, 81),
    border: Color32::from_rgb(75, 85, 99),

    primary: Color32::from_rgb(59, 130, 246),
    accent: Color32::from_rgb(139, 92, 246),
    success: Color32::from_rgb(46, 204, 113),
    warning: Color32::from_rgb(243, 156, 18),
    error: Color32::from_rgb(231, 76, 60),
};

/// Light palette.
static LIGHT_COLORS: ThemeColors = ThemeColors {
    background: Color32::from_rgb(255, 255, 255),
    panel_background: Color32::from_rgb(249, 250, 251),
    extreme_background: Color32::from_rgb(255, 255, 255),
    card_background: Color32::from_rgb(255, 255, 255),

    text: Color32::from_rgb(17, 24, 39),
    text_dim: Color32::from_rgb(107, 114, 128),
    text_strong: Color32::from_rgb(0, 0, 0),

    selection: Color32::from_rgb(180, 200, 255),
    hover: Color32::from_rgb(229, 231, 235),
    border: Color32::from_rgb(209, 213, 219),

    primary: Color32::from_rgb(37, 99, 235),
    accent: Color32::from_rgb(124, 58, 237),
    success: Color32::from_rgb(22, 163, 74),
    warning: Color32::from_rgb(217, 119, 6),
    error: Color32::from_rgb(220, 38, 38),
};

/// Adjusts the brightness of a color by a factor (1.0 = no change).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_from_persisted_literals() {
        assert_eq!(ThemeMode::from_persisted(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_persisted(Some("light")), ThemeMode::Light);
    }

    #[test]
    fn test_from_persisted_fallback() {
        // Absent or garbage values degrade to the dark default
        assert_eq!(ThemeMode::from_persisted(None), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_persisted(Some("")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_persisted(Some("Light")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_persisted(Some("blue")), ThemeMode::Dark);
    }

    #[test]
    fn test_persisted_value_round_trip() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let restored = ThemeMode::from_persisted(Some(mode.persisted_value()));
            assert_eq!(restored, mode);
        }
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mode = ThemeMode::Dark;
        assert_eq!(mode.toggled().toggled(), mode);
        assert_eq!(
            mode.toggled().toggled().persisted_value(),
            mode.persisted_value()
        );
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(
            ThemeMode::Dark.colors().background,
            ThemeMode::Light.colors().background
        );
    }
}
