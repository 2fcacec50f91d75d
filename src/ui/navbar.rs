//! Fixed navigation bar: logo, section links, theme toggle and the
//! mobile hamburger menu.

use crate::app::AppState;
use egui::{Button, RichText, Ui};
use folio::content::MOBILE_BREAKPOINT;
use folio::ThemeMode;

/// Interactions the navbar hands back to the coordinator.
pub enum NavbarInteraction {
    /// A section link (or the logo) was clicked.
    SectionSelected(String),
    /// The hamburger button was clicked.
    MenuToggled,
    /// The theme toggle was clicked.
    ThemeToggled,
}

/// Renders the navbar row plus, on mobile, the expanded menu list.
pub fn render_navbar(ui: &mut Ui, state: &AppState) -> Option<NavbarInteraction> {
    let mut interaction = None;
    let colors = state.theme.mode().colors();
    let width = state.scroll.viewport_width();
    // Before the first measured frame assume a desktop layout
    let is_mobile = width > 0.0 && width < MOBILE_BREAKPOINT;

    ui.horizontal(|ui| {
        let logo = RichText::new(&state.content.personal.initials)
            .size(24.0)
            .strong()
            .color(colors.primary);
        if ui.add(Button::new(logo).frame(false)).clicked() {
            interaction = Some(NavbarInteraction::SectionSelected("home".to_string()));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if is_mobile {
                let icon = if state.nav.is_menu_open() { "✕" } else { "☰" };
                if ui.add(Button::new(RichText::new(icon).size(20.0)).frame(false)).clicked() {
                    interaction = Some(NavbarInteraction::MenuToggled);
                }
                if theme_toggle_button(ui, state.theme.mode()) {
                    interaction = Some(NavbarInteraction::ThemeToggled);
                }
            } else {
                if theme_toggle_button(ui, state.theme.mode()) {
                    interaction = Some(NavbarInteraction::ThemeToggled);
                }
                // Right-to-left layout: iterate reversed to keep document order
                for link in state.nav.links().iter().rev() {
                    let mut text = RichText::new(&link.label).size(14.0);
                    text = if link.is_active {
                        text.strong().color(colors.primary)
                    } else {
                        text.color(colors.text_dim)
                    };
                    if ui.add(Button::new(text).frame(false)).clicked() {
                        interaction =
                            Some(NavbarInteraction::SectionSelected(link.target.clone()));
                    }
                }
            }
        });
    });

    if is_mobile && state.nav.is_menu_open() {
        ui.separator();
        for link in state.nav.links() {
            let mut text = RichText::new(&link.label).size(15.0);
            text = if link.is_active {
                text.strong().color(colors.primary)
            } else {
                text.color(colors.text)
            };
            if ui.add(Button::new(text).frame(false)).clicked() {
                interaction = Some(NavbarInteraction::SectionSelected(link.target.clone()));
            }
        }
        ui.add_space(6.0);
    }

    interaction
}

/// Sun/moon toggle; returns true when clicked.
fn theme_toggle_button(ui: &mut Ui, mode: ThemeMode) -> bool {
    let icon = match mode {
        ThemeMode::Dark => "☀",
        ThemeMode::Light => "🌙",
    };
    ui.add(Button::new(RichText::new(icon).size(16.0)).corner_radius(12.0))
        .clicked()
}
