//! Footer: copyright line and social links.

use crate::app::AppState;
use egui::{RichText, Ui};

const COPYRIGHT_YEAR: u16 = 2025;

pub fn render(ui: &mut Ui, state: &AppState) {
    let colors = state.theme.mode().colors();

    ui.separator();
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.label(
            RichText::new(format!(
                "© {} {}",
                COPYRIGHT_YEAR, state.content.personal.name
            ))
            .size(13.0)
            .color(colors.text_dim),
        );
        ui.horizontal(|ui| {
            ui.hyperlink_to("GitHub", &state.content.social.github);
            ui.hyperlink_to("LinkedIn", &state.content.social.linkedin);
            ui.hyperlink_to(
                "Email",
                format!("mailto:{}", state.content.social.email),
            );
        });
        ui.add_space(20.0);
    });
}
