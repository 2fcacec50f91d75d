//! Hero section: name, tagline, bio and primary links.

use crate::app::AppState;
use crate::ui::widgets::{self, PageContext};
use egui::{RichText, Ui};

pub fn render(ui: &mut Ui, state: &mut AppState, page: &PageContext) {
    let colors = state.theme.mode().colors();
    widgets::record_reveal_element(ui, state, page, "home");
    let progress = state.reveal.progress("home", page.now);

    widgets::reveal_scope(ui, progress, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(widgets::SECTION_PADDING * 1.5);

            ui.label(
                RichText::new("Hi, I'm")
                    .size(18.0)
                    .color(colors.text_dim),
            );
            ui.label(
                RichText::new(&state.content.personal.name)
                    .size(44.0)
                    .strong()
                    .color(colors.text_strong),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(&state.content.personal.tagline)
                    .size(16.0)
                    .color(colors.primary),
            );

            ui.add_space(16.0);
            ui.scope(|ui| {
                ui.set_max_width(640.0);
                ui.label(RichText::new(&state.content.personal.bio).color(colors.text_dim));
            });

            ui.add_space(20.0);
            ui.horizontal_wrapped(|ui| {
                ui.hyperlink_to("View Resume", &state.content.personal.resume_link);
                ui.hyperlink_to("GitHub", &state.content.social.github);
                ui.hyperlink_to("LinkedIn", &state.content.social.linkedin);
                ui.hyperlink_to(
                    state.content.social.email.as_str(),
                    format!("mailto:{}", state.content.social.email),
                );
            });

            ui.add_space(widgets::SECTION_PADDING);
        });
    });
}
