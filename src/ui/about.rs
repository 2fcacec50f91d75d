//! About section: bio, education and career goal.

use crate::app::AppState;
use crate::ui::widgets::{self, PageContext};
use egui::{RichText, Ui};

pub fn render(ui: &mut Ui, state: &mut AppState, page: &PageContext) {
    let colors = state.theme.mode().colors();
    widgets::record_reveal_element(ui, state, page, "about");
    let progress = state.reveal.progress("about", page.now);

    widgets::reveal_scope(ui, progress, |ui| {
        widgets::section_heading(ui, colors, "About ", "Me", "");

        ui.vertical_centered(|ui| {
            ui.scope(|ui| {
                ui.set_max_width(720.0);
                ui.label(RichText::new(&state.content.personal.bio).color(colors.text));

                ui.add_space(20.0);
                widgets::card_frame(colors).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new("Education").strong().color(colors.primary));
                    ui.label(
                        RichText::new(&state.content.education.degree)
                            .strong()
                            .color(colors.text_strong),
                    );
                    ui.label(RichText::new(&state.content.education.university).color(colors.text));
                    ui.label(RichText::new(&state.content.education.year).color(colors.text_dim));
                });

                ui.add_space(12.0);
                widgets::card_frame(colors).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new("Goal").strong().color(colors.primary));
                    ui.label(RichText::new(&state.content.personal.goal).color(colors.text));
                });
            });
            ui.add_space(widgets::SECTION_PADDING);
        });
    });
}
