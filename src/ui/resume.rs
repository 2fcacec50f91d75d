//! Resume section: external link to the hosted resume.

use crate::app::AppState;
use crate::ui::widgets::{self, PageContext};
use egui::{RichText, Ui};

pub fn render(ui: &mut Ui, state: &mut AppState, page: &PageContext) {
    let colors = state.theme.mode().colors();
    widgets::record_reveal_element(ui, state, page, "resume");
    let progress = state.reveal.progress("resume", page.now);

    widgets::reveal_scope(ui, progress, |ui| {
        widgets::section_heading(
            ui,
            colors,
            "My ",
            "Resume",
            "Download or view my complete resume",
        );

        ui.vertical_centered(|ui| {
            widgets::card_frame(colors).show(ui, |ui| {
                ui.set_min_width(320.0);
                ui.label(
                    RichText::new(&state.content.personal.name)
                        .strong()
                        .color(colors.text_strong),
                );
                ui.label(RichText::new(&state.content.personal.tagline).size(13.0).color(colors.text_dim));
                ui.add_space(8.0);
                ui.hyperlink_to(
                    RichText::new("Download Resume").strong(),
                    &state.content.personal.resume_link,
                );
            });
            ui.add_space(widgets::SECTION_PADDING);
        });
    });
}
