//! Skills section: one card per category with a staggered reveal.

use crate::app::AppState;
use crate::ui::widgets::{self, PageContext};
use egui::{RichText, Ui};

pub fn render(ui: &mut Ui, state: &mut AppState, page: &PageContext) {
    let colors = state.theme.mode().colors();
    widgets::record_reveal_element(ui, state, page, "skills");
    let section_progress = state.reveal.progress("skills", page.now);

    // Category cards cascade in registration order
    let card_ids: Vec<String> = (0..state.content.skills.len())
        .map(|i| format!("skills/card-{i}"))
        .collect();
    state
        .reveal
        .register_group(card_ids.iter().map(String::as_str));

    widgets::reveal_scope(ui, section_progress, |ui| {
        widgets::section_heading(ui, colors, "Technical ", "Skills", "What I work with");
    });

    let columns = if state.scroll.viewport_width() < folio::content::MOBILE_BREAKPOINT {
        1
    } else {
        2
    };

    let categories = state.content.skills.clone();
    egui::Grid::new("skills_grid")
        .num_columns(columns)
        .spacing([16.0, 16.0])
        .show(ui, |ui| {
            for (index, category) in categories.iter().enumerate() {
                let id = &card_ids[index];
                widgets::record_reveal_element(ui, state, page, id);
                let progress = state.reveal.progress(id, page.now);

                widgets::reveal_scope(ui, progress, |ui| {
                    widgets::card_frame(colors).show(ui, |ui| {
                        ui.set_min_width(260.0);
                        ui.label(
                            RichText::new(&category.title)
                                .strong()
                                .color(colors.primary),
                        );
                        ui.add_space(6.0);
                        ui.horizontal_wrapped(|ui| {
                            for skill in &category.skills {
                                widgets::chip(ui, colors, skill);
                            }
                        });
                    });
                });

                if (index + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(widgets::SECTION_PADDING);
}
