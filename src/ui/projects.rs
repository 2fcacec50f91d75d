//! Projects section: a paged gallery of project cards.
//!
//! The gallery is a plain paging cursor driven by the numeric
//! configuration (autoplay delay, slides per breakpoint, looping); page
//! dots allow manual selection.

use crate::app::AppState;
use crate::state::GalleryState;
use crate::ui::widgets::{self, PageContext};
use egui::{Button, RichText, Ui};

pub fn render(ui: &mut Ui, state: &mut AppState, page: &PageContext) {
    let colors = state.theme.mode().colors();
    widgets::record_reveal_element(ui, state, page, "projects");
    let section_progress = state.reveal.progress("projects", page.now);

    let card_ids: Vec<String> = (0..state.content.projects.len())
        .map(|i| format!("projects/card-{i}"))
        .collect();
    state
        .reveal
        .register_group(card_ids.iter().map(String::as_str));

    widgets::reveal_scope(ui, section_progress, |ui| {
        widgets::section_heading(
            ui,
            colors,
            "Featured ",
            "Projects",
            "A selection of things I have built",
        );
    });

    let width = state.scroll.viewport_width();
    let gallery_config = state.content.gallery.clone();
    let projects = state.content.projects.clone();
    let per_page = gallery_config.slides_for_width(width).max(1);
    let page_count = GalleryState::page_count(&gallery_config, projects.len(), width);
    let current_page = state.gallery.page().min(page_count.saturating_sub(1));

    let start = current_page * per_page;
    let end = (start + per_page).min(projects.len());

    ui.horizontal_top(|ui| {
        let card_width = (ui.available_width() - 16.0 * per_page as f32) / per_page as f32;
        for index in start..end {
            let project = &projects[index];
            let id = &card_ids[index];
            widgets::record_reveal_element(ui, state, page, id);
            let progress = state.reveal.progress(id, page.now);

            widgets::reveal_scope(ui, progress, |ui| {
                widgets::card_frame(colors).show(ui, |ui| {
                    ui.set_width(card_width.max(220.0));
                    ui.label(
                        RichText::new(&project.title)
                            .strong()
                            .color(colors.text_strong),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(&project.description)
                            .size(13.0)
                            .color(colors.text_dim),
                    );
                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        for tag in &project.tags {
                            widgets::chip(ui, colors, tag);
                        }
                    });
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.hyperlink_to("Code", &project.github);
                        if !project.demo.is_empty() {
                            ui.hyperlink_to("Live Demo", &project.demo);
                        }
                    });
                });
            });
        }
    });

    // Pagination dots
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            for dot in 0..page_count {
                let icon = if dot == current_page { "●" } else { "○" };
                let dot_button = Button::new(RichText::new(icon).color(colors.primary)).frame(false);
                if ui.add(dot_button).clicked() {
                    state
                        .gallery
                        .select_page(dot, &gallery_config, projects.len(), width, page.now);
                }
            }
        });
    });

    ui.add_space(widgets::SECTION_PADDING);
}
