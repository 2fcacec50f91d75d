//! Certificates section: issued credentials with verification links.

use crate::app::AppState;
use crate::ui::widgets::{self, PageContext};
use egui::{RichText, Ui};

pub fn render(ui: &mut Ui, state: &mut AppState, page: &PageContext) {
    let colors = state.theme.mode().colors();
    widgets::record_reveal_element(ui, state, page, "certificates");
    let section_progress = state.reveal.progress("certificates", page.now);

    let card_ids: Vec<String> = (0..state.content.certificates.len())
        .map(|i| format!("certificates/card-{i}"))
        .collect();
    state
        .reveal
        .register_group(card_ids.iter().map(String::as_str));

    widgets::reveal_scope(ui, section_progress, |ui| {
        widgets::section_heading(
            ui,
            colors,
            "My ",
            "Certificates",
            "Professional certifications and completed training programs",
        );
    });

    let certificates = state.content.certificates.clone();
    ui.horizontal_wrapped(|ui| {
        for (index, certificate) in certificates.iter().enumerate() {
            let id = &card_ids[index];
            widgets::record_reveal_element(ui, state, page, id);
            let progress = state.reveal.progress(id, page.now);

            widgets::reveal_scope(ui, progress, |ui| {
                widgets::card_frame(colors).show(ui, |ui| {
                    ui.set_width(240.0);
                    ui.label(
                        RichText::new(&certificate.title)
                            .strong()
                            .color(colors.text_strong),
                    );
                    ui.label(
                        RichText::new(format!("Issued by: {}", certificate.issuer))
                            .size(13.0)
                            .color(colors.text_dim),
                    );
                    ui.label(RichText::new(&certificate.date).size(12.0).color(colors.text_dim));
                    ui.add_space(6.0);
                    ui.hyperlink_to("View Certificate", &certificate.link);
                });
            });
        }
    });

    ui.add_space(widgets::SECTION_PADDING);
}
