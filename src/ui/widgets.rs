//! Shared rendering helpers for the page sections.

use crate::app::AppState;
use egui::{RichText, Ui};
use folio::ThemeColors;

/// Per-frame rendering context shared by every section.
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    /// Document-top y coordinate of the scrollable content.
    pub origin: f32,
    /// Frame time in seconds.
    pub now: f64,
}

/// Vertical padding above and below each section body.
pub const SECTION_PADDING: f32 = 48.0;

/// Records a revealable element's offset for next frame's intersection
/// pass.
pub fn record_reveal_element(ui: &Ui, state: &mut AppState, page: &PageContext, id: &str) {
    let top = ui.cursor().min.y - page.origin;
    state.scroll.record_element(id, top);
}

/// Renders content under a one-shot reveal: fully transparent before the
/// trigger fires, then sliding up and fading in over the reveal ramp.
pub fn reveal_scope<R>(ui: &mut Ui, progress: f32, add: impl FnOnce(&mut Ui) -> R) -> R {
    ui.add_space(12.0 * (1.0 - progress));
    ui.scope(|ui| {
        ui.set_opacity(progress);
        add(ui)
    })
    .inner
}

/// Centered two-tone section heading with a dimmed subtitle.
pub fn section_heading(ui: &mut Ui, colors: &ThemeColors, title: &str, accent: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(SECTION_PADDING);
        ui.horizontal_top(|ui| {
            // Center the two-part title by padding with flexible space
            ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(title).size(30.0).strong().color(colors.text_strong));
                    ui.label(RichText::new(accent).size(30.0).strong().color(colors.primary));
                });
            });
        });
        if !subtitle.is_empty() {
            ui.add_space(6.0);
            ui.label(RichText::new(subtitle).color(colors.text_dim));
        }
        ui.add_space(24.0);
    });
}

/// Card frame used for skills, projects and certificates.
pub fn card_frame(colors: &ThemeColors) -> egui::Frame {
    egui::Frame::default()
        .fill(colors.card_background)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(12))
}

/// Small rounded chip for a tag or skill name.
pub fn chip(ui: &mut Ui, colors: &ThemeColors, text: &str) {
    egui::Frame::default()
        .fill(colors.hover)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(12.0).color(colors.text));
        });
}
