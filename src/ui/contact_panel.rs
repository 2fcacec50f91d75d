//! Contact section: contact details plus the submission form.

use crate::app::AppState;
use crate::ui::widgets::{self, PageContext};
use egui::{Button, RichText, TextEdit, Ui};
use folio::FormStatus;

const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Interactions the contact form hands back to the coordinator.
pub enum ContactInteraction {
    /// Any field buffer changed this frame.
    FieldEdited,
    /// The send button was clicked.
    SubmitRequested,
}

pub fn render(
    ui: &mut Ui,
    state: &mut AppState,
    page: &PageContext,
    submit_locked: bool,
) -> Option<ContactInteraction> {
    let mut interaction = None;
    let colors = state.theme.mode().colors();
    widgets::record_reveal_element(ui, state, page, "contact");
    let progress = state.reveal.progress("contact", page.now);

    widgets::reveal_scope(ui, progress, |ui| {
        widgets::section_heading(
            ui,
            colors,
            "Get In ",
            "Touch",
            "Let's discuss opportunities or collaborations",
        );

        ui.vertical_centered(|ui| {
            ui.scope(|ui| {
                ui.set_max_width(560.0);

                widgets::card_frame(colors).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new("Contact Information").strong().color(colors.text_strong));
                    ui.hyperlink_to(
                        state.content.social.email.as_str(),
                        format!("mailto:{}", state.content.social.email),
                    );
                    ui.label(RichText::new(&state.content.personal.location).color(colors.text_dim));
                    ui.horizontal(|ui| {
                        ui.hyperlink_to("GitHub", &state.content.social.github);
                        ui.hyperlink_to("LinkedIn", &state.content.social.linkedin);
                    });
                });

                ui.add_space(16.0);

                widgets::card_frame(colors).show(ui, |ui| {
                    ui.set_width(ui.available_width());

                    let mut edited = false;
                    edited |= ui
                        .add(TextEdit::singleline(&mut state.form.name).hint_text("Your Name"))
                        .changed();
                    edited |= ui
                        .add(TextEdit::singleline(&mut state.form.email).hint_text("Your Email"))
                        .changed();
                    edited |= ui
                        .add(TextEdit::singleline(&mut state.form.subject).hint_text("Subject"))
                        .changed();
                    edited |= ui
                        .add(
                            TextEdit::multiline(&mut state.form.message)
                                .hint_text("Your Message")
                                .desired_rows(5),
                        )
                        .changed();
                    if edited {
                        interaction = Some(ContactInteraction::FieldEdited);
                    }

                    // Inline status line
                    match state.form.status() {
                        FormStatus::Success => {
                            ui.label(RichText::new(SUCCESS_MESSAGE).color(colors.success));
                        }
                        FormStatus::Error => {
                            if let Some(message) = state.form.error_message() {
                                ui.label(RichText::new(message).color(colors.error));
                            }
                        }
                        _ => {}
                    }

                    ui.add_space(8.0);
                    let label = if submit_locked { "Sending..." } else { "Send Message" };
                    let send_button = Button::new(RichText::new(label).strong());
                    if ui.add_enabled(!submit_locked, send_button).clicked() {
                        interaction = Some(ContactInteraction::SubmitRequested);
                    }
                });
            });
            ui.add_space(widgets::SECTION_PADDING);
        });
    });

    interaction
}
