//! Application-level coordination and workflow management.
//!
//! Handles the high-level responses to UI interactions: navigation
//! clicks, theme and menu toggles, contact-form submission and the
//! settlement of background sends.

use crate::app::AppState;
use crate::io::{MailDispatcher, SendOutcome};
use folio::{EmailJsDelivery, FormStatus};

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Handles a navigation click on a section link.
    ///
    /// The active link flips immediately (optimistic override), then a
    /// smooth scroll starts toward the section's registered offset. On a
    /// narrow viewport the mobile menu closes as well.
    pub fn select_section(state: &mut AppState, section_id: &str, now: f64) {
        let Some(target) = state.scroll.section_target_offset(section_id) else {
            // Section not measured yet (first frame); ignore the click
            return;
        };
        state.nav.select_section(
            section_id,
            state.scroll.scroll_y(),
            target,
            now,
            state.scroll.viewport_width(),
        );
    }

    /// Flips the mobile menu open/closed.
    pub fn toggle_menu(state: &mut AppState) {
        state.nav.toggle_menu();
    }

    /// Flips the theme. The new mode is applied next frame and persisted
    /// by the app's save path.
    pub fn toggle_theme(state: &mut AppState) {
        state.theme.toggle();
    }

    /// Notifies the form that one of its fields changed.
    pub fn contact_field_edited(state: &mut AppState) {
        state.form.field_edited();
    }

    /// Attempts to submit the contact form.
    ///
    /// Validation failures surface inline without touching the network.
    /// A valid submission moves the form to Sending and hands the payload
    /// to the background dispatcher; while a send is in flight this is a
    /// no-op (the submit button is disabled too).
    pub fn submit_contact(state: &mut AppState, dispatcher: &mut MailDispatcher, ctx: &egui::Context) {
        if dispatcher.is_sending() {
            return;
        }
        if let Some(payload) = state.form.begin_submit() {
            let delivery = EmailJsDelivery::new(state.content.emailjs.clone());
            dispatcher.start_send(Box::new(delivery), payload, ctx);
        }
    }

    /// Applies a background send settlement to the form, if one arrived.
    ///
    /// Called once per frame in the update loop. Returns true when a send
    /// settled this frame.
    pub fn check_send_completion(state: &mut AppState, dispatcher: &mut MailDispatcher) -> bool {
        match dispatcher.check_completion() {
            SendOutcome::Success => {
                state.form.resolve_success();
                true
            }
            SendOutcome::Error(_) => {
                // The visible message names the fallback contact address;
                // the transport detail is not user-actionable.
                let fallback = state.content.social.email.clone();
                state.form.resolve_failure(&fallback);
                true
            }
            SendOutcome::None => false,
        }
    }

    /// Returns true while the submit trigger must be disabled.
    pub fn is_submit_locked(state: &AppState, dispatcher: &MailDispatcher) -> bool {
        dispatcher.is_sending() || state.form.status() == FormStatus::Sending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::{SiteContent, ThemeMode};

    fn test_state() -> AppState {
        AppState::new(SiteContent::builtin().clone(), ThemeMode::Dark)
    }

    #[test]
    fn test_select_section_without_registry_is_ignored() {
        let mut state = test_state();
        ApplicationCoordinator::select_section(&mut state, "about", 1.0);
        assert!(!state.nav.is_animating());
        assert!(state.nav.links().iter().all(|l| !l.is_active));
    }

    #[test]
    fn test_select_section_after_measurement() {
        use folio::scrollspy::SectionDescriptor;

        let mut state = test_state();
        state.scroll.begin_frame(1200.0, 800.0);
        state.scroll.apply_measurements(
            vec![
                SectionDescriptor { id: "home".into(), top_offset: 0.0, height: 600.0 },
                SectionDescriptor { id: "about".into(), top_offset: 600.0, height: 500.0 },
            ],
            1100.0,
        );

        ApplicationCoordinator::select_section(&mut state, "about", 1.0);
        assert!(state.nav.is_animating());
        let active: Vec<&str> = state
            .nav
            .links()
            .iter()
            .filter(|l| l.is_active)
            .map(|l| l.target.as_str())
            .collect();
        assert_eq!(active, ["about"]);
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        let mut state = test_state();
        ApplicationCoordinator::toggle_theme(&mut state);
        assert_eq!(state.theme.mode(), ThemeMode::Light);
        ApplicationCoordinator::toggle_theme(&mut state);
        assert_eq!(state.theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_invalid_submit_never_reaches_dispatcher() {
        let ctx = egui::Context::default();
        let mut state = test_state();
        let mut dispatcher = MailDispatcher::new();

        state.form.name = "Ada".to_string();
        state.form.email = "not-an-email".to_string();
        state.form.message = "Hello".to_string();

        ApplicationCoordinator::submit_contact(&mut state, &mut dispatcher, &ctx);
        assert_eq!(state.form.status(), FormStatus::Error);
        assert!(!dispatcher.is_sending());
        assert!(state.form.error_message().is_some());
    }
}
