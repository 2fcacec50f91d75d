//! Contact form submission state machine.
//!
//! The form owns its four field buffers and a status that only advances
//! through a fixed transition table:
//!
//! - Idle --submit(valid)--> Sending (delivery invoked)
//! - Idle --submit(invalid)--> Error (no delivery call)
//! - Sending --delivery ok--> Success (fields cleared)
//! - Sending --delivery failed--> Error (fields preserved)
//! - Error/Success --field edited--> Idle (error message cleared)
//! - Sending --submit--> Sending (guarded no-op, no concurrent sends)
//!
//! Nothing is retried automatically; after an Error the user must submit
//! again explicitly.

use crate::mail::MailPayload;
use thiserror::Error;

/// Validation failure for a single form field.
///
/// Recovered locally; a validation failure never reaches the delivery
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    EmptyName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    EmptyMessage,
}

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// Transient: fields are being checked during a submit call.
    Validating,
    Sending,
    Success,
    Error,
}

/// The contact form: field buffers plus submission status.
///
/// Field values are retained across an Error transition so nothing has to
/// be retyped, and cleared only on Success.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    status: FormStatus,
    error_message: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns true while a send is in flight; the submit trigger must be
    /// disabled in this state.
    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    /// Validates the current field values without changing state.
    ///
    /// Name and message must be non-empty after trimming; the email must
    /// match a standard address shape; subject is optional.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(())
    }

    /// Attempts to start a submission.
    ///
    /// Returns the payload to hand to the delivery collaborator when the
    /// fields validate; the form is then Sending and further submits are
    /// no-ops until the send settles. On validation failure the form moves
    /// to Error with an inline message and no payload is produced.
    pub fn begin_submit(&mut self) -> Option<MailPayload> {
        if self.status == FormStatus::Sending {
            // Re-entrant submit while in flight: guarded no-op
            return None;
        }

        self.status = FormStatus::Validating;
        match self.validate() {
            Ok(()) => {
                self.status = FormStatus::Sending;
                self.error_message = None;
                Some(MailPayload {
                    name: self.name.clone(),
                    email: self.email.clone(),
                    subject: self.subject.clone(),
                    message: self.message.clone(),
                })
            }
            Err(err) => {
                self.status = FormStatus::Error;
                self.error_message = Some(err.to_string());
                None
            }
        }
    }

    /// Applies a successful delivery settlement: clears every field.
    pub fn resolve_success(&mut self) {
        if self.status != FormStatus::Sending {
            return;
        }
        self.status = FormStatus::Success;
        self.error_message = None;
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }

    /// Applies a failed delivery settlement.
    ///
    /// Field values stay exactly as entered so the user can retry or copy
    /// them; the message points at the literal fallback contact address.
    pub fn resolve_failure(&mut self, fallback_email: &str) {
        if self.status != FormStatus::Sending {
            return;
        }
        self.status = FormStatus::Error;
        self.error_message = Some(format!(
            "Failed to send message. Please email me directly at {fallback_email}"
        ));
    }

    /// Notifies the form that a field was edited.
    ///
    /// From Error or Success this returns to Idle and clears the error
    /// message; in any other state it does nothing.
    pub fn field_edited(&mut self) {
        if matches!(self.status, FormStatus::Error | FormStatus::Success) {
            self.status = FormStatus::Idle;
            self.error_message = None;
        }
    }
}

/// Minimal standard-shape email check: one `@` with a non-empty local
/// part, a dotted domain, and no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Domain needs a dot with labels on both sides
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@exam ple.com"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_subject_is_optional() {
        let mut form = valid_form();
        form.subject.clear();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_whitespace_only_fields_fail_validation() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::EmptyName));

        let mut form = valid_form();
        form.message = "\n\t".to_string();
        assert_eq!(form.validate(), Err(ValidationError::EmptyMessage));
    }

    #[test]
    fn test_valid_submit_reaches_success_and_clears_fields() {
        let mut form = valid_form();

        let payload = form.begin_submit().expect("valid form produces a payload");
        assert_eq!(form.status(), FormStatus::Sending);
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.subject, "Hi");
        assert_eq!(payload.message, "Hello");

        form.resolve_success();
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.subject, "");
        assert_eq!(form.message, "");
        assert!(form.error_message().is_none());
    }

    #[test]
    fn test_invalid_email_goes_to_error_without_payload() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();

        assert!(form.begin_submit().is_none());
        assert_eq!(form.status(), FormStatus::Error);
        assert!(form.error_message().is_some());
    }

    #[test]
    fn test_delivery_failure_preserves_fields() {
        let mut form = valid_form();
        form.begin_submit().unwrap();

        form.resolve_failure("tyagisurya.04@gmail.com");
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.subject, "Hi");
        assert_eq!(form.message, "Hello");

        let message = form.error_message().unwrap();
        assert!(message.contains("tyagisurya.04@gmail.com"));
    }

    #[test]
    fn test_reentrant_submit_is_noop() {
        let mut form = valid_form();
        assert!(form.begin_submit().is_some());
        // Still Sending: no second payload, state unchanged
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status(), FormStatus::Sending);
    }

    #[test]
    fn test_field_edit_returns_to_idle() {
        let mut form = valid_form();
        form.email = "broken".to_string();
        form.begin_submit();
        assert_eq!(form.status(), FormStatus::Error);

        form.field_edited();
        assert_eq!(form.status(), FormStatus::Idle);
        assert!(form.error_message().is_none());

        // Editing after Success also re-arms the form
        let mut form = valid_form();
        form.begin_submit().unwrap();
        form.resolve_success();
        form.field_edited();
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_field_edit_during_sending_does_nothing() {
        let mut form = valid_form();
        form.begin_submit().unwrap();
        form.field_edited();
        assert_eq!(form.status(), FormStatus::Sending);
    }

    #[test]
    fn test_settlement_ignored_outside_sending() {
        let mut form = valid_form();
        form.resolve_success();
        assert_eq!(form.status(), FormStatus::Idle);
        form.resolve_failure("x@y.zz");
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.name, "Ada");
    }
}
