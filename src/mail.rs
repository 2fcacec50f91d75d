//! Email delivery collaborator.
//!
//! The contact form treats outbound delivery as an opaque, single-shot
//! operation: a payload goes in, the call settles exactly once with
//! success or failure, and nothing is retried. [`MailDelivery`] is the
//! seam; the production implementation posts to the EmailJS REST API with
//! a blocking HTTP client and is only ever invoked from a worker thread.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// EmailJS REST endpoint for template sends.
const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Request timeout for one send attempt.
const SEND_TIMEOUT: Duration = Duration::from_secs(20);

/// The four template parameters carried by one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// EmailJS account parameters, part of the static site configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Why a delivery attempt failed.
///
/// No structured error payload is assumed from the service; the variants
/// only distinguish transport failure from a rejecting response.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("could not reach the mail service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail service rejected the request (status {status})")]
    Rejected { status: u16 },
}

/// Single-shot asynchronous send operation, viewed from the caller as a
/// black box: it either resolves or rejects, exactly once, and cannot be
/// cancelled.
pub trait MailDelivery: Send {
    fn send(&self, payload: &MailPayload) -> Result<(), MailError>;
}

/// Production delivery via the EmailJS template-send endpoint.
pub struct EmailJsDelivery {
    config: EmailJsConfig,
    client: reqwest::blocking::Client,
}

impl EmailJsDelivery {
    /// Creates a delivery bound to one EmailJS service/template pair.
    pub fn new(config: EmailJsConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { config, client }
    }
}

impl MailDelivery for EmailJsDelivery {
    /// Blocking HTTP POST; must run on a worker thread, never the UI
    /// thread.
    fn send(&self, payload: &MailPayload) -> Result<(), MailError> {
        let body = json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": payload,
        });

        let response = self.client.post(EMAILJS_SEND_URL).json(&body).send()?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(MailError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serializes_to_template_params() {
        let payload = MailPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["subject"], "Hi");
        assert_eq!(value["message"], "Hello");
    }

    #[test]
    fn test_rejected_error_carries_status() {
        let err = MailError::Rejected { status: 403 };
        assert!(err.to_string().contains("403"));
    }
}
