//! Asynchronous contact-form delivery.
//!
//! The delivery call blocks on network I/O, so it runs on a background
//! thread while the UI stays responsive. The dispatcher holds at most one
//! in-flight send; the settlement comes back over a channel and is picked
//! up by `check_completion()` once per frame. There is no cancellation:
//! an in-flight send can only be guarded against duplication, not
//! aborted.

use eframe::egui;
use folio::{MailDelivery, MailError, MailPayload};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Settlement of a delivery attempt.
pub enum SendOutcome {
    /// The send resolved successfully.
    Success,
    /// The send rejected; no structured payload is assumed.
    Error(String),
    /// No settlement available (still sending or nothing in flight).
    None,
}

/// Coordinates one background delivery at a time with the GUI thread.
#[derive(Default)]
pub struct MailDispatcher {
    /// Channel receiver for the in-flight send, if any.
    receiver: Option<Receiver<Result<(), MailError>>>,
}

impl MailDispatcher {
    /// Creates a dispatcher with nothing in flight.
    pub fn new() -> Self {
        Self { receiver: None }
    }

    /// Returns true while a send is in flight.
    pub fn is_sending(&self) -> bool {
        self.receiver.is_some()
    }

    /// Starts a delivery on a background thread.
    ///
    /// Ignored if a send is already in flight; the form state machine
    /// disables the submit trigger in that case, this is the second
    /// guard. Requests a repaint when the send settles so the result is
    /// picked up promptly.
    ///
    /// # Arguments
    /// * `delivery` - The delivery collaborator to invoke
    /// * `payload` - The validated form payload
    /// * `ctx` - egui context for the settlement repaint
    pub fn start_send(
        &mut self,
        delivery: Box<dyn MailDelivery>,
        payload: MailPayload,
        ctx: &egui::Context,
    ) {
        if self.receiver.is_some() {
            return;
        }

        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        let ctx_handle = ctx.clone();
        thread::spawn(move || {
            let result = delivery.send(&payload);

            // The receiver may be gone if the app shut down mid-send
            let _ = sender.send(result);

            ctx_handle.request_repaint();
        });
    }

    /// Polls for a settlement; call once per frame in the update loop.
    ///
    /// Exactly one `Success`/`Error` is produced per send, after which the
    /// dispatcher is ready for the next submission.
    pub fn check_completion(&mut self) -> SendOutcome {
        if let Some(receiver) = &self.receiver {
            if let Ok(result) = receiver.try_recv() {
                self.receiver = None;
                return match result {
                    Ok(()) => SendOutcome::Success,
                    Err(err) => SendOutcome::Error(err.to_string()),
                };
            }
        }
        SendOutcome::None
    }
}
