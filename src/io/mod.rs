//! Background work for the Folio GUI.

mod mail_dispatcher;

pub use mail_dispatcher::{MailDispatcher, SendOutcome};
