// src/channel/mod.rs
//! Notification channel capability.
//!
//! This module defines the [`Notifier`] trait that represents the
//! **capability** of delivering a message, not any particular transport.
//! The trait is:
//!
//! - **Object-safe** — can be used as `&dyn Notifier` or `Arc<dyn Notifier>`
//! - **Fallible by contract** — `send` returns a `Result` even though the
//!   bundled stubs succeed unconditionally
//!
//! # Laws
//!
//! All implementations must satisfy these laws:
//!
//! - **L1 (Verbatim)**: the message appears in the channel output exactly as
//!   passed, with no validation, truncation, or escaping.
//! - **L2 (Statelessness)**: `send` leaves the notifier unchanged; calling it
//!   twice with the same message produces identical output and results.
//! - **L3 (Single-line)**: one `send` emits exactly one newline-terminated
//!   transmission line on the sink.

mod email;
mod sms;

pub use email::EmailNotifier;
pub use sms::SmsNotifier;

use thiserror::Error;

/// Failure modes of a notification channel.
///
/// The bundled stubs only ever surface [`ChannelError::Sink`], and with a
/// console sink that does not occur in practice. The remaining variants are
/// the vocabulary a real transport would speak; nothing in this crate
/// constructs them.
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Output sink write failed: {0}")]
    Sink(#[from] std::io::Error),

    #[error("Channel {channel} unavailable: {reason}")]
    Unavailable {
        channel: &'static str,
        reason: String,
    },

    #[error("Recipient {recipient} rejected by channel: {reason}")]
    RecipientRejected { recipient: String, reason: String },
}

/// Notification delivery capability.
///
/// A `Notifier` attempts to deliver `message` through its channel. Errors
/// flow unchanged to the caller; no implementation retries or logs and
/// swallows a failure.
pub trait Notifier: Send + Sync {
    fn send(&self, message: &str) -> Result<(), ChannelError>;
}
