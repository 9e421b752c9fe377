// src/user.rs
//! Users and notification forwarding.

use std::sync::Arc;

use crate::channel::{ChannelError, Notifier};
use crate::output::OutputSink;
use crate::types::EmailAddress;

/// A user who can receive notifications.
///
/// The notifier is held by reference: the user is bound to exactly one
/// channel for its entire lifetime and does not own or manage it. The caller
/// keeps the notifier alive for at least as long as the user.
pub struct User<'a> {
    name: String,
    email: EmailAddress,
    notifier: &'a dyn Notifier,
    sink: Arc<dyn OutputSink>,
}

impl<'a> User<'a> {
    pub fn new(
        name: impl Into<String>,
        email: EmailAddress,
        notifier: &'a dyn Notifier,
        sink: Arc<dyn OutputSink>,
    ) -> Self {
        Self {
            name: name.into(),
            email,
            notifier,
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Deliver `message` to this user through the bound notifier.
    ///
    /// Writes the attribution fragment, then delegates. The notifier's result
    /// is returned unchanged; this method adds no error handling of its own.
    pub fn notify(&self, message: &str) -> Result<(), ChannelError> {
        self.sink.write(&format!(
            "User {} ({}) received a notification: ",
            self.name, self.email
        ))?;
        self.notifier.send(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records every message it is asked to send.
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn send(&self, message: &str) -> Result<(), ChannelError> {
            self.sent.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    /// Always fails, so tests can observe error propagation.
    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn send(&self, _message: &str) -> Result<(), ChannelError> {
            Err(ChannelError::Unavailable {
                channel: "test",
                reason: "gateway offline".to_string(),
            })
        }
    }

    fn user_with<'a>(notifier: &'a dyn Notifier, sink: Arc<MemorySink>) -> User<'a> {
        User::new(
            "Alice",
            EmailAddress::new("alice@example.com").unwrap(),
            notifier,
            sink,
        )
    }

    #[test]
    fn notify_writes_attribution_prefix_before_delegating() {
        let sink = Arc::new(MemorySink::new());
        let notifier = RecordingNotifier::new();
        let user = user_with(&notifier, sink.clone());

        user.notify("ping").unwrap();

        assert_eq!(
            sink.contents(),
            "User Alice (alice@example.com) received a notification: "
        );
        assert_eq!(notifier.sent(), vec!["ping".to_string()]);
    }

    #[test]
    fn notify_passes_message_verbatim() {
        let sink = Arc::new(MemorySink::new());
        let notifier = RecordingNotifier::new();
        let user = user_with(&notifier, sink);

        user.notify("").unwrap();
        user.notify("  padded  ").unwrap();

        assert_eq!(notifier.sent(), vec!["".to_string(), "  padded  ".to_string()]);
    }

    #[test]
    fn notify_returns_notifier_failure_unchanged() {
        let sink = Arc::new(MemorySink::new());
        let notifier = FailingNotifier;
        let user = user_with(&notifier, sink.clone());

        let err = user.notify("ping").unwrap_err();

        assert!(matches!(
            err,
            ChannelError::Unavailable { channel: "test", .. }
        ));
        // The attribution prefix was already written when the failure surfaced.
        assert_eq!(
            sink.contents(),
            "User Alice (alice@example.com) received a notification: "
        );
    }

    #[test]
    fn notify_twice_produces_identical_results() {
        let sink = Arc::new(MemorySink::new());
        let notifier = RecordingNotifier::new();
        let user = user_with(&notifier, sink.clone());

        user.notify("same").unwrap();
        let first = sink.contents();
        user.notify("same").unwrap();

        assert_eq!(sink.contents(), format!("{first}{first}"));
        assert_eq!(notifier.sent(), vec!["same".to_string(), "same".to_string()]);
    }
}
