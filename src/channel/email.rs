// src/channel/email.rs
//! Email channel stub.

use std::sync::Arc;

use super::{ChannelError, Notifier};
use crate::output::OutputSink;

/// Delivers notifications over email.
///
/// This is a stub: instead of speaking SMTP to `smtp_host:smtp_port`, it
/// writes the transmission it would have made to the output sink.
pub struct EmailNotifier {
    smtp_host: String,
    smtp_port: u16,
    sink: Arc<dyn OutputSink>,
}

impl EmailNotifier {
    pub fn new(smtp_host: impl Into<String>, smtp_port: u16, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            smtp_host: smtp_host.into(),
            smtp_port,
            sink,
        }
    }
}

impl Notifier for EmailNotifier {
    fn send(&self, message: &str) -> Result<(), ChannelError> {
        log::debug!(
            "Dispatching email transmission via {}:{}",
            self.smtp_host,
            self.smtp_port
        );
        self.sink.write(&format!(
            "Sending email via {}:{}: {}\n",
            self.smtp_host, self.smtp_port, message
        ))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;
    use pretty_assertions::assert_eq;

    fn notifier_with_sink() -> (EmailNotifier, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let notifier = EmailNotifier::new("smtp.gmail.com", 587, sink.clone());
        (notifier, sink)
    }

    #[test]
    fn send_writes_exact_transmission_line() {
        let (notifier, sink) = notifier_with_sink();

        let result = notifier.send("Hello, Alice!");

        assert!(result.is_ok());
        assert_eq!(
            sink.contents(),
            "Sending email via smtp.gmail.com:587: Hello, Alice!\n"
        );
    }

    #[test]
    fn send_accepts_any_message_verbatim() {
        let (notifier, sink) = notifier_with_sink();

        notifier.send("").unwrap();
        notifier.send("line1\nline2").unwrap();

        assert_eq!(
            sink.contents(),
            "Sending email via smtp.gmail.com:587: \n\
             Sending email via smtp.gmail.com:587: line1\nline2\n"
        );
    }

    #[test]
    fn send_is_idempotent() {
        let (notifier, sink) = notifier_with_sink();

        notifier.send("repeat").unwrap();
        notifier.send("repeat").unwrap();

        let expected = "Sending email via smtp.gmail.com:587: repeat\n";
        assert_eq!(sink.contents(), format!("{expected}{expected}"));
    }
}
