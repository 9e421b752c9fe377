// src/channel/sms.rs
//! SMS channel stub.

use std::sync::Arc;

use super::{ChannelError, Notifier};
use crate::output::OutputSink;
use crate::types::{ApiKey, PhoneNumber};

/// Delivers notifications over SMS.
///
/// This is a stub: instead of calling a gateway with `api_key`, it writes
/// the transmission it would have made to the output sink. The key appears
/// verbatim in the transmission line; only log records redact it.
pub struct SmsNotifier {
    api_key: ApiKey,
    phone_number: PhoneNumber,
    sink: Arc<dyn OutputSink>,
}

impl SmsNotifier {
    pub fn new(api_key: ApiKey, phone_number: PhoneNumber, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            api_key,
            phone_number,
            sink,
        }
    }
}

impl Notifier for SmsNotifier {
    fn send(&self, message: &str) -> Result<(), ChannelError> {
        log::debug!(
            "Dispatching SMS transmission to {} (key {})",
            self.phone_number,
            self.api_key
        );
        self.sink.write(&format!(
            "Sending SMS to {} using API key {}: {}\n",
            self.phone_number.as_str(),
            self.api_key.as_str(),
            message
        ))?;
        Ok(())
    }
}
