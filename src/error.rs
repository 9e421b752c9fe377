// src/error.rs
//! Application error types with structured error handling.
//!
//! [`ChannelError`] lives with the channel capability it belongs to; this
//! module defines the top-level [`AppError`] that configuration, roster
//! loading, and dispatch failures funnel into.

use thiserror::Error;

use crate::channel::ChannelError;
use crate::types::ValidationError;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Roster file {} is not valid JSON: {source}", path.display())]
    RosterParse {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Notification dispatch failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Channel(#[from] ChannelError),
}

/// Result type alias for convenience
#[allow(dead_code)]
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_failed_lists_every_failure() {
        let err = AppError::DeliveryFailed {
            failures: vec![
                "Alice: gateway offline".to_string(),
                "Bob: recipient rejected".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Notification dispatch failed: Alice: gateway offline, Bob: recipient rejected"
        );
    }

    #[test]
    fn validation_error_passes_through_transparently() {
        let err = AppError::from(ValidationError::EmptyField("roster"));
        assert_eq!(err.to_string(), "Empty required field: roster");
    }

    #[test]
    fn channel_error_passes_through_transparently() {
        let err = AppError::from(ChannelError::Unavailable {
            channel: "sms",
            reason: "gateway offline".to_string(),
        });
        assert_eq!(err.to_string(), "Channel sms unavailable: gateway offline");
    }
}
