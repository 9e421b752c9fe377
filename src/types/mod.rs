use thiserror::Error;

mod domain_types;

pub use domain_types::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid email address: {address} - {reason}")]
    InvalidEmail { address: String, reason: String },

    #[error("Invalid phone number: {number} - {reason}")]
    InvalidPhoneNumber { number: String, reason: String },

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid SMTP port: {0}")]
    InvalidSmtpPort(u16),

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),
}
