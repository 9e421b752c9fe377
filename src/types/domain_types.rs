// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.
//!
//! Recipient addresses and channel credentials are validated once, at
//! construction. The notification *message* is deliberately not a newtype:
//! any string is accepted and transmitted verbatim.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recipient email address.
///
/// Validation is structural (non-empty local part and domain around a single
/// `@`), not a full RFC 5321 parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address with validation.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();

        if address.is_empty() {
            return Err(ValidationError::InvalidEmail {
                address,
                reason: "address cannot be empty".to_string(),
            });
        }

        let mut parts = address.splitn(2, '@');
        let local = parts.next().unwrap_or("");
        let domain = parts.next();

        match domain {
            None => {
                return Err(ValidationError::InvalidEmail {
                    address: address.clone(),
                    reason: "missing '@'".to_string(),
                })
            }
            Some(domain) if local.is_empty() || domain.is_empty() => {
                return Err(ValidationError::InvalidEmail {
                    address: address.clone(),
                    reason: "local part and domain must be non-empty".to_string(),
                })
            }
            Some(domain) if domain.contains('@') => {
                return Err(ValidationError::InvalidEmail {
                    address: address.clone(),
                    reason: "multiple '@' characters".to_string(),
                })
            }
            Some(_) => {}
        }

        Ok(Self(address))
    }

    /// Get the address as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

/// A recipient phone number in E.164-like form: `+` followed by digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Minimum digits after the `+` prefix.
    const MIN_DIGITS: usize = 7;
    /// Maximum digits after the `+` prefix (E.164 limit).
    const MAX_DIGITS: usize = 15;

    /// Create a new phone number with validation.
    pub fn new(number: impl Into<String>) -> Result<Self, ValidationError> {
        let number = number.into();

        let Some(digits) = number.strip_prefix('+') else {
            return Err(ValidationError::InvalidPhoneNumber {
                number,
                reason: "must start with '+'".to_string(),
            });
        };

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhoneNumber {
                number: number.clone(),
                reason: "only digits may follow '+'".to_string(),
            });
        }

        if digits.len() < Self::MIN_DIGITS || digits.len() > Self::MAX_DIGITS {
            return Err(ValidationError::InvalidPhoneNumber {
                number: number.clone(),
                reason: format!(
                    "expected {} to {} digits, got {}",
                    Self::MIN_DIGITS,
                    Self::MAX_DIGITS,
                    digits.len()
                ),
            });
        }

        Ok(Self(number))
    }

    /// Get the number as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// API key for an SMS gateway account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key with validation.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();

        if key.is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot be empty".to_string(),
            });
        }

        if key.chars().any(|c| c.is_whitespace()) {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot contain whitespace".to_string(),
            });
        }

        Ok(Self(key))
    }

    /// Get the API key as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    // Redact API key in display
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(4).collect();
        write!(f, "{}…", prefix)
    }
}
