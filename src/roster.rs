// src/roster.rs
//! The dispatch roster: who gets notified, over which channel, with what
//! message.
//!
//! A roster is either the built-in demo roster (reproducing the canonical
//! two-user run) or deserialized from a JSON file of the same shape:
//!
//! ```json
//! [
//!   { "name": "Alice", "email": "alice@example.com", "channel": "email", "message": "Hello, Alice!" }
//! ]
//! ```

use serde::Deserialize;
use std::fmt;

use crate::types::EmailAddress;

/// Which channel stub a roster entry is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Sms,
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Sms => write!(f, "sms"),
        }
    }
}

/// One planned notification: a recipient and the message they receive.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub email: EmailAddress,
    pub channel: ChannelKind,
    pub message: String,
}

/// The built-in roster: Alice over email, Bob over SMS.
pub fn demo_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry {
            name: "Alice".to_string(),
            email: EmailAddress::new("alice@example.com")
                .expect("demo roster address should be valid"),
            channel: ChannelKind::Email,
            message: "Hello, Alice!".to_string(),
        },
        RosterEntry {
            name: "Bob".to_string(),
            email: EmailAddress::new("bob@example.com")
                .expect("demo roster address should be valid"),
            channel: ChannelKind::Sms,
            message: "Hello, Bob!".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn demo_roster_matches_canonical_wiring() {
        let roster = demo_roster();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Alice");
        assert_eq!(roster[0].channel, ChannelKind::Email);
        assert_eq!(roster[0].message, "Hello, Alice!");
        assert_eq!(roster[1].name, "Bob");
        assert_eq!(roster[1].channel, ChannelKind::Sms);
        assert_eq!(roster[1].message, "Hello, Bob!");
    }

    #[test]
    fn roster_entry_deserializes_from_json() {
        let raw = r#"
            { "name": "Carol", "email": "carol@example.com", "channel": "sms", "message": "Hi" }
        "#;

        let entry: RosterEntry = serde_json::from_str(raw).unwrap();

        assert_eq!(entry.name, "Carol");
        assert_eq!(entry.email.as_str(), "carol@example.com");
        assert_eq!(entry.channel, ChannelKind::Sms);
        assert_eq!(entry.message, "Hi");
    }

    #[test]
    fn roster_entry_rejects_unknown_channel() {
        let raw = r#"
            { "name": "Carol", "email": "carol@example.com", "channel": "pigeon", "message": "Hi" }
        "#;

        let entry: Result<RosterEntry, _> = serde_json::from_str(raw);

        assert!(entry.is_err());
    }

    #[test]
    fn roster_entry_rejects_invalid_email() {
        let raw = r#"
            { "name": "Carol", "email": "not-an-address", "channel": "email", "message": "Hi" }
        "#;

        let entry: Result<RosterEntry, _> = serde_json::from_str(raw);

        assert!(entry.is_err());
    }
}
