// src/constants.rs
//! Domain constants that define the built-in demo configuration.
//!
//! These are the canonical channel settings the program uses when no
//! overrides are given on the command line. Together with the demo roster
//! they reproduce the reference run byte for byte.

// ---------------------------------------------------------------------------
// Email channel defaults
// ---------------------------------------------------------------------------

/// SMTP relay host the email stub pretends to speak to.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// SMTP submission port. 587 is the standard STARTTLS submission port.
pub const DEFAULT_SMTP_PORT: u16 = 587;

// ---------------------------------------------------------------------------
// SMS channel defaults
// ---------------------------------------------------------------------------

/// Placeholder gateway API key for the SMS stub.
pub const DEFAULT_SMS_API_KEY: &str = "12345";

/// Recipient phone number for the SMS stub, E.164 form.
pub const DEFAULT_SMS_PHONE: &str = "+79991112233";

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Name of the debug log file written under the system temp directory.
pub const LOG_FILE_NAME: &str = "notify2user.log";
