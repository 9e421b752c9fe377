// src/config.rs
use crate::constants::{
    DEFAULT_SMS_API_KEY, DEFAULT_SMS_PHONE, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT,
};
use crate::error::AppError;
use crate::roster::{demo_roster, RosterEntry};
use crate::types::{ApiKey, PhoneNumber, ValidationError};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// SMTP host the email channel stub reports
    #[arg(long, default_value = DEFAULT_SMTP_HOST)]
    pub smtp_host: String,

    /// SMTP port the email channel stub reports
    #[arg(long, default_value_t = DEFAULT_SMTP_PORT)]
    pub smtp_port: u16,

    /// Gateway API key the SMS channel stub reports
    #[arg(long, default_value = DEFAULT_SMS_API_KEY)]
    pub sms_api_key: String,

    /// Recipient phone number the SMS channel stub reports (E.164)
    #[arg(long, default_value = DEFAULT_SMS_PHONE)]
    pub sms_phone: String,

    /// JSON roster file replacing the built-in demo roster
    #[arg(short, long)]
    pub roster: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved dispatch configuration — validated and ready to wire channels
/// and users.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub sms_api_key: ApiKey,
    pub sms_phone: PhoneNumber,
    pub roster: Vec<RosterEntry>,
    pub verbose: bool,
}

impl DispatchConfig {
    /// Resolves a complete dispatch configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        if cli.smtp_host.is_empty() {
            return Err(ValidationError::EmptyField("smtp-host").into());
        }
        if cli.smtp_port == 0 {
            return Err(ValidationError::InvalidSmtpPort(cli.smtp_port).into());
        }

        let sms_api_key = ApiKey::new(cli.sms_api_key)?;
        let sms_phone = PhoneNumber::new(cli.sms_phone)?;

        let roster = match &cli.roster {
            Some(path) => load_roster(path)?,
            None => demo_roster(),
        };
        if roster.is_empty() {
            return Err(ValidationError::EmptyField("roster").into());
        }

        Ok(DispatchConfig {
            smtp_host: cli.smtp_host,
            smtp_port: cli.smtp_port,
            sms_api_key,
            sms_phone,
            roster,
            verbose: cli.verbose,
        })
    }
}

/// Loads and parses a JSON roster file.
fn load_roster(path: &Path) -> Result<Vec<RosterEntry>, AppError> {
    log::info!("Loading roster from {}", path.display());

    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| AppError::RosterParse {
        path: path.to_path_buf(),
        source,
    })
}
