// src/lib.rs
//! notify2user library — delivers notifications to users through pluggable
//! channel stubs.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ChannelError`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `DispatchConfig`
//! - **Channel capability** — `Notifier`, `EmailNotifier`, `SmsNotifier`
//! - **Domain model** — `User`, `RosterEntry`, `ChannelKind`
//! - **Domain types** — `EmailAddress`, `PhoneNumber`, `ApiKey`
//! - **Output** — `OutputSink`, `ConsoleSink`, `MemorySink`
//! - **Dispatch** — `DispatchPlan`, `dispatch`, `DispatchReport`

mod channel;
mod config;
pub mod constants;
mod dispatch;
mod error;
mod output;
mod roster;
mod types;
mod user;

// --- Error Handling ---
pub use crate::channel::ChannelError;
pub use crate::error::AppError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, DispatchConfig};

// --- Channel Capability ---
pub use crate::channel::{EmailNotifier, Notifier, SmsNotifier};

// --- Domain Model ---
pub use crate::roster::{demo_roster, ChannelKind, RosterEntry};
pub use crate::user::User;

// --- Domain Types ---
pub use crate::types::{ApiKey, EmailAddress, PhoneNumber};

// --- Output ---
pub use crate::output::{ConsoleSink, MemorySink, OutputSink};

// --- Dispatch ---
pub use crate::dispatch::{
    dispatch, DeliveredNotification, Delivery, DispatchPlan, DispatchReport, DispatchStats,
    FailedNotification,
};
