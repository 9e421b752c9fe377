// src/dispatch.rs
//! Sequential notification dispatch with clear separation of planning and
//! execution.
//!
//! A [`DispatchPlan`] is assembled first (pure wiring), then [`dispatch`]
//! executes it, recording every per-delivery outcome in a
//! [`DispatchReport`]. A failed delivery never aborts the run; the report
//! carries the failures to the caller.

use std::time::Instant;

use crate::roster::ChannelKind;
use crate::user::User;

/// A complete dispatch plan.
#[derive(Default)]
pub struct DispatchPlan<'a> {
    /// Deliveries to perform, in order.
    pub deliveries: Vec<Delivery<'a>>,
}

impl<'a> DispatchPlan<'a> {
    /// Creates a new empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a delivery to the plan.
    pub fn with_delivery(mut self, delivery: Delivery<'a>) -> Self {
        self.deliveries.push(delivery);
        self
    }
}

/// One planned delivery: a wired user and the message to send.
pub struct Delivery<'a> {
    pub user: User<'a>,
    pub channel: ChannelKind,
    pub message: String,
}

/// Result of executing a dispatch plan.
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    /// Successfully delivered notifications.
    pub delivered: Vec<DeliveredNotification>,
    /// Failed deliveries with error descriptions.
    pub failed: Vec<FailedNotification>,
    /// Execution statistics.
    pub stats: DispatchStats,
}

impl DispatchReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a delivered notification to the report.
    pub fn with_delivered(mut self, notification: DeliveredNotification) -> Self {
        self.stats.notifications_delivered += 1;
        self.delivered.push(notification);
        self
    }

    /// Adds a failed delivery to the report.
    pub fn with_failed(mut self, notification: FailedNotification) -> Self {
        self.stats.notifications_failed += 1;
        self.failed.push(notification);
        self
    }

    /// Checks if every delivery succeeded.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A successfully delivered notification.
#[derive(Debug, Clone)]
pub struct DeliveredNotification {
    pub recipient: String,
    pub channel: ChannelKind,
}

/// A failed delivery with error information.
#[derive(Debug, Clone)]
pub struct FailedNotification {
    pub recipient: String,
    pub channel: ChannelKind,
    pub error: String,
}

/// Execution statistics.
#[derive(Debug, Clone, Default)]
pub struct DispatchStats {
    pub notifications_delivered: usize,
    pub notifications_failed: usize,
    pub total_duration_ms: u64,
}

/// Executes the dispatch plan, notifying every roster entry in order.
pub fn dispatch(plan: DispatchPlan<'_>) -> DispatchReport {
    let start_time = Instant::now();
    let mut report = DispatchReport::new();

    log::info!("Dispatching {} notifications", plan.deliveries.len());

    for delivery in plan.deliveries {
        match delivery.user.notify(&delivery.message) {
            Ok(()) => {
                log::debug!(
                    "Delivered to {} over {}",
                    delivery.user.name(),
                    delivery.channel
                );
                report = report.with_delivered(DeliveredNotification {
                    recipient: delivery.user.name().to_string(),
                    channel: delivery.channel,
                });
            }
            Err(e) => {
                log::error!(
                    "Delivery to {} over {} failed: {}",
                    delivery.user.name(),
                    delivery.channel,
                    e
                );
                report = report.with_failed(FailedNotification {
                    recipient: delivery.user.name().to_string(),
                    channel: delivery.channel,
                    error: e.to_string(),
                });
            }
        }
    }

    report.stats.total_duration_ms = start_time.elapsed().as_millis() as u64;

    log::info!(
        "Dispatch complete: {} delivered, {} failed in {}ms",
        report.stats.notifications_delivered,
        report.stats.notifications_failed,
        report.stats.total_duration_ms
    );

    report
}
