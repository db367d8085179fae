//! Backend status state machine for the connectivity indicator.
//!
//! Rationale
//! ---------
//! The chrome shows a single two-state dot ("Online"/"Offline") fed by a
//! periodic health check. The state itself is deliberately dumb: every
//! completed check overwrites it, there is no backoff and no error surface
//! beyond the dot. What *does* need care is ordering: a slow check must never
//! overwrite the result of a newer one. [`StatusTracker`] owns that
//! bookkeeping, so the polling task stays a plain loop and the ordering rule
//! is testable without a DOM or a network.
//!
//! State model
//! -----------
//! `Unknown` is only ever the initial value, shown as "Checking..." until the
//! first check completes. After that the status moves freely between
//! `Online` and `Offline`; there is no terminal state while the chrome is
//! mounted.

use crate::core::health::HealthCheckOutcome;

/// Connectivity of the backend as last observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendStatus {
    /// No check has completed yet.
    #[default]
    Unknown,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn from_outcome(outcome: HealthCheckOutcome) -> Self {
        match outcome {
            HealthCheckOutcome::Reachable => Self::Online,
            HealthCheckOutcome::Unreachable => Self::Offline,
        }
    }

    /// Label rendered next to the dot.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Checking...",
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }

    /// CSS modifier for the dot element.
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Unknown => "status-indicator__dot--unknown",
            Self::Online => "status-indicator__dot--online",
            Self::Offline => "status-indicator__dot--offline",
        }
    }
}

/// Ticket for one started check, issued by [`StatusTracker::begin`].
#[derive(Debug, Clone, Copy)]
pub struct CheckTicket(u64);

/// Orders check completions so the indicator always reflects the most
/// recently started check among those that have finished.
///
/// The poll loop chains its checks (next check is scheduled only after the
/// previous one completed), so in the normal case tickets complete in issue
/// order and [`complete`](Self::complete) applies every outcome. A completion
/// whose ticket is older than the newest one already applied is discarded.
#[derive(Debug, Default)]
pub struct StatusTracker {
    status: BackendStatus,
    issued: u64,
    applied: u64,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> BackendStatus {
        self.status
    }

    /// Record the start of a check.
    pub fn begin(&mut self) -> CheckTicket {
        self.issued += 1;
        CheckTicket(self.issued)
    }

    /// Fold a completed check into the status. Returns the new status, or
    /// `None` when the completion was stale and left the status untouched.
    pub fn complete(
        &mut self,
        ticket: CheckTicket,
        outcome: HealthCheckOutcome,
    ) -> Option<BackendStatus> {
        if ticket.0 <= self.applied {
            return None;
        }
        self.applied = ticket.0;
        self.status = BackendStatus::from_outcome(outcome);
        Some(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::health::HealthCheckOutcome::{Reachable, Unreachable};

    #[test]
    fn starts_unknown_and_idle() {
        let tracker = StatusTracker::new();
        assert_eq!(tracker.status(), BackendStatus::Unknown);
        assert_eq!(tracker.status().label(), "Checking...");
        assert_eq!(tracker.issued, 0);
    }

    #[test]
    fn reachable_goes_online() {
        let mut tracker = StatusTracker::new();
        let ticket = tracker.begin();
        assert_eq!(
            tracker.complete(ticket, Reachable),
            Some(BackendStatus::Online)
        );
        assert_eq!(tracker.status().label(), "Online");
    }

    #[test]
    fn unreachable_goes_offline() {
        let mut tracker = StatusTracker::new();
        let ticket = tracker.begin();
        assert_eq!(
            tracker.complete(ticket, Unreachable),
            Some(BackendStatus::Offline)
        );
        assert_eq!(tracker.status().label(), "Offline");
    }

    #[test]
    fn transitions_are_free_in_both_directions() {
        let mut tracker = StatusTracker::new();
        let a = tracker.begin();
        tracker.complete(a, Unreachable);
        let b = tracker.begin();
        tracker.complete(b, Reachable);
        assert_eq!(tracker.status(), BackendStatus::Online);
        let c = tracker.begin();
        tracker.complete(c, Unreachable);
        assert_eq!(tracker.status(), BackendStatus::Offline);
    }

    #[test]
    fn stale_completion_is_discarded() {
        // Two overlapping checks: the later-started one completes first, the
        // earlier one trickles in afterwards and must not win.
        let mut tracker = StatusTracker::new();
        let slow = tracker.begin();
        let fast = tracker.begin();
        assert_eq!(
            tracker.complete(fast, Reachable),
            Some(BackendStatus::Online)
        );
        assert_eq!(tracker.complete(slow, Unreachable), None);
        assert_eq!(tracker.status(), BackendStatus::Online);
    }

    #[test]
    fn in_order_completions_all_apply() {
        let mut tracker = StatusTracker::new();
        for outcome in [Reachable, Unreachable, Reachable] {
            let ticket = tracker.begin();
            assert!(tracker.complete(ticket, outcome).is_some());
        }
        assert_eq!(tracker.status(), BackendStatus::Online);
    }

    #[test]
    fn dot_class_tracks_state() {
        assert_eq!(
            BackendStatus::Unknown.dot_class(),
            "status-indicator__dot--unknown"
        );
        assert_eq!(
            BackendStatus::Online.dot_class(),
            "status-indicator__dot--online"
        );
        assert_eq!(
            BackendStatus::Offline.dot_class(),
            "status-indicator__dot--offline"
        );
    }
}
