//! Backend connectivity indicator and the poll loop that drives it.
//!
//! The poller writes a [`BackendStatus`] signal; [`StatusIndicator`] only
//! reads it. Keeping the two apart means the polling rules live in
//! `core::status`/`core::health` where they are tested without a DOM.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::config;
use crate::core::health::HealthProbe;
use crate::core::status::{BackendStatus, StatusTracker};
use crate::core::timing;

/// Delay before the first check, so a freshly mounted chrome resolves
/// "Checking..." quickly instead of waiting out a whole interval.
const FIRST_CHECK_DELAY_MS: u32 = 500;

/// Cadence between checks, measured from completion of the previous check.
const POLL_INTERVAL_MS: u32 = 30_000;

/// Start the poll loop and return the signal it writes.
///
/// The loop is owned by the calling component's scope: unmounting the chrome
/// drops the task, which is what stops polling when the user navigates to a
/// page without the navbar.
pub fn use_backend_status() -> Signal<BackendStatus> {
    let mut status = use_signal(BackendStatus::default);

    use_future(move || async move {
        let probe = HealthProbe::new(config::api_base_url());
        let mut tracker = StatusTracker::new();

        timing::sleep_ms(FIRST_CHECK_DELAY_MS).await;
        loop {
            let ticket = tracker.begin();
            let outcome = probe.check().await;
            if let Some(next) = tracker.complete(ticket, outcome) {
                if *status.peek() != next {
                    debug!(status = ?next, "backend status changed");
                    status.set(next);
                }
            }
            timing::sleep_ms(POLL_INTERVAL_MS).await;
        }
    });

    status
}

/// Display adapter: a dot plus label for the current backend status.
#[component]
pub fn StatusIndicator(status: BackendStatus) -> Element {
    let dot_class = format!("status-indicator__dot {}", status.dot_class());
    let label = status.label();

    rsx! {
        div { class: "status-indicator",
            span { class: "{dot_class}" }
            span { class: "status-indicator__label", "{label}" }
        }
    }
}
