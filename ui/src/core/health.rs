//! Bounded-time health probe for the backend API.
//!
//! The backend answers `GET {base}/health` with a success status while it can
//! reach its database, and an error status otherwise. The probe enforces its
//! own deadline by racing the request against a timer, so a hung connection
//! folds into the same outcome as a refused one.

use futures_util::future::{select, Either};
use futures_util::pin_mut;

use crate::core::timing;

/// Time budget for a single probe, connection setup included.
pub const HEALTH_TIMEOUT_MS: u32 = 3_000;

/// What a single completed check observed. The response body is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthCheckOutcome {
    /// A success status arrived within the time budget.
    Reachable,
    /// Connect failure, non-success status or an expired budget. The chrome
    /// treats these identically, so they are not distinguished here.
    Unreachable,
}

/// Issues health checks against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HealthProbe {
    client: reqwest::Client,
    endpoint: String,
}

impl HealthProbe {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: health_endpoint(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One check against the endpoint.
    pub async fn check(&self) -> HealthCheckOutcome {
        let request = self.client.get(&self.endpoint).send();
        let deadline = timing::sleep_ms(HEALTH_TIMEOUT_MS);
        pin_mut!(request);
        pin_mut!(deadline);

        match select(request, deadline).await {
            Either::Left((Ok(response), _)) if response.status().is_success() => {
                HealthCheckOutcome::Reachable
            }
            Either::Left(_) | Either::Right(_) => HealthCheckOutcome::Unreachable,
        }
    }
}

fn health_endpoint(base_url: &str) -> String {
    format!("{}/health", base_url.trim_end_matches('/'))
}
