use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::{HealthCheckRepository, HealthCheckService},
};

pub const PROBE_ATTEMPTS: u32 = 5;
pub const PROBE_DELAY: Duration = Duration::from_secs(5);

impl<R, C> HealthCheckService for Service<R, C>
where
    R: HealthCheckRepository,
    C: Send + Sync,
{
    async fn ping(&self) -> Result<DateTime<Utc>, CoreError> {
        self.repository.ping().await
    }
}

/// Post-bind connectivity probe. Logs every attempt and never escalates: an
/// unreachable store leaves the listener up, serving errors until
/// connectivity returns.
pub async fn run_startup_probe<S>(service: &S, attempts: u32, delay: Duration) -> bool
where
    S: HealthCheckService,
{
    for attempt in 1..=attempts {
        match service.ping().await {
            Ok(store_time) => {
                info!(%store_time, attempt, "store connection verified");
                return true;
            }
            Err(err) => {
                warn!(%err, attempt, attempts, "store liveness check failed");
                if attempt < attempts {
                    info!(delay_secs = delay.as_secs(), "retrying store liveness check");
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    error!(
        attempts,
        "store unreachable; serving anyway, requests will fail until connectivity returns"
    );
    false
}
