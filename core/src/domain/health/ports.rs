use chrono::{DateTime, Utc};

use crate::domain::common::entities::app_errors::CoreError;

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn ping(&self) -> impl Future<Output = Result<DateTime<Utc>, CoreError>> + Send;
}

/// Store liveness port. The trivial query returns the store's clock reading
/// so startup logs can show what the store believes the time is.
#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    fn ping(&self) -> impl Future<Output = Result<DateTime<Utc>, CoreError>> + Send;
}
