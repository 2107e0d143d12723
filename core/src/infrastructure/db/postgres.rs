use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};
use tracing::warn;

use crate::domain::common::{
    DatabaseConfig, DatabaseTarget, TransportSecurity, entities::app_errors::CoreError,
};

#[derive(Debug, Clone)]
pub struct Postgres {
    pool: PgPool,
}

impl Postgres {
    /// Builds the bounded pool without dialing: the first connection is
    /// established on first use, so the listener can bind before the
    /// database is reachable.
    pub fn new(config: &DatabaseConfig) -> Result<Self, CoreError> {
        let mut options = match &config.target {
            DatabaseTarget::Uri(uri) => uri
                .parse::<PgConnectOptions>()
                .map_err(|err| CoreError::Configuration(format!("invalid database URI: {err}")))?,
            DatabaseTarget::Params {
                host,
                port,
                username,
                password,
                database,
            } => {
                let mut options = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(username)
                    .database(database);
                if let Some(password) = password {
                    options = options.password(password);
                }
                options
            }
        };

        match config.tls {
            // Leaves whatever the URI or libpq defaults asked for.
            TransportSecurity::Opportunistic => {}
            TransportSecurity::VerifyFull => {
                options = options.ssl_mode(PgSslMode::VerifyFull);
            }
            TransportSecurity::AcceptInvalidCerts => {
                warn!("database TLS certificate verification disabled by configuration");
                options = options.ssl_mode(PgSslMode::Require);
            }
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .idle_timeout(config.idle_timeout)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(options);

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }
}
