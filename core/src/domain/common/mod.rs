use std::path::PathBuf;
use std::time::Duration;

pub mod entities;
pub mod services;

use entities::app_errors::CoreError;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(2);

const DEFAULT_PG_PORT: u16 = 5432;

#[derive(Clone, Debug)]
pub struct PromptdeckConfig {
    pub storage: StorageConfig,
    pub llm: LlmConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StorageConfig {
    Postgres(DatabaseConfig),
    JsonFile(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub target: DatabaseTarget,
    pub tls: TransportSecurity,
    pub max_connections: u32,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(target: DatabaseTarget, tls: TransportSecurity) -> Self {
        Self {
            target,
            tls,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DatabaseTarget {
    Uri(String),
    Params {
        host: String,
        port: u16,
        username: String,
        password: Option<String>,
        database: String,
    },
}

/// TLS posture for the PostgreSQL connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportSecurity {
    /// Encrypt when the server offers it. A URI's own sslmode is left alone.
    Opportunistic,
    /// Require TLS and verify the server certificate.
    VerifyFull,
    /// Require TLS but skip certificate verification. Explicit opt-in only.
    AcceptInvalidCerts,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

/// Raw storage-related environment values, before precedence resolution.
#[derive(Clone, Debug, Default)]
pub struct StorageSettings {
    pub database_url: Option<String>,
    pub internal_database_url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub prompts_file: Option<PathBuf>,
    pub production: bool,
    pub accept_invalid_certs: bool,
}

impl StorageSettings {
    /// Resolution order: connection URI first, then discrete PG parameters,
    /// then the JSON-file fallback. Nothing resolvable is a configuration
    /// error the caller treats as fatal.
    pub fn resolve(self) -> Result<StorageConfig, CoreError> {
        let tls = if self.accept_invalid_certs {
            TransportSecurity::AcceptInvalidCerts
        } else if self.production {
            TransportSecurity::VerifyFull
        } else {
            TransportSecurity::Opportunistic
        };

        if let Some(uri) = self.database_url.or(self.internal_database_url) {
            return Ok(StorageConfig::Postgres(DatabaseConfig::new(
                DatabaseTarget::Uri(uri),
                tls,
            )));
        }

        if let (Some(host), Some(username)) = (self.host, self.username) {
            let database = self.database.unwrap_or_else(|| username.clone());

            return Ok(StorageConfig::Postgres(DatabaseConfig::new(
                DatabaseTarget::Params {
                    host,
                    port: self.port.unwrap_or(DEFAULT_PG_PORT),
                    username,
                    password: self.password,
                    database,
                },
                tls,
            )));
        }

        if let Some(path) = self.prompts_file {
            return Ok(StorageConfig::JsonFile(path));
        }

        Err(CoreError::Configuration(
            "no store configured: set DATABASE_URL, the PG* variables, or PROMPTS_FILE".to_string(),
        ))
    }
}
