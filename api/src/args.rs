use std::path::PathBuf;

use clap::Parser;
use promptdeck_core::domain::common::entities::app_errors::CoreError;
use promptdeck_core::domain::common::{LlmConfig, PromptdeckConfig, StorageSettings};

#[derive(Debug, Clone, Parser)]
#[command(name = "promptdeck", about = "Shared library of reusable AI prompts")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Port the listener binds on 0.0.0.0.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Prefix every route is served under.
    #[arg(long, env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    /// Exact origins allowed by CORS. Empty allows any origin.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Deployment environment name. Production enforces TLS verification
    /// on database connections built from discrete parameters.
    #[arg(long, env = "APP_ENV", default_value = "development")]
    pub env: String,
}

impl ServerArgs {
    pub fn is_production(&self) -> bool {
        self.env == "production"
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    /// Full PostgreSQL connection URI. Wins over the discrete PG* values.
    #[arg(long = "database-url", env = "DATABASE_URL")]
    pub url: Option<String>,

    /// In-network URI some hosts inject alongside the public one.
    #[arg(long = "internal-database-url", env = "RENDER_INTERNAL_DATABASE_URL", hide = true)]
    pub internal_url: Option<String>,

    #[arg(long = "pg-host", env = "PGHOST")]
    pub host: Option<String>,

    #[arg(long = "pg-port", env = "PGPORT")]
    pub port: Option<u16>,

    #[arg(long = "pg-user", env = "PGUSER")]
    pub user: Option<String>,

    #[arg(long = "pg-password", env = "PGPASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long = "pg-database", env = "PGDATABASE")]
    pub database: Option<String>,

    /// Keep TLS but skip certificate verification. Logged loudly at startup.
    #[arg(long, env = "DATABASE_ACCEPT_INVALID_CERTS", default_value_t = false)]
    pub accept_invalid_certs: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    /// JSON-file store path, used when no PostgreSQL target is configured.
    #[arg(long, env = "PROMPTS_FILE")]
    pub prompts_file: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Empty key leaves /suggest responding with a provider error.
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub openai_api_key: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-3.5-turbo")]
    pub openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,
}

impl Args {
    pub fn storage_settings(&self) -> StorageSettings {
        StorageSettings {
            database_url: self.database.url.clone(),
            internal_database_url: self.database.internal_url.clone(),
            host: self.database.host.clone(),
            port: self.database.port,
            username: self.database.user.clone(),
            password: self.database.password.clone(),
            database: self.database.database.clone(),
            prompts_file: self.storage.prompts_file.clone(),
            production: self.server.is_production(),
            accept_invalid_certs: self.database.accept_invalid_certs,
        }
    }
}

impl TryFrom<&Args> for PromptdeckConfig {
    type Error = CoreError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        Ok(PromptdeckConfig {
            storage: args.storage_settings().resolve()?,
            llm: LlmConfig {
                api_key: args.llm.openai_api_key.clone(),
                model: args.llm.openai_model.clone(),
                base_url: args.llm.openai_base_url.clone(),
            },
        })
    }
}
