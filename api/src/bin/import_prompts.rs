//! One-shot import of a JSON prompt document into PostgreSQL.
//!
//! Creates the prompts table when missing, inserts every well-formed record
//! and skips the rest with a warning.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use promptdeck_api::args::DatabaseArgs;
use promptdeck_core::domain::common::{StorageConfig, StorageSettings};
use promptdeck_core::infrastructure::db::import::{ImportDocument, ensure_schema, import_document};
use promptdeck_core::infrastructure::db::postgres::Postgres;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Parser)]
#[command(name = "import-prompts", about = "Imports a JSON prompt document into PostgreSQL")]
struct ImportArgs {
    /// Path of the document, shaped as `{ "prompts": [ … ] }`.
    #[arg(long, default_value = "prompts.json")]
    file: PathBuf,

    #[command(flatten)]
    database: DatabaseArgs,

    /// Deployment environment name. Production enforces TLS verification.
    #[arg(long, env = "APP_ENV", default_value = "development")]
    env: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = ImportArgs::parse();

    let settings = StorageSettings {
        database_url: args.database.url.clone(),
        internal_database_url: args.database.internal_url.clone(),
        host: args.database.host.clone(),
        port: args.database.port,
        username: args.database.user.clone(),
        password: args.database.password.clone(),
        database: args.database.database.clone(),
        prompts_file: None,
        production: args.env == "production",
        accept_invalid_certs: args.database.accept_invalid_certs,
    };

    let config = match settings
        .resolve()
        .context("import requires a PostgreSQL connection")?
    {
        StorageConfig::Postgres(config) => config,
        StorageConfig::JsonFile(_) => {
            anyhow::bail!("import requires a PostgreSQL target, not the JSON-file store")
        }
    };

    let postgres = Postgres::new(&config)?;
    ensure_schema(postgres.get_pool()).await?;

    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let document: ImportDocument =
        serde_json::from_str(&raw).context("malformed import document")?;

    info!(
        file = %args.file.display(),
        records = document.prompts.len(),
        "starting import"
    );

    let summary = import_document(postgres.get_pool(), document).await?;

    info!(
        imported = summary.imported,
        skipped = summary.skipped,
        "import finished"
    );

    Ok(())
}
