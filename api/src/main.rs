use std::sync::Arc;

use clap::Parser;
use promptdeck_api::application::http::server::http_server;
use promptdeck_api::args::Args;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

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

    let args = Arc::new(Args::parse());

    let state = http_server::state(args)?;
    http_server::serve(state).await
}
