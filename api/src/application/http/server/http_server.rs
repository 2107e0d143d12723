use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use promptdeck_core::application::create_service;
use promptdeck_core::domain::common::PromptdeckConfig;
use promptdeck_core::domain::health::services::{PROBE_ATTEMPTS, PROBE_DELAY, run_startup_probe};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, info_span};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::health::router::health_routes;
use crate::application::http::prompt::router::prompt_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::application::http::suggestion::router::suggestion_routes;
use crate::args::Args;

/// Resolves configuration and wires the service. The database pool is lazy,
/// so this never blocks on store connectivity.
pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = PromptdeckConfig::try_from(args.as_ref())?;
    let service = create_service(config)?;

    Ok(AppState::new(args, service))
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let cors = if state.args.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([CONTENT_TYPE, ACCEPT])
            .allow_origin(Any)
    } else {
        let allowed_origins = state
            .args
            .server
            .allowed_origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect::<Result<Vec<HeaderValue>, _>>()
            .context("invalid origin in ALLOWED_ORIGINS")?;

        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([CONTENT_TYPE, ACCEPT])
            .allow_origin(allowed_origins)
            .allow_credentials(true)
    };

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{root_path}/scalar"),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{root_path}/swagger-ui"))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{root_path}/redoc"), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{root_path}/rapidoc")))
        .merge(prompt_routes(state.clone()))
        .merge(suggestion_routes(state.clone()))
        .merge(health_routes(state.clone()))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}

/// Binds the listener, kicks off the startup probe and serves until the
/// process stops. The probe runs concurrently so an unreachable store never
/// delays the bind.
pub async fn serve(state: AppState) -> Result<(), anyhow::Error> {
    let app = router(state.clone())?;
    let address = SocketAddr::from(([0, 0, 0, 0], state.args.server.port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("listening on {address}");

    let service = state.service.clone();
    tokio::spawn(async move {
        run_startup_probe(&service, PROBE_ATTEMPTS, PROBE_DELAY).await;
    });

    axum::serve(listener, app).await.context("server stopped")?;

    Ok(())
}
