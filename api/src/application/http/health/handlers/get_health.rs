use axum::extract::State;
use promptdeck_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Service health",
    description = "Reports listener health plus the outcome of a store liveness ping. Always answers 200; a down store shows as degraded.",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn get_health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let response = match state.service.ping().await {
        Ok(_) => HealthResponse {
            status: "ok".to_string(),
            store: "up".to_string(),
        },
        Err(_) => HealthResponse {
            status: "degraded".to_string(),
            store: "down".to_string(),
        },
    };

    Ok(Response::OK(response))
}
