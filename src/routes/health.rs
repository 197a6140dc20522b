use axum::Json;

use super::types::HealthResponse;

/// Health check endpoint
///
/// Liveness only: the service has no downstream dependencies to probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
