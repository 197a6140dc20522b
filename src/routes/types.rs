use serde::Serialize;
use utoipa::ToSchema;

/// Root greeting response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "The Forum API is running")]
    pub message: String,
}

/// Liveness response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}
