use axum::Json;

use super::types::MessageResponse;

pub const ROOT_MESSAGE: &str = "The Forum API is running";

/// Root greeting
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "API is running", body = MessageResponse))
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}
