//! OpenAPI description of the HTTP surface.

use crate::error::AppResult;
use crate::routes::types::{HealthResponse, MessageResponse};
use utoipa::OpenApi;

pub const APP_TITLE: &str = "The Forum API";
pub const APP_DESCRIPTION: &str = "Backend API for The Forum application";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(OpenApi)]
#[openapi(
    info(
        title = "The Forum API",
        description = "Backend API for The Forum application"
    ),
    paths(crate::routes::root::root, crate::routes::health::health_check),
    components(schemas(MessageResponse, HealthResponse))
)]
pub struct ApiDoc;

/// Render the OpenAPI document as pretty-printed JSON
pub fn render() -> AppResult<String> {
    Ok(ApiDoc::openapi().to_pretty_json()?)
}
