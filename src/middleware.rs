use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID wrapper for use in request extensions
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Request ID middleware - adds a unique ID to each request
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    // Reuse the caller's ID when present so logs correlate across hops
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| RequestId::from(s.to_string()))
        .unwrap_or_default();

    req.extensions_mut().insert(request_id.clone());

    tracing::info!(
        request_id = %request_id.as_str(),
        method = %req.method(),
        path = %req.uri().path(),
        origin = req.headers().get(http::header::ORIGIN).and_then(|h| h.to_str().ok()),
        "Incoming request"
    );

    let mut response = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    response
}
