use http::HeaderValue;
use serde::Deserialize;

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// List of allowed origins for CORS (use ["*"] for all origins)
    pub allowed_origins: Vec<String>,

    /// Whether cookies and auth headers may accompany cross-origin requests
    pub allow_credentials: bool,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Allowed origins as header values, in configuration order
    pub fn origin_header_values(&self) -> Vec<HeaderValue> {
        self.allowed_origins
            .iter()
            .filter_map(|s| s.parse::<HeaderValue>().ok())
            .collect()
    }

    /// Validate CORS configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.allowed_origins.is_empty() {
            return Err("ALLOWED_ORIGINS must contain at least one origin".to_string());
        }

        for origin in &self.allowed_origins {
            if origin == "*" {
                continue;
            }

            if origin.parse::<HeaderValue>().is_err() {
                return Err(format!("Invalid origin in ALLOWED_ORIGINS: {}", origin));
            }

            // Browsers never send a trailing slash in Origin, so such an entry could never match
            if origin.ends_with('/') {
                return Err(format!(
                    "Origin in ALLOWED_ORIGINS must not end with '/': {}",
                    origin
                ));
            }
        }

        Ok(())
    }
}
