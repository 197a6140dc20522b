use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to (e.g., "127.0.0.1")
    pub host: String,

    /// Port number to bind to (e.g., 8000)
    pub port: u16,
}

impl ServerConfig {
    /// Socket address string in `host:port` form
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate server configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("SERVER_HOST cannot be empty".to_string());
        }

        Ok(())
    }
}
