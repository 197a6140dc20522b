mod cors;
mod server;

pub use cors::CorsConfig;
pub use server::ServerConfig;

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::env;

/// Origin allowed when `ALLOWED_ORIGINS` is not set (the web frontend's dev server).
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?;

        // CORS config
        let allowed_origins = parse_origins(
            &lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
        );
        let allow_credentials = lookup("CORS_ALLOW_CREDENTIALS")
            .unwrap_or_else(|| "true".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid CORS_ALLOW_CREDENTIALS".to_string()))?;

        let config = Config {
            server: ServerConfig {
                host: server_host,
                port: server_port,
            },
            cors: CorsConfig {
                allowed_origins,
                allow_credentials,
            },
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        self.server.validate().map_err(AppError::Configuration)?;
        self.cors.validate().map_err(AppError::Configuration)?;

        Ok(())
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
