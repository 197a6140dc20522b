//! Configuration loading and validation tests.

use forum_api::config::{Config, DEFAULT_ALLOWED_ORIGIN};
use forum_api::error::AppError;
use std::collections::HashMap;

fn load(vars: &[(&str, &str)]) -> Result<Config, AppError> {
    let vars: HashMap<&str, &str> = vars.iter().copied().collect();
    Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
}

/// Test module for CORS configuration
mod cors_config_tests {
    use super::*;

    #[test]
    fn test_default_allow_list_is_dev_origin() {
        let config = load(&[]).unwrap();

        assert_eq!(config.cors.allowed_origins, vec![DEFAULT_ALLOWED_ORIGIN]);
        assert!(config.cors.allow_credentials);
        assert!(!config.cors.allows_any_origin());
    }

    #[test]
    fn test_production_origins_override_default() {
        let config = load(&[("ALLOWED_ORIGINS", "https://forum.example.com")]).unwrap();

        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://forum.example.com"]
        );
    }

    #[test]
    fn test_wildcard_cors() {
        let config = load(&[("ALLOWED_ORIGINS", "*")]).unwrap();
        assert!(config.cors.allows_any_origin());
    }

    #[test]
    fn test_trailing_slash_origin_rejected() {
        let result = load(&[("ALLOWED_ORIGINS", "https://forum.example.com/")]);
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_credentials_can_be_disabled() {
        let config = load(&[("CORS_ALLOW_CREDENTIALS", "false")]).unwrap();
        assert!(!config.cors.allow_credentials);
    }
}

/// Test module for server configuration
mod server_config_tests {
    use super::*;

    #[test]
    fn test_host_and_port_from_env() {
        let config = load(&[("SERVER_HOST", "0.0.0.0"), ("SERVER_PORT", "9000")]).unwrap();

        assert_eq!(config.server.addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_port_out_of_range_rejected() {
        let result = load(&[("SERVER_PORT", "70000")]);
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
