//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouteTableConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate a route table from TOML text.
pub fn parse_config(content: &str) -> Result<RouteTableConfig, ConfigError> {
    let config: RouteTableConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate a route table from a TOML file.
pub fn load_config(path: &Path) -> Result<RouteTableConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), routes = config.routes.len(), "Route table loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;
    use crate::routing::ConflictPolicy;

    #[test]
    fn test_parse_full_table() {
        let config = parse_config(
            r#"
            conflict_policy = "overwrite"

            [logging]
            level = "debug"
            format = "json"

            [[routes]]
            method = "GET"
            path = "users/{id}"
            target = "users.get"

            [[routes]]
            method = "post"
            path = "users"
            target = "users.create"
            "#,
        )
        .unwrap();

        assert_eq!(config.conflict_policy, ConflictPolicy::Overwrite);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[1].method, "post");
    }

    #[test]
    fn test_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.conflict_policy, ConflictPolicy::Reject);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[[routes]]\nmethod = \"GET\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = parse_config("conflict_policy = \"sometimes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error() {
        let err = parse_config(
            r#"
            [[routes]]
            method = "GET"
            path = "bad/{[x}"
            target = "t"
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {}", other),
        }
    }
}
