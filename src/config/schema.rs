//! Configuration schema definitions.
//!
//! A route table file lists the routes to compile plus the ambient settings
//! the CLI needs. All types derive Serde traits for deserialization.

use serde::{Deserialize, Serialize};

use crate::routing::ConflictPolicy;

/// Root of a route table file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouteTableConfig {
    /// How duplicate `(method, path shape)` entries are treated.
    pub conflict_policy: ConflictPolicy,

    /// Logging settings.
    pub logging: LoggingConfig,

    /// Route definitions, in registration order.
    pub routes: Vec<RouteConfig>,
}

/// One `[[routes]]` entry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// HTTP method name, any case.
    pub method: String,

    /// Path template, e.g. `users/{id}/posts`.
    pub path: String,

    /// Name reported when this route matches.
    pub target: String,
}

impl RouteConfig {
    pub fn new(method: impl Into<String>, path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            target: target.into(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "endpoints_router=info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}
