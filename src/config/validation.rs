//! Configuration validation.
//!
//! # Responsibilities
//! - Check every route's method, template syntax and target
//! - Detect duplicate `(method, path shape)` entries when conflicts are rejected
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: RouteTableConfig → Result<(), Vec<ValidationError>>

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::RouteTableConfig;
use crate::error::RouterError;
use crate::routing::template::shape;
use crate::routing::{ConflictPolicy, HttpMethod};

/// A problem with one route entry. `index` is the entry's position in the file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route {index}: method is empty")]
    MissingMethod { index: usize },

    #[error("route {index}: target is empty")]
    MissingTarget { index: usize },

    #[error("route {index}: {source}")]
    Route {
        index: usize,
        #[source]
        source: RouterError,
    },

    #[error("route {index}: {method} {path} duplicates route {first}")]
    Duplicate {
        index: usize,
        first: usize,
        method: HttpMethod,
        path: String,
    },
}

/// Validates a route table.
pub fn validate_config(config: &RouteTableConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen: HashMap<(HttpMethod, String), usize> = HashMap::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.target.trim().is_empty() {
            errors.push(ValidationError::MissingTarget { index });
        }

        let method = if route.method.trim().is_empty() {
            errors.push(ValidationError::MissingMethod { index });
            None
        } else {
            match route.method.parse::<HttpMethod>() {
                Ok(method) => Some(method),
                Err(source) => {
                    errors.push(ValidationError::Route { index, source });
                    None
                }
            }
        };

        let route_shape = match shape(&route.path) {
            Ok(route_shape) => route_shape,
            Err(source) => {
                errors.push(ValidationError::Route { index, source });
                continue;
            }
        };

        let Some(method) = method else { continue };
        if config.conflict_policy == ConflictPolicy::Reject {
            if let Some(&first) = seen.get(&(method, route_shape.clone())) {
                errors.push(ValidationError::Duplicate {
                    index,
                    first,
                    method,
                    path: route.path.clone(),
                });
                continue;
            }
            seen.insert((method, route_shape), index);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
