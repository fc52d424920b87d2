//! Router error definitions.
//!
//! Every variant is a build-time failure. Request-time misses are reported as
//! `None` / `false`, never as errors.

use thiserror::Error;

use crate::routing::HttpMethod;

/// Errors raised while compiling a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// A `{...}` segment whose name is not `[a-zA-Z_][a-zA-Z_0-9]*`.
    #[error("invalid parameter name '{name}' in path '{path}'")]
    InvalidParameterName { name: String, path: String },

    /// A segment that opens with `{` but does not close with `}`.
    #[error("unterminated parameter segment '{segment}' in path '{path}'")]
    UnterminatedParameter { segment: String, path: String },

    /// A literal segment containing one of `: / ? # [ ] { }`.
    #[error("reserved character in segment '{segment}' of path '{path}'")]
    ReservedCharacter { segment: String, path: String },

    /// The same method and path shape were registered twice.
    #[error("path '{path}' is already mapped for {method}")]
    PathAlreadyMapped { method: HttpMethod, path: String },

    /// A method string outside GET, POST, PUT, DELETE and PATCH.
    #[error("unknown HTTP method '{0}'")]
    UnknownMethod(String),
}
