//! Route table configuration.
//!
//! # Data Flow
//! ```text
//! route table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (method, template syntax, duplicates)
//!     → RouteTableConfig (validated, immutable)
//!     → compile.rs (PathTrie<String> keyed to route targets)
//! ```
//!
//! # Design Decisions
//! - All top-level fields have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks
//! - Validation reports every bad route; compilation stops at the first

pub mod compile;
pub mod loader;
pub mod schema;
pub mod validation;

pub use compile::compile_routes;
pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LogFormat, LoggingConfig, RouteConfig, RouteTableConfig};
pub use validation::{validate_config, ValidationError};
