//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing + dispatch produce:
//!     → tracing events (builds, overwrites, misses)
//!     → metrics.rs (dispatch outcomes, route counts)
//!
//! Binaries install:
//!     → logging.rs (tracing-subscriber, pretty or JSON)
//!     → a metrics recorder of their choice (none by default)
//! ```
//!
//! # Design Decisions
//! - The library only emits; subscribers and recorders are installed by the binary
//! - Log level from config, overridable with RUST_LOG

pub mod logging;
pub mod metrics;
