//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! (method string, path, context)
//!     → dispatcher.rs (parse method; unknown → false)
//!     → PathTrie::resolve (no match → false)
//!     → context.rs (set decoded path parameters)
//!     → handler.rs (invoke; I/O errors returned unchanged)
//!     → true
//! ```
//!
//! # Design Decisions
//! - Built once at startup; `dispatch` takes `&self` and is safe to call concurrently
//! - Conflicting registrations overwrite (with a warning) rather than fail
//! - No error translation: misses are `false`, handler failures pass through

pub mod context;
pub mod dispatcher;
pub mod handler;

pub use context::{DispatcherContext, RoutingContext};
pub use dispatcher::{PathDispatcher, PathDispatcherBuilder};
pub use handler::DispatcherHandler;
