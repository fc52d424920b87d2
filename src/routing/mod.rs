//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     (method, template, value)[]
//!     → template.rs (split on '/', classify + validate segments)
//!     → node.rs (descend/create levels, install per-method value)
//!     → Freeze as immutable PathTrie
//!
//! Lookup (per request):
//!     (method, raw path)
//!     → trie.rs (split on '/')
//!     → node.rs (literal child first, then parameter child, backtrack on dead ends)
//!     → decode.rs (percent-decode captured values)
//!     → Return: Resolved { value, parameters } or None
//! ```
//!
//! # Design Decisions
//! - Trie compiled at startup, immutable at runtime
//! - One parameter child per node; parameter names only matter at the terminal node
//! - Captured values stay raw during descent and are decoded once on a match
//! - No match is `None`, never an error

pub mod decode;
pub mod method;
mod node;
pub mod template;
pub mod trie;

pub use method::HttpMethod;
pub use trie::{ConflictPolicy, PathTrie, PathTrieBuilder, Resolved};
