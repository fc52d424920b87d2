//! Path routing and dispatch for REST endpoints.
//!
//! Routes are `(HTTP method, path template)` pairs such as
//! `GET users/{id}/posts`. They are compiled once into an immutable
//! [`PathTrie`] and resolved per request with literal segments taking
//! precedence over `{parameters}`. [`PathDispatcher`] layers handler
//! invocation on top.
//!
//! ```
//! use endpoints_router::{HttpMethod, PathTrie};
//!
//! let mut builder = PathTrie::builder();
//! builder.add(HttpMethod::Get, "users/{id}", "user")?;
//! builder.add(HttpMethod::Get, "users/me", "me")?;
//! let trie = builder.build();
//!
//! let resolved = trie.resolve(HttpMethod::Get, "users/42").unwrap();
//! assert_eq!(*resolved.value(), "user");
//! assert_eq!(resolved.parameters()["id"], "42");
//! assert_eq!(*trie.resolve(HttpMethod::Get, "users/me").unwrap().value(), "me");
//! # Ok::<(), endpoints_router::RouterError>(())
//! ```

// Core subsystems
pub mod dispatch;
pub mod error;
pub mod routing;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use dispatch::{DispatcherContext, DispatcherHandler, PathDispatcher, RoutingContext};
pub use error::RouterError;
pub use routing::{ConflictPolicy, HttpMethod, PathTrie, PathTrieBuilder, Resolved};
