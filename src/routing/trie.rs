//! Path trie: compile `(method, template, value)` registrations, then
//! resolve `(method, path)` lookups against the frozen structure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RouterError;
use crate::routing::method::HttpMethod;
use crate::routing::node::{Installed, Node, NodeBuilder};
use crate::routing::template::{parse_template, split_path};

/// What to do when a method and path shape are registered twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Fail the registration with [`RouterError::PathAlreadyMapped`].
    #[default]
    Reject,
    /// Replace the earlier registration and log a warning.
    Overwrite,
}

/// A successful lookup.
#[derive(Debug, PartialEq, Eq)]
pub struct Resolved<'a, T> {
    value: &'a T,
    parameters: HashMap<String, String>,
}

impl<'a, T> Resolved<'a, T> {
    pub(crate) fn new(value: &'a T, parameters: HashMap<String, String>) -> Self {
        Self { value, parameters }
    }

    /// The registered value.
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// Parameter name to percent-decoded value.
    pub fn parameters(&self) -> &HashMap<String, String> {
        &self.parameters
    }

    pub fn into_parts(self) -> (&'a T, HashMap<String, String>) {
        (self.value, self.parameters)
    }
}

/// Mutable route registration. Consumed by [`PathTrieBuilder::build`].
#[derive(Debug)]
pub struct PathTrieBuilder<T> {
    root: NodeBuilder<T>,
    policy: ConflictPolicy,
    route_count: usize,
}

impl<T> PathTrieBuilder<T> {
    pub fn new(policy: ConflictPolicy) -> Self {
        Self {
            root: NodeBuilder::new(),
            policy,
            route_count: 0,
        }
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Registers `value` for `method` at `path`.
    ///
    /// Fails on malformed templates, and on an already-mapped method and path
    /// shape under [`ConflictPolicy::Reject`].
    pub fn add(&mut self, method: HttpMethod, path: &str, value: T) -> Result<&mut Self, RouterError> {
        let segments = parse_template(path)?;
        let installed = self
            .root
            .add(&segments, Vec::new(), method, path, value, self.policy)?;
        if installed == Installed::New {
            self.route_count += 1;
        }
        tracing::trace!(method = %method, path = %path, "Route registered");
        Ok(self)
    }

    /// Freezes the registrations into an immutable [`PathTrie`].
    pub fn build(self) -> PathTrie<T> {
        tracing::debug!(routes = self.route_count, "Path trie built");
        PathTrie {
            root: self.root.build(),
            route_count: self.route_count,
        }
    }
}

impl<T> Default for PathTrieBuilder<T> {
    fn default() -> Self {
        Self::new(ConflictPolicy::default())
    }
}

/// Immutable router from `(method, path)` to a value plus path parameters.
///
/// Lookups take `&self` only, so a built trie can be shared across threads
/// without locking.
#[derive(Debug)]
pub struct PathTrie<T> {
    root: Node<T>,
    route_count: usize,
}

impl<T> PathTrie<T> {
    /// Builder that rejects duplicate registrations.
    pub fn builder() -> PathTrieBuilder<T> {
        PathTrieBuilder::new(ConflictPolicy::Reject)
    }

    /// Number of distinct `(method, path shape)` entries.
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    /// Looks up `path` for `method`.
    ///
    /// Literal segments are preferred over parameters at every level; a
    /// parameter branch that dead-ends is abandoned and its captured value
    /// discarded. Returns `None` when no registration matches.
    pub fn resolve(&self, method: HttpMethod, path: &str) -> Option<Resolved<'_, T>> {
        let segments = split_path(path);
        let mut captured = Vec::with_capacity(segments.len());
        self.root.resolve(method, &segments, &mut captured)
    }
}
