//! Trie nodes: the mutable builder form and the frozen lookup form.
//!
//! Each node is one segment level. Literal children are keyed by exact
//! segment text; every `{parameter}` at this depth shares the single
//! parameter child, whatever its name.

use std::collections::HashMap;

use crate::error::RouterError;
use crate::routing::decode::decode_segment;
use crate::routing::method::HttpMethod;
use crate::routing::template::Segment;
use crate::routing::trie::{ConflictPolicy, Resolved};

const METHOD_COUNT: usize = HttpMethod::ALL.len();

/// Value installed for one method at a terminal node.
#[derive(Debug)]
pub(crate) struct MethodHandler<T> {
    /// Parameter names in the order they were bound from the root.
    parameter_names: Vec<String>,
    value: T,
}

/// Outcome of installing a value at a terminal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Installed {
    New,
    Replaced,
}

#[derive(Debug)]
pub(crate) struct NodeBuilder<T> {
    literal_children: HashMap<String, NodeBuilder<T>>,
    parameter_child: Option<Box<NodeBuilder<T>>>,
    method_handlers: [Option<MethodHandler<T>>; METHOD_COUNT],
}

impl<T> NodeBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            literal_children: HashMap::new(),
            parameter_child: None,
            method_handlers: std::array::from_fn(|_| None),
        }
    }

    /// Descends (creating levels as needed) and installs `value` at the end.
    ///
    /// `segments` must already be validated; `path` is the full template,
    /// kept for conflict reporting.
    pub(crate) fn add(
        &mut self,
        segments: &[Segment<'_>],
        mut parameter_names: Vec<String>,
        method: HttpMethod,
        path: &str,
        value: T,
        policy: ConflictPolicy,
    ) -> Result<Installed, RouterError> {
        let Some((head, rest)) = segments.split_first() else {
            return self.install(parameter_names, method, path, value, policy);
        };

        let child = match *head {
            Segment::Literal(literal) => self
                .literal_children
                .entry(literal.to_string())
                .or_insert_with(NodeBuilder::new),
            Segment::Parameter(name) => {
                parameter_names.push(name.to_string());
                &mut **self
                    .parameter_child
                    .get_or_insert_with(|| Box::new(NodeBuilder::new()))
            }
        };
        child.add(rest, parameter_names, method, path, value, policy)
    }

    fn install(
        &mut self,
        parameter_names: Vec<String>,
        method: HttpMethod,
        path: &str,
        value: T,
        policy: ConflictPolicy,
    ) -> Result<Installed, RouterError> {
        let slot = &mut self.method_handlers[method.index()];
        let installed = match (slot.is_some(), policy) {
            (false, _) => Installed::New,
            (true, ConflictPolicy::Reject) => {
                return Err(RouterError::PathAlreadyMapped {
                    method,
                    path: path.to_string(),
                });
            }
            (true, ConflictPolicy::Overwrite) => {
                tracing::warn!(
                    method = %method,
                    path = %path,
                    "Path already mapped, replacing previous registration"
                );
                Installed::Replaced
            }
        };
        *slot = Some(MethodHandler {
            parameter_names,
            value,
        });
        Ok(installed)
    }

    /// Freezes this subtree.
    pub(crate) fn build(self) -> Node<T> {
        Node {
            literal_children: self
                .literal_children
                .into_iter()
                .map(|(segment, child)| (segment, child.build()))
                .collect(),
            parameter_child: self.parameter_child.map(|child| Box::new(child.build())),
            method_handlers: self.method_handlers,
        }
    }
}

/// Immutable trie node.
#[derive(Debug)]
pub(crate) struct Node<T> {
    literal_children: HashMap<String, Node<T>>,
    parameter_child: Option<Box<Node<T>>>,
    method_handlers: [Option<MethodHandler<T>>; METHOD_COUNT],
}

impl<T> Node<T> {
    /// Literal-first descent with backtracking.
    ///
    /// `captured` holds the raw values bound so far; on return it is the same
    /// length it was on entry whenever the result is `None`.
    pub(crate) fn resolve<'a, 'p>(
        &'a self,
        method: HttpMethod,
        segments: &[&'p str],
        captured: &mut Vec<&'p str>,
    ) -> Option<Resolved<'a, T>> {
        let Some((head, rest)) = segments.split_first() else {
            return self.terminal(method, captured);
        };

        if let Some(child) = self.literal_children.get(*head) {
            if let Some(resolved) = child.resolve(method, rest, captured) {
                return Some(resolved);
            }
        }

        if let Some(child) = &self.parameter_child {
            captured.push(*head);
            if let Some(resolved) = child.resolve(method, rest, captured) {
                return Some(resolved);
            }
            captured.pop();
        }
        None
    }

    fn terminal<'a>(&'a self, method: HttpMethod, captured: &[&str]) -> Option<Resolved<'a, T>> {
        let handler = self.method_handlers[method.index()].as_ref()?;
        debug_assert_eq!(handler.parameter_names.len(), captured.len());

        let parameters = handler
            .parameter_names
            .iter()
            .zip(captured)
            .map(|(name, raw)| (name.clone(), decode_segment(raw)))
            .collect();
        Some(Resolved::new(&handler.value, parameters))
    }
}
