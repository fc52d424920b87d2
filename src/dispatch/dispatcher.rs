//! Request dispatch over a [`PathTrie`] of handlers.

use std::io;

use crate::error::RouterError;
use crate::observability::metrics::{self, DispatchOutcome};
use crate::routing::{ConflictPolicy, HttpMethod, PathTrie, PathTrieBuilder};

use super::context::RoutingContext;
use super::handler::DispatcherHandler;

type BoxedHandler<C> = Box<dyn DispatcherHandler<C>>;

/// Collects `(method, template, handler)` registrations.
///
/// Duplicate registrations overwrite earlier ones with a warning, so several
/// configuration passes can be layered onto one builder.
pub struct PathDispatcherBuilder<C> {
    trie: PathTrieBuilder<BoxedHandler<C>>,
}

impl<C> PathDispatcherBuilder<C> {
    pub fn new() -> Self {
        Self {
            trie: PathTrieBuilder::new(ConflictPolicy::Overwrite),
        }
    }

    /// Registers `handler` for a case-insensitive method name and a path template.
    pub fn add<H>(&mut self, http_method: &str, path: &str, handler: H) -> Result<&mut Self, RouterError>
    where
        H: DispatcherHandler<C> + 'static,
    {
        let method: HttpMethod = http_method.parse()?;
        self.trie.add(method, path, Box::new(handler))?;
        Ok(self)
    }

    pub fn build(self) -> PathDispatcher<C> {
        let trie = self.trie.build();
        metrics::record_route_count(trie.route_count());
        PathDispatcher { trie }
    }
}

impl<C> Default for PathDispatcherBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves requests to handlers and invokes them.
pub struct PathDispatcher<C> {
    trie: PathTrie<BoxedHandler<C>>,
}

impl<C: RoutingContext> PathDispatcher<C> {
    pub fn builder() -> PathDispatcherBuilder<C> {
        PathDispatcherBuilder::new()
    }

    pub fn route_count(&self) -> usize {
        self.trie.route_count()
    }

    /// Routes `path` for `http_method` and runs the matching handler.
    ///
    /// Returns `Ok(false)` with `context` untouched for an unknown method or
    /// when no route matches. On a match the decoded path parameters are set
    /// on `context` before the handler runs, and `Ok(true)` is returned once it
    /// has been invoked. Handler errors are returned as-is.
    pub fn dispatch(&self, http_method: &str, path: &str, context: &mut C) -> io::Result<bool> {
        let method = match http_method.parse::<HttpMethod>() {
            Ok(method) => method,
            Err(_) => {
                tracing::debug!(method = %http_method, path = %path, "Unknown HTTP method");
                metrics::record_dispatch("unknown", DispatchOutcome::UnknownMethod);
                return Ok(false);
            }
        };

        let Some(resolved) = self.trie.resolve(method, path) else {
            tracing::debug!(method = %method, path = %path, "No route matched");
            metrics::record_dispatch(method.as_str(), DispatchOutcome::NoRoute);
            return Ok(false);
        };

        let (handler, parameters) = resolved.into_parts();
        tracing::trace!(method = %method, path = %path, parameters = ?parameters, "Route matched");
        context.set_raw_path_parameters(parameters);
        metrics::record_dispatch(method.as_str(), DispatchOutcome::Matched);
        handler.handle(context)?;
        Ok(true)
    }

    /// Dispatches using the method and path carried by `context`.
    pub fn dispatch_context(&self, context: &mut C) -> io::Result<bool> {
        let http_method = context.http_method().to_string();
        let path = context.path().to_string();
        self.dispatch(&http_method, &path, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DispatcherContext;
    use std::collections::HashMap;

    fn ok(_: &mut DispatcherContext) -> io::Result<()> {
        Ok(())
    }

    #[test]
    fn test_builder_rejects_unknown_method() {
        let mut builder = PathDispatcher::<DispatcherContext>::builder();
        let err = builder.add("OPTIONS", "a", ok).err().unwrap();
        assert_eq!(err, RouterError::UnknownMethod("OPTIONS".into()));
    }

    #[test]
    fn test_builder_rejects_bad_template() {
        let mut builder = PathDispatcher::<DispatcherContext>::builder();
        assert!(builder.add("GET", "bad/{test", ok).is_err());
    }

    #[test]
    fn test_builder_method_case_insensitive() {
        let mut builder = PathDispatcher::builder();
        builder.add("get", "a", ok).unwrap();
        let dispatcher = builder.build();

        let mut ctx = DispatcherContext::new("GET", "a");
        assert!(dispatcher.dispatch("GeT", "a", &mut ctx).unwrap());
    }

    #[test]
    fn test_unknown_method_leaves_context() {
        let mut builder = PathDispatcher::builder();
        builder.add("GET", "{x}", ok).unwrap();
        let dispatcher = builder.build();

        let mut ctx = DispatcherContext::new("TRACE", "a");
        let before = ctx.clone();
        assert!(!dispatcher.dispatch("TRACE", "a", &mut ctx).unwrap());
        assert_eq!(ctx, before);
    }

    #[test]
    fn test_no_route_leaves_context() {
        let mut builder = PathDispatcher::builder();
        builder.add("GET", "a/{x}", ok).unwrap();
        let dispatcher = builder.build();

        let mut ctx = DispatcherContext::new("GET", "b/c");
        ctx.set_raw_path_parameters(HashMap::from([("keep".to_string(), "me".to_string())]));
        let before = ctx.clone();
        assert!(!dispatcher.dispatch("GET", "b/c", &mut ctx).unwrap());
        assert!(!dispatcher.dispatch("POST", "a/c", &mut ctx).unwrap());
        assert_eq!(ctx, before);
    }

    #[test]
    fn test_parameters_set_before_handler() {
        let mut builder = PathDispatcher::builder();
        builder
            .add("GET", "a/{x}", |ctx: &mut DispatcherContext| -> io::Result<()> {
                assert_eq!(ctx.raw_path_parameters().get("x").map(String::as_str), Some("b c"));
                Ok(())
            })
            .unwrap();
        let dispatcher = builder.build();

        let mut ctx = DispatcherContext::new("get", "a/b%20c");
        assert!(dispatcher.dispatch_context(&mut ctx).unwrap());
    }

    #[test]
    fn test_handler_error_propagates() {
        let mut builder = PathDispatcher::builder();
        builder
            .add("PUT", "fail", |_: &mut DispatcherContext| -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away"))
            })
            .unwrap();
        let dispatcher = builder.build();

        let mut ctx = DispatcherContext::new("PUT", "fail");
        let err = dispatcher.dispatch_context(&mut ctx).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "client went away");
    }

    #[test]
    fn test_duplicate_overwrites() {
        let mut builder = PathDispatcher::builder();
        builder
            .add("GET", "x/{a}", |_: &mut DispatcherContext| -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::Other, "first"))
            })
            .unwrap();
        builder.add("get", "x/{b}", ok).unwrap();
        let dispatcher = builder.build();
        assert_eq!(dispatcher.route_count(), 1);

        let mut ctx = DispatcherContext::new("GET", "x/1");
        assert!(dispatcher.dispatch_context(&mut ctx).unwrap());
        assert_eq!(ctx.raw_path_parameters().get("b").map(String::as_str), Some("1"));
    }
}
