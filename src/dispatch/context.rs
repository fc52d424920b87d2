//! Per-request dispatch state.

use std::collections::HashMap;

/// What the dispatcher needs from a request context.
///
/// Contexts are created per request and never shared between requests.
pub trait RoutingContext {
    /// Upper-cased HTTP method of the request.
    fn http_method(&self) -> &str;

    /// Raw request path.
    fn path(&self) -> &str;

    /// Called once by the dispatcher, before the handler runs.
    fn set_raw_path_parameters(&mut self, parameters: HashMap<String, String>);

    /// Decoded path parameters bound by the matched route.
    fn raw_path_parameters(&self) -> &HashMap<String, String>;
}

/// Default [`RoutingContext`] implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatcherContext {
    http_method: String,
    path: String,
    raw_path_parameters: HashMap<String, String>,
}

impl DispatcherContext {
    pub fn new(http_method: &str, path: impl Into<String>) -> Self {
        Self {
            http_method: http_method.to_ascii_uppercase(),
            path: path.into(),
            raw_path_parameters: HashMap::new(),
        }
    }
}

impl RoutingContext for DispatcherContext {
    fn http_method(&self) -> &str {
        &self.http_method
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn set_raw_path_parameters(&mut self, parameters: HashMap<String, String>) {
        self.raw_path_parameters = parameters;
    }

    fn raw_path_parameters(&self) -> &HashMap<String, String> {
        &self.raw_path_parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_is_uppercased() {
        let ctx = DispatcherContext::new("post", "a/b");
        assert_eq!(ctx.http_method(), "POST");
        assert_eq!(ctx.path(), "a/b");
        assert!(ctx.raw_path_parameters().is_empty());
    }
}
