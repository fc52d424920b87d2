//! Shared fixtures for integration tests.

use std::io;
use std::sync::{Arc, Mutex};

use endpoints_router::config::{RouteConfig, RouteTableConfig};
use endpoints_router::{DispatcherContext, PathDispatcher, RoutingContext};

/// One handler invocation as seen by a [`recording_dispatcher`] handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub target: String,
    pub method: String,
    pub parameters: Vec<(String, String)>,
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

/// A small API surface: users, their posts, and a literal `me` alias.
#[allow(dead_code)]
pub fn api_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("GET", "users", "users.list"),
        RouteConfig::new("POST", "users", "users.create"),
        RouteConfig::new("GET", "users/{user}", "users.get"),
        RouteConfig::new("GET", "users/me", "users.me"),
        RouteConfig::new("DELETE", "users/{user}", "users.delete"),
        RouteConfig::new("GET", "users/{user}/posts/{post}", "posts.get"),
        RouteConfig::new("PATCH", "users/{user}/posts/{post}", "posts.patch"),
        RouteConfig::new("GET", "search/{term}", "search"),
    ]
}

#[allow(dead_code)]
pub fn api_table() -> RouteTableConfig {
    RouteTableConfig {
        routes: api_routes(),
        ..Default::default()
    }
}

/// Builds a dispatcher over `routes` whose handlers append to the returned log.
#[allow(dead_code)]
pub fn recording_dispatcher(routes: &[RouteConfig]) -> (PathDispatcher<DispatcherContext>, CallLog) {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let mut builder = PathDispatcher::builder();
    for route in routes {
        let log = log.clone();
        let target = route.target.clone();
        builder
            .add(&route.method, &route.path, move |ctx: &mut DispatcherContext| -> io::Result<()> {
                let mut parameters: Vec<_> = ctx
                    .raw_path_parameters()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                parameters.sort();
                log.lock().unwrap().push(Call {
                    target: target.clone(),
                    method: ctx.http_method().to_string(),
                    parameters,
                });
                Ok(())
            })
            .unwrap();
    }
    (builder.build(), log)
}

/// Sorted `(name, value)` pairs, for comparing against [`Call::parameters`].
#[allow(dead_code)]
pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut out: Vec<_> = items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    out.sort();
    out
}
