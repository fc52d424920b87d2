//! Router metrics.
//!
//! # Metrics
//! - `router_dispatch_total` (counter): dispatch attempts by method and outcome
//! - `router_routes` (gauge): routes installed in the most recently built dispatcher
//!
//! Recorded through the `metrics` facade; a no-op until a recorder is installed.

/// Result of a single dispatch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Matched,
    NoRoute,
    UnknownMethod,
}

impl DispatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOutcome::Matched => "matched",
            DispatchOutcome::NoRoute => "no_route",
            DispatchOutcome::UnknownMethod => "unknown_method",
        }
    }
}

/// Records one dispatch attempt. `method` is `"unknown"` for unparsable methods.
pub fn record_dispatch(method: &'static str, outcome: DispatchOutcome) {
    ::metrics::counter!(
        "router_dispatch_total",
        "method" => method,
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

/// Records the size of a freshly built route table.
pub fn record_route_count(count: usize) {
    ::metrics::gauge!("router_routes").set(count as f64);
}
