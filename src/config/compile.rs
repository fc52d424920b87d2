//! Compiling a route table into a lookup trie.

use crate::config::schema::RouteTableConfig;
use crate::error::RouterError;
use crate::routing::{HttpMethod, PathTrie, PathTrieBuilder};

/// Builds a trie whose values are the route targets.
///
/// Honors the table's conflict policy; the first failing route aborts the build.
pub fn compile_routes(config: &RouteTableConfig) -> Result<PathTrie<String>, RouterError> {
    let mut builder = PathTrieBuilder::new(config.conflict_policy);
    for route in &config.routes {
        let method: HttpMethod = route.method.parse()?;
        builder.add(method, &route.path, route.target.clone())?;
    }
    Ok(builder.build())
}
