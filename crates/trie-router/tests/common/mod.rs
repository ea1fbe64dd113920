#![allow(dead_code)]

use std::sync::Arc;

use trie_router::{Method, PathParams, Router};

/// Handler shape used across the integration tests.
pub type Handler = Arc<dyn Fn(&PathParams) -> String + Send + Sync>;

/// A handler that answers with its own name.
pub fn named(name: &'static str) -> Handler {
    Arc::new(move |_: &PathParams| name.to_string())
}

/// A handler that echoes one captured parameter.
pub fn echo(param: &'static str) -> Handler {
    Arc::new(move |params: &PathParams| params.get(param).unwrap_or("<missing>").to_string())
}

/// Resolves a request and calls the handler, panicking when nothing matches.
pub fn dispatch(router: &Router<Handler>, method: Method, path: &str) -> String {
    let found = router
        .find_route(path, method)
        .unwrap_or_else(|| panic!("Expected a route for {method} {path}"));
    (found.handler)(&found.params)
}

/// Resolves a request, returning the captured parameters as owned pairs.
pub fn params_of(router: &Router<Handler>, method: Method, path: &str) -> Vec<(String, String)> {
    router
        .find_route(path, method)
        .unwrap_or_else(|| panic!("Expected a route for {method} {path}"))
        .params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
