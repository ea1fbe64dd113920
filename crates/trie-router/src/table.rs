//! Route tables described as data.
//!
//! A route table is a JSON array of route declarations:
//!
//! ```json
//! [
//!     { "method": "GET", "path": "/users/:id", "handler": "show_user" },
//!     { "method": "POST", "path": "/users", "handler": "create_user" }
//! ]
//! ```
//!
//! Handlers are referred to by name, so a table builds a `Router<String>`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::router::Router;

/// A single route declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Method token, e.g. `GET`.
    pub method: String,
    /// Path template, e.g. `/users/:id`.
    pub path: String,
    /// Handler name. Missing or blank names are rejected on registration.
    #[serde(default)]
    pub handler: Option<String>,
}

impl RouteSpec {
    /// Creates a route declaration.
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        handler: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            handler: Some(handler.into()),
        }
    }
}

/// An ordered list of route declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: Vec<RouteSpec>,
}

impl RouteTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declaration.
    #[must_use]
    pub fn route(mut self, spec: RouteSpec) -> Self {
        self.routes.push(spec);
        self
    }

    /// Parses a table from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), routes = table.routes.len(), "Loaded route table");
        Ok(table)
    }

    /// The declarations, in file order.
    #[must_use]
    pub fn routes(&self) -> &[RouteSpec] {
        &self.routes
    }

    /// Registers every declaration on `router`.
    ///
    /// Stops at the first invalid declaration. Declarations before it stay
    /// registered; the invalid one leaves no trace.
    pub fn apply(&self, router: &mut Router<String>) -> Result<()> {
        for spec in &self.routes {
            let handler = spec.handler.clone().filter(|h| !h.trim().is_empty());
            router.register(&spec.method, &spec.path, handler)?;
        }
        Ok(())
    }

    /// Builds a fresh router from this table.
    pub fn build(&self) -> Result<Router<String>> {
        let mut router = Router::new();
        self.apply(&mut router)?;
        Ok(router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, RouterError};

    #[test]
    fn test_parse_table() {
        let table = RouteTable::from_json_str(
            r#"[
                {"method": "GET", "path": "/users/:id", "handler": "show_user"},
                {"method": "DELETE", "path": "/users/:id"}
            ]"#,
        )
        .unwrap();

        assert_eq!(table.routes().len(), 2);
        assert_eq!(table.routes()[0], RouteSpec::new("GET", "/users/:id", "show_user"));
        assert_eq!(table.routes()[1].handler, None);
    }

    #[test]
    fn test_build_router() {
        let router = RouteTable::new()
            .route(RouteSpec::new("GET", "/users/:id", "show_user"))
            .route(RouteSpec::new("POST", "/users", "create_user"))
            .build()
            .unwrap();

        let found = router.find_route("/users/9", Method::Get).unwrap();
        assert_eq!(found.handler, "show_user");
        assert_eq!(found.params.get("id"), Some("9"));
        assert_eq!(router.route_count(), 2);
    }

    #[test]
    fn test_missing_handler_rejected() {
        let table = RouteTable::from_json_str(
            r#"[
                {"method": "GET", "path": "/ok", "handler": "ok"},
                {"method": "GET", "path": "/blank", "handler": "  "},
                {"method": "GET", "path": "/later", "handler": "later"}
            ]"#,
        )
        .unwrap();

        let mut router = Router::new();
        let err = table.apply(&mut router).unwrap_err();
        assert!(matches!(err, RouterError::InvalidHandler { path, .. } if path == "/blank"));
        assert!(router.find_route("/ok", Method::Get).is_some());
        assert!(router.find_route("/blank", Method::Get).is_none());
        assert!(router.find_route("/later", Method::Get).is_none());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            RouteTable::from_json_str(r#"{"method": "GET"}"#),
            Err(RouterError::Json(_))
        ));
    }
}
