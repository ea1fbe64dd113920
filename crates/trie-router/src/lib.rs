//! # trie-router
//!
//! A segment trie that maps an HTTP method and URL path to a handler.
//!
//! This crate provides:
//! - Literal segments, matched case-insensitively
//! - Named dynamic segments (`/users/:id`) captured in path order
//! - Lookup in one step per path segment, literal before dynamic
//! - Route tables loaded from JSON
//! - A tree dump for debugging
//!
//! ## Quick Start
//!
//! ```
//! use trie_router::{Method, Router};
//!
//! let mut router = Router::new();
//! router.get("/", "index").unwrap();
//! router.get("/users/:id", "show_user").unwrap();
//! router.post("/users", "create_user").unwrap();
//!
//! let found = router.find_route("/users/123", Method::Get).unwrap();
//! assert_eq!(*found.handler, "show_user");
//! assert_eq!(found.params.get("id"), Some("123"));
//!
//! assert!(router.find_route("/users/123", Method::Delete).is_none());
//! assert_eq!(router.allowed_methods("/users/123"), [Method::Get]);
//! ```
//!
//! ## Path Templates
//!
//! Templates are split on `/` and empty pieces are dropped, so `/home`,
//! `/home/` and `//home` are the same route. A segment starting with `:` is
//! dynamic and matches any single segment. Each node has one dynamic slot:
//! `/a/:x` and `/a/:y` end on the same node, and whichever was registered last
//! decides the parameter name.
//!
//! Nothing past the path is interpreted. Query strings, wildcards and regex
//! constraints are not supported.
//!
//! ## Handlers
//!
//! The router is generic over the handler type and never invokes handlers:
//!
//! ```
//! use std::sync::Arc;
//! use trie_router::{Method, PathParams, Router};
//!
//! type Handler = Arc<dyn Fn(&PathParams) -> String + Send + Sync>;
//!
//! let mut router: Router<Handler> = Router::new();
//! router
//!     .get("/hello/:name", Arc::new(|p: &PathParams| format!("Hello, {}!", p.get("name").unwrap_or("?"))))
//!     .unwrap();
//!
//! let found = router.find_route("/hello/World", Method::Get).unwrap();
//! assert_eq!((found.handler)(&found.params), "Hello, World!");
//! ```

mod error;
mod method;
mod node;
mod params;
mod router;
mod table;

pub use error::{Result, RouterError};
pub use method::Method;
pub use node::{DYNAMIC_KEY, Node, SegmentKey};
pub use params::{PathParams, percent_decode};
pub use router::{RouteMatch, Router};
pub use table::{RouteSpec, RouteTable};
