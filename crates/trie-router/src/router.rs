//! Main router implementation.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::{Result, RouterError};
use crate::method::Method;
use crate::node::{Node, SegmentKey};
use crate::params::PathParams;

/// A successful lookup: the stored handler plus the captured parameters.
#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    /// Handler registered for the matched node and method.
    pub handler: &'a H,
    /// Parameters captured from the dynamic segments, in path order.
    pub params: PathParams,
}

/// Routing trie mapping `(method, path)` to a handler.
///
/// `H` is whatever the caller wants back from a match. The router never calls
/// it.
///
/// Registration needs `&mut self` and lookups only `&self`, so a router that
/// is fully built can be shared between threads (for example behind an `Arc`)
/// whenever `H: Send + Sync`. There is no internal locking.
pub struct Router<H> {
    root: Node<H>,
    routes: usize,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}

impl<H> Router<H> {
    /// Creates a new empty router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            routes: 0,
        }
    }

    /// Registers a route from untyped parts.
    ///
    /// Checks run in order (path, handler, method, segments) and all of them
    /// happen before the trie is touched, so an error leaves the router as it
    /// was.
    ///
    /// # Example
    ///
    /// ```
    /// use trie_router::{Router, RouterError};
    ///
    /// let mut router = Router::new();
    /// router.register("GET", "/users/:id", Some("show_user")).unwrap();
    ///
    /// let err = router.register("FETCH", "/users", Some("list_users")).unwrap_err();
    /// assert!(matches!(err, RouterError::InvalidMethod(_)));
    /// ```
    pub fn register(&mut self, method: &str, path: &str, handler: Option<H>) -> Result<()> {
        validate_path(path)?;
        let Some(handler) = handler else {
            return Err(RouterError::InvalidHandler {
                method: method.to_string(),
                path: path.to_string(),
            });
        };
        let method: Method = method.parse()?;
        let template = parse_template(path)?;
        self.insert(method, path, template, handler);
        Ok(())
    }

    /// Registers `handler` for `method` at `path`.
    ///
    /// Registering the same method and path again replaces only that method's
    /// handler. When two templates put differently named parameters at the same
    /// position (`/a/:x` and `/a/:y`) they share one trie node and the names
    /// from the latest registration are used for every method on it.
    pub fn route(&mut self, method: Method, path: &str, handler: H) -> Result<()> {
        validate_path(path)?;
        let template = parse_template(path)?;
        self.insert(method, path, template, handler);
        Ok(())
    }

    /// Adds a GET route.
    pub fn get(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Get, path, handler)
    }

    /// Adds a POST route.
    pub fn post(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Post, path, handler)
    }

    /// Adds a PUT route.
    pub fn put(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Put, path, handler)
    }

    /// Adds a DELETE route.
    pub fn delete(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Delete, path, handler)
    }

    /// Adds a PATCH route.
    pub fn patch(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Patch, path, handler)
    }

    /// Adds a HEAD route.
    pub fn head(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Head, path, handler)
    }

    /// Adds an OPTIONS route.
    pub fn options(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Options, path, handler)
    }

    /// Adds a CONNECT route.
    pub fn connect(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Connect, path, handler)
    }

    /// Adds a TRACE route.
    pub fn trace(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Trace, path, handler)
    }

    fn insert(&mut self, method: Method, path: &str, template: Template, handler: H) {
        let mut node = &mut self.root;
        for key in template.keys {
            node = node.child_or_insert(key);
        }

        if node.handler_count() > 0 && node.params() != template.params.as_slice() {
            warn!(
                method = %method,
                path,
                previous = ?node.params(),
                current = ?template.params,
                "Parameter names overwritten for shared route node"
            );
        }
        node.set_params(template.params);

        if node.set_handler(method, handler).is_none() {
            self.routes += 1;
            debug!(method = %method, path, "Registered route");
        } else {
            debug!(method = %method, path, "Replaced route handler");
        }
    }

    /// Finds the handler for `path` and `method`.
    ///
    /// At each level the literal child is tried first and the dynamic child
    /// only when no literal child matches. A literal choice is never undone,
    /// even if the lookup dead-ends further down.
    ///
    /// # Example
    ///
    /// ```
    /// use trie_router::{Method, Router};
    ///
    /// let mut router = Router::new();
    /// router.get("/posts/:post_id/comments/:id", "comment").unwrap();
    ///
    /// let found = router.find_route("/posts/42/comments/7", Method::Get).unwrap();
    /// assert_eq!(*found.handler, "comment");
    /// assert_eq!(found.params.get("post_id"), Some("42"));
    /// assert_eq!(found.params.get("id"), Some("7"));
    /// assert!(router.find_route("/posts/42", Method::Get).is_none());
    /// ```
    #[must_use]
    pub fn find_route(&self, path: &str, method: Method) -> Option<RouteMatch<'_, H>> {
        let (node, captures) = self.resolve(path)?;
        let Some(handler) = node.handler(method) else {
            trace!(method = %method, path, "No handler for method");
            return None;
        };

        let params = node
            .params()
            .iter()
            .zip(captures)
            .map(|(name, value)| (name.as_str(), value))
            .collect();

        Some(RouteMatch { handler, params })
    }

    /// Like [`Router::find_route`], taking the method as a raw token.
    ///
    /// An unknown token is treated as not found.
    #[must_use]
    pub fn find_route_str(&self, path: &str, method: &str) -> Option<RouteMatch<'_, H>> {
        let method = method.parse().ok()?;
        self.find_route(path, method)
    }

    /// Methods that have a handler at the node `path` resolves to.
    ///
    /// Empty when the path itself is unknown. Useful for telling a missing
    /// route apart from a method mismatch.
    #[must_use]
    pub fn allowed_methods(&self, path: &str) -> Vec<Method> {
        self.resolve(path)
            .map(|(node, _)| node.methods())
            .unwrap_or_default()
    }

    /// Number of distinct `(method, path)` registrations.
    #[must_use]
    pub const fn route_count(&self) -> usize {
        self.routes
    }

    /// The root of the trie.
    #[must_use]
    pub const fn root(&self) -> &Node<H> {
        &self.root
    }

    /// Renders the trie, one line per edge.
    ///
    /// Each line is `{depth dashes}({key}) Dynamic: {params}`. Literal keys come
    /// in sorted order and the dynamic child (`:`) last.
    #[must_use]
    pub fn dump_tree(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_tree(&mut out);
        out
    }

    /// Writes the output of [`Router::dump_tree`] into `out`.
    pub fn write_tree<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let mut stack: Vec<(usize, SegmentKey, &Node<H>)> = Vec::new();
        push_children(&mut stack, 0, &self.root);

        while let Some((depth, key, node)) = stack.pop() {
            writeln!(
                out,
                "{}({}) Dynamic: {}",
                "-".repeat(depth),
                key.as_str(),
                node.params().join(",")
            )?;
            push_children(&mut stack, depth + 1, node);
        }

        Ok(())
    }

    fn resolve<'p>(&self, path: &'p str) -> Option<(&Node<H>, Vec<&'p str>)> {
        let mut node = &self.root;
        let mut captures = Vec::new();

        for segment in segments(path) {
            if let Some(child) = node.literal_child(&segment.to_lowercase()) {
                node = child;
            } else if let Some(child) = node.dynamic_child() {
                captures.push(segment);
                node = child;
            } else {
                trace!(path, segment, "No route for segment");
                return None;
            }
        }

        Some((node, captures))
    }
}

fn push_children<'a, H>(
    stack: &mut Vec<(usize, SegmentKey, &'a Node<H>)>,
    depth: usize,
    node: &'a Node<H>,
) {
    // Reversed so the first child is popped first.
    stack.extend(
        node.children()
            .into_iter()
            .rev()
            .map(|(key, child)| (depth, key, child)),
    );
}

/// Trie keys and parameter names for one path template.
struct Template {
    keys: Vec<SegmentKey>,
    params: Vec<String>,
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn validate_path(path: &str) -> Result<()> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(RouterError::InvalidPath(path.to_string()))
    }
}

fn parse_template(path: &str) -> Result<Template> {
    let mut keys = Vec::new();
    let mut params = Vec::new();

    for segment in segments(path) {
        if segment.contains(' ') {
            return Err(RouterError::MalformedSegment {
                path: path.to_string(),
                segment: segment.to_string(),
            });
        }

        if let Some(name) = segment.strip_prefix(':') {
            params.push(name.to_string());
            keys.push(SegmentKey::Dynamic);
        } else {
            keys.push(SegmentKey::Literal(segment.to_lowercase()));
        }
    }

    Ok(Template { keys, params })
}
