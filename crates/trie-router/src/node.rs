//! Trie vertex.

use std::collections::HashMap;

use crate::method::Method;

/// Key under which the dynamic child is listed in tree dumps.
pub const DYNAMIC_KEY: &str = ":";

/// Edge label leading from a node to one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKey {
    /// Lower-cased literal segment.
    Literal(String),
    /// The single dynamic slot of a node.
    Dynamic,
}

impl SegmentKey {
    /// Returns the key as shown in tree dumps.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) => s,
            Self::Dynamic => DYNAMIC_KEY,
        }
    }
}

/// A single vertex of the routing trie.
///
/// Literal children live in a map; the dynamic child sits in its own slot so a
/// node can never hold two of them.
#[derive(Debug)]
pub struct Node<H> {
    statics: HashMap<String, Node<H>>,
    dynamic: Option<Box<Node<H>>>,
    handlers: HashMap<Method, H>,
    params: Vec<String>,
}

impl<H> Default for Node<H> {
    fn default() -> Self {
        Self {
            statics: HashMap::new(),
            dynamic: None,
            handlers: HashMap::new(),
            params: Vec::new(),
        }
    }
}

impl<H> Node<H> {
    /// Creates an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Literal child for an already lower-cased segment.
    #[must_use]
    pub fn literal_child(&self, segment: &str) -> Option<&Self> {
        self.statics.get(segment)
    }

    /// The dynamic child, if one was registered.
    #[must_use]
    pub fn dynamic_child(&self) -> Option<&Self> {
        self.dynamic.as_deref()
    }

    /// Returns the child for `key`, creating it when missing.
    pub(crate) fn child_or_insert(&mut self, key: SegmentKey) -> &mut Self {
        match key {
            SegmentKey::Literal(segment) => self.statics.entry(segment).or_default(),
            SegmentKey::Dynamic => &mut **self.dynamic.get_or_insert_with(Box::default),
        }
    }

    /// Children with literal keys sorted, followed by the dynamic child.
    #[must_use]
    pub fn children(&self) -> Vec<(SegmentKey, &Self)> {
        let mut children: Vec<_> = self
            .statics
            .iter()
            .map(|(k, n)| (SegmentKey::Literal(k.clone()), n))
            .collect();
        children.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));
        if let Some(dynamic) = self.dynamic_child() {
            children.push((SegmentKey::Dynamic, dynamic));
        }
        children
    }

    /// Handler registered for `method` at this node.
    #[must_use]
    pub fn handler(&self, method: Method) -> Option<&H> {
        self.handlers.get(&method)
    }

    /// Stores `handler` for `method`, returning the one it replaced.
    pub(crate) fn set_handler(&mut self, method: Method, handler: H) -> Option<H> {
        self.handlers.insert(method, handler)
    }

    /// Methods with a handler at this node, in canonical order.
    #[must_use]
    pub fn methods(&self) -> Vec<Method> {
        let mut methods: Vec<_> = self.handlers.keys().copied().collect();
        methods.sort_unstable();
        methods
    }

    /// Number of handlers at this node.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Parameter names for the dynamic segments leading here.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub(crate) fn set_params(&mut self, params: Vec<String>) {
        self.params = params;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_or_insert_reuses_existing() {
        let mut node: Node<()> = Node::new();
        node.child_or_insert(SegmentKey::Literal("users".into()))
            .set_params(vec!["x".into()]);
        node.child_or_insert(SegmentKey::Literal("users".into()));

        assert_eq!(node.children().len(), 1);
        assert_eq!(node.literal_child("users").unwrap().params(), ["x"]);
    }

    #[test]
    fn test_single_dynamic_slot() {
        let mut node: Node<()> = Node::new();
        node.child_or_insert(SegmentKey::Dynamic);
        node.child_or_insert(SegmentKey::Dynamic);
        node.child_or_insert(SegmentKey::Literal("b".into()));
        node.child_or_insert(SegmentKey::Literal("a".into()));

        let keys: Vec<_> = node
            .children()
            .into_iter()
            .map(|(k, _)| k.as_str().to_string())
            .collect();
        assert_eq!(keys, ["a", "b", ":"]);
    }

    #[test]
    fn test_set_handler_replaces_per_method() {
        let mut node = Node::new();
        assert!(node.set_handler(Method::Get, 1).is_none());
        assert_eq!(node.set_handler(Method::Get, 2), Some(1));
        node.set_handler(Method::Delete, 3);

        assert_eq!(node.handler(Method::Get), Some(&2));
        assert_eq!(node.methods(), [Method::Get, Method::Delete]);
        assert_eq!(node.handler_count(), 2);
    }
}
