//! Minimal in-memory DOM produced by tree output.
//!
//! This is the default [`DocumentSink`]: elements with ordered attributes
//! and text nodes. Callers that own a richer document model implement
//! [`DocumentSink`] for it instead.
//!
//! # Example
//!
//! ```rust
//! use treehtml::{build_tree, attrs, tag};
//! use treehtml::dom::{DomSink, Node};
//!
//! let node = build_tree(DomSink, &tag!["p", attrs! { "id" => "x" }, "Hello"]).unwrap();
//! let p = node.as_element().unwrap();
//! assert_eq!(p.get_attr("id"), Some("x"));
//! assert_eq!(p.text_content(), "Hello");
//! ```

use indexmap::IndexMap;

use crate::renderer::DocumentSink;

/// DOM content - either an element or text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element node
    Element(Element),
    /// A text node
    Text(String),
}

impl Node {
    /// Returns true if this is an element node.
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Returns true if this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get as element reference.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Get as text reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    /// Get text content of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.clone(),
            Node::Element(e) => e.text_content(),
        }
    }
}

/// An element with its attributes and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// The tag name, as written in the description
    pub tag: String,
    /// Attributes in insertion order
    pub attrs: IndexMap<String, String>,
    /// Child nodes
    pub children: Vec<Node>,
}

impl Element {
    /// Create a new element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set an attribute value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Add a child node.
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Add a text child.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Add an element child.
    pub fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Get text content of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// [`DocumentSink`] that builds [`Node`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSink;

impl DocumentSink for DomSink {
    type Node = Node;

    fn create_element(&mut self, tag: &str) -> Node {
        Node::Element(Element::new(tag))
    }

    fn set_attribute(&mut self, element: &mut Node, name: &str, value: &str) {
        if let Node::Element(e) = element {
            e.set_attr(name, value);
        }
    }

    fn append_child(&mut self, parent: &mut Node, child: Node) {
        if let Node::Element(e) = parent {
            e.push_child(child);
        }
    }

    fn create_text(&mut self, text: &str) -> Node {
        Node::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_text_content() {
        let mut div = Element::new("div");
        div.push_text("Hello ");
        let mut span = Element::new("span");
        span.push_text("world");
        div.push_element(span);
        div.push_text("!");

        assert_eq!(div.text_content(), "Hello world!");
    }

    #[test]
    fn test_attrs_keep_order_and_update_in_place() {
        let mut el = Element::new("a");
        el.set_attr("href", "/");
        el.set_attr("class", "nav");
        el.set_attr("href", "/home");
        let names: Vec<_> = el.attrs.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["href", "class"]);
        assert_eq!(el.get_attr("href"), Some("/home"));
        assert_eq!(el.get_attr("missing"), None);
    }

    #[test]
    fn test_sink_ignores_text_parents() {
        let mut sink = DomSink;
        let mut text = sink.create_text("t");
        let child = sink.create_element("b");
        sink.append_child(&mut text, child);
        sink.set_attribute(&mut text, "x", "y");
        assert_eq!(text, Node::Text("t".to_string()));
    }

    #[test]
    fn test_node_accessors() {
        let node = Node::Element(Element::new("p"));
        assert!(node.is_element());
        assert!(!node.is_text());
        assert_eq!(node.as_text(), None);
        assert_eq!(Node::Text("x".into()).as_text(), Some("x"));
    }
}
