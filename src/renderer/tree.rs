//! Document-tree output
//!
//! Mirrors the markup writer but creates nodes through a [`DocumentSink`]
//! instead of writing text. There is no indentation and no special handling
//! for void or `pre` elements.

use crate::content::Content;
use crate::error::RenderError;
use crate::shape::Shape;

use super::{attribute_value, Visitor};

/// Node construction primitives of a document tree
pub trait DocumentSink {
    /// Handle to a created node
    type Node;

    /// Create an element node by tag name
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Set an attribute on an element node
    fn set_attribute(&mut self, element: &mut Self::Node, name: &str, value: &str);

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: &mut Self::Node, child: Self::Node);

    /// Create a text node
    fn create_text(&mut self, text: &str) -> Self::Node;
}

/// Builds a node tree through a [`DocumentSink`]
pub struct TreeBuilder<S> {
    sink: S,
}

impl<S: DocumentSink> TreeBuilder<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Give back the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Convert any content item into a node
    ///
    /// Text and numbers become text nodes; sequences and generators become
    /// elements.
    pub fn build(&mut self, item: &Content) -> Result<S::Node, RenderError> {
        match item {
            Content::Text(text) => Ok(self.sink.create_text(text)),
            Content::Number(n) => Ok(self.sink.create_text(&n.to_string())),
            Content::Sequence(_) | Content::Generator(_) => self.visit(item),
            other => Err(RenderError::UnsupportedChildType {
                found: other.kind(),
            }),
        }
    }
}

impl<S: DocumentSink> Visitor for TreeBuilder<S> {
    type Output = S::Node;

    fn visit_element(&mut self, shape: Shape<'_>) -> Result<S::Node, RenderError> {
        let mut element = self.sink.create_element(shape.tag);

        if let Some(attributes) = shape.attributes {
            for (name, value) in attributes.iter() {
                let value = attribute_value(name, value)?;
                self.sink.set_attribute(&mut element, name, &value);
            }
        }

        for child in shape.children {
            let node = self.build(child)?;
            self.sink.append_child(&mut element, node);
        }

        Ok(element)
    }
}
