//! Renderers for element descriptions
//!
//! Two implementations of [`Visitor`] share the element-shape resolver:
//! [`MarkupWriter`] produces indented HTML text, [`TreeBuilder`] produces
//! nodes through a [`DocumentSink`].

pub mod markup;
pub mod tree;

pub use markup::MarkupWriter;
pub use tree::{DocumentSink, TreeBuilder};

use std::borrow::Cow;

use crate::content::Content;
use crate::error::RenderError;
use crate::shape::{with_shape, Shape};

/// A renderer over resolved element shapes
pub trait Visitor {
    /// What rendering one element produces
    type Output;

    /// Render one resolved element
    fn visit_element(&mut self, shape: Shape<'_>) -> Result<Self::Output, RenderError>;

    /// Resolve a content item and render it
    fn visit(&mut self, item: &Content) -> Result<Self::Output, RenderError> {
        with_shape(item, |shape| self.visit_element(shape))
    }
}

/// HTML tags that cannot have children and are written self-closing.
// https://www.w3.org/TR/2011/WD-html-markup-20110113/syntax.html#void-elements
pub const VOID_ELEMENTS: [&str; 16] = [
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Whether the lower-cased tag is a void element
pub fn is_void_element(tag: &str) -> bool {
    let lower = tag.to_lowercase();
    VOID_ELEMENTS.contains(&lower.as_str())
}

/// Escape text content (`&`, `<`, `>`)
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, false)
}

/// Escape a double-quoted attribute value (`&`, `<`, `>`, `"`)
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
    escape(text, true)
}

fn escape(text: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');
    if !text.contains(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Stringify an attribute value; only text, numbers and booleans are allowed
pub(crate) fn attribute_value<'a>(
    name: &str,
    value: &'a Content,
) -> Result<Cow<'a, str>, RenderError> {
    match value {
        Content::Text(text) => Ok(Cow::Borrowed(text)),
        Content::Number(n) => Ok(Cow::Owned(n.to_string())),
        Content::Bool(b) => Ok(Cow::Borrowed(if *b { "true" } else { "false" })),
        other => Err(RenderError::invalid_attribute(name, other.kind())),
    }
}
