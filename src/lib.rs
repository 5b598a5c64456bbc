//! treehtml - render nested element descriptions as HTML
//!
//! Documents are written as plain nested values instead of text templates:
//! a tag description is a sequence of the tag name, an optional attribute map,
//! and the children. The library turns such descriptions into indented markup
//! text or into an in-memory node tree.
//!
//! # Example
//!
//! ```rust
//! use treehtml::{attrs, render_markup, tag};
//!
//! let html = render_markup(&[tag!["div", attrs! { "id" => "x", "n" => 5 }, "hi"]]).unwrap();
//! assert_eq!(html, "<div id=\"x\" n=\"5\">\n  hi\n</div>\n");
//! ```

pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod renderer;
pub mod shape;

pub use config::{split_arguments, split_arguments_onto, Doctype, OutputMode, RenderConfig};
pub use content::{Attributes, Content, Generator, Number, Tags};
pub use error::{ConfigError, RenderError};
pub use renderer::{DocumentSink, MarkupWriter, TreeBuilder, Visitor};

use tracing::{debug, trace};

use dom::DomSink;

/// Result of a render call
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Markup text (text output mode)
    Markup(String),
    /// Root node (tree output mode)
    Tree(dom::Node),
}

impl Rendered {
    pub fn as_markup(&self) -> Option<&str> {
        match self {
            Rendered::Markup(text) => Some(text),
            Rendered::Tree(_) => None,
        }
    }

    pub fn into_markup(self) -> Option<String> {
        match self {
            Rendered::Markup(text) => Some(text),
            Rendered::Tree(_) => None,
        }
    }

    pub fn into_tree(self) -> Option<dom::Node> {
        match self {
            Rendered::Tree(node) => Some(node),
            Rendered::Markup(_) => None,
        }
    }
}

/// Render a dynamic argument list.
///
/// If the first argument is an attribute map it is read as the configuration
/// (see [`RenderConfig::from_attributes`]); every other argument is content.
///
/// # Example
///
/// ```rust
/// use treehtml::{attrs, render, tag};
///
/// let out = render(vec![attrs! { "doctype" => true }.into(), tag!["html"]]).unwrap();
/// assert_eq!(out.as_markup(), Some("<!DOCTYPE html>\n<html></html>\n"));
/// ```
pub fn render(args: Vec<Content>) -> Result<Rendered, RenderError> {
    let (config, content) = split_arguments(args)?;
    render_with_config(&config, &content)
}

/// Render a single root element, the older call form.
///
/// Fails with [`RenderError::TrailingArguments`] when more than one content
/// argument follows the optional configuration.
pub fn render_single(args: Vec<Content>) -> Result<Rendered, RenderError> {
    let (config, content) = split_arguments(args)?;
    match content.len() {
        0 => Err(RenderError::MissingContent),
        1 => render_with_config(&config, &content),
        n => Err(RenderError::TrailingArguments { count: n - 1 }),
    }
}

/// Render content with an explicit configuration
///
/// Text output renders every argument in order after the optional doctype
/// line. Tree output takes exactly one argument and ignores the doctype.
pub fn render_with_config(
    config: &RenderConfig,
    content: &[Content],
) -> Result<Rendered, RenderError> {
    debug!(
        mode = ?config.output_mode,
        arguments = content.len(),
        doctype = ?config.doctype.declaration(),
        "rendering"
    );

    match config.output_mode {
        OutputMode::Tree => {
            let [root] = content else {
                return Err(match content.len() {
                    0 => RenderError::MissingContent,
                    found => RenderError::TooManyArguments { found },
                });
            };
            build_tree(DomSink, root).map(Rendered::Tree)
        }
        OutputMode::Text => write_markup(config, content).map(Rendered::Markup),
    }
}

/// Render content to markup text with the default configuration
pub fn render_markup(content: &[Content]) -> Result<String, RenderError> {
    write_markup(&RenderConfig::default(), content)
}

/// Build a node tree for one content item through a caller-provided sink
pub fn build_tree<S: DocumentSink>(sink: S, item: &Content) -> Result<S::Node, RenderError> {
    TreeBuilder::new(sink).build(item)
}

fn write_markup(config: &RenderConfig, content: &[Content]) -> Result<String, RenderError> {
    let mut writer = MarkupWriter::new(config);
    if let Some(doctype) = config.doctype.declaration() {
        writer.write_doctype(doctype);
    }
    for item in content {
        writer.visit(item)?;
    }

    let out = writer.finish();
    trace!(bytes = out.len(), "rendered markup");
    Ok(out)
}
