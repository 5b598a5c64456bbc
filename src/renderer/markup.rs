//! Indented HTML text output

use crate::config::RenderConfig;
use crate::content::Content;
use crate::error::RenderError;
use crate::shape::Shape;

use super::{attribute_value, escape_attribute, escape_text, is_void_element, Visitor};

/// Writes markup into an owned buffer.
///
/// The writer is the render state of one call: the output text and the
/// current indent depth. It is borrowed mutably by every recursive step.
pub struct MarkupWriter<'a> {
    out: String,
    depth: usize,
    indent_unit: &'a str,
}

impl<'a> MarkupWriter<'a> {
    /// Create a writer starting at the configured indent depth
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            out: String::new(),
            depth: config.indent_depth,
            indent_unit: &config.indent_unit,
        }
    }

    /// Current nesting depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Write a `<!DOCTYPE ...>` line
    pub fn write_doctype(&mut self, doctype: &str) {
        self.out.push_str("<!DOCTYPE ");
        self.out.push_str(doctype);
        self.out.push_str(">\n");
    }

    /// Consume the writer and return the accumulated markup
    pub fn finish(self) -> String {
        self.out
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(self.indent_unit);
        }
    }

    fn write_close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    fn write_childless_end(&mut self, tag: &str) {
        if is_void_element(tag) {
            self.out.push_str(" />\n");
        } else {
            self.out.push('>');
            self.write_close_tag(tag);
        }
    }

    fn write_text_line(&mut self, text: &str) {
        self.write_indent();
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn write_pre_body(&mut self, shape: &Shape<'_>) -> Result<(), RenderError> {
        let text = match shape.children {
            [Content::Text(text)] => text,
            [other] => return Err(RenderError::invalid_pre(shape.tag, other.kind())),
            children => {
                return Err(RenderError::invalid_pre(
                    shape.tag,
                    format!("{} children", children.len()),
                ))
            }
        };
        self.out.push_str(&escape_text(text));
        self.write_close_tag(shape.tag);
        Ok(())
    }
}

impl Visitor for MarkupWriter<'_> {
    type Output = ();

    fn visit_element(&mut self, shape: Shape<'_>) -> Result<(), RenderError> {
        self.write_indent();
        self.out.push('<');
        self.out.push_str(shape.tag);

        if let Some(attributes) = shape.attributes {
            for (name, value) in attributes.iter() {
                // Names are not checked or escaped
                let value = attribute_value(name, value)?;
                self.out.push(' ');
                self.out.push_str(name);
                self.out.push_str("=\"");
                self.out.push_str(&escape_attribute(&value));
                self.out.push('"');
            }
        }

        if shape.children.is_empty() {
            self.write_childless_end(shape.tag);
            return Ok(());
        }

        self.out.push('>');

        if shape.is("pre") {
            return self.write_pre_body(&shape);
        }

        self.out.push('\n');
        self.depth += 1;
        for child in shape.children {
            match child {
                Content::Text(text) => self.write_text_line(&escape_text(text)),
                Content::Number(n) => self.write_text_line(&n.to_string()),
                other => self.visit(other)?,
            }
        }
        self.depth -= 1;
        self.write_indent();
        self.write_close_tag(shape.tag);
        Ok(())
    }
}
