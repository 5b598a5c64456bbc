//! Render configuration
//!
//! A configuration can be built in code, loaded from TOML, or read from the
//! leading attribute map of a dynamic argument list (see [`split_arguments`]).

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::content::{Attributes, Content, Number};
use crate::error::{ConfigError, RenderError};

const DEFAULT_INDENT: &str = "  ";

/// Document type declaration written before the markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Doctype {
    /// No declaration
    #[default]
    Omit,
    /// `<!DOCTYPE html>`
    Html,
    /// `<!DOCTYPE ...>` with the given text
    Custom(String),
}

impl Doctype {
    /// Text placed after `<!DOCTYPE `, if any
    pub fn declaration(&self) -> Option<&str> {
        match self {
            Doctype::Omit => None,
            Doctype::Html => Some("html"),
            Doctype::Custom(text) => Some(text),
        }
    }
}

/// Shape of the rendered output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Indented markup text
    #[default]
    #[serde(rename = "string")]
    Text,
    /// In-memory node tree
    Tree,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(OutputMode::Text),
            "tree" => Ok(OutputMode::Tree),
            other => Err(format!("unknown output mode '{}' (expected \"string\" or \"tree\")", other)),
        }
    }
}

/// Configuration for one render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Text repeated once per nesting level
    pub indent_unit: String,
    /// Nesting level of the top-level elements
    pub indent_depth: usize,
    /// Optional leading doctype line (text output only)
    pub doctype: Doctype,
    /// Text or tree output
    pub output_mode: OutputMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT.to_string(),
            indent_depth: 0,
            doctype: Doctype::Omit,
            output_mode: OutputMode::Text,
        }
    }
}

/// TOML structure for deserializing configuration files
#[derive(Deserialize)]
struct TomlConfig {
    #[serde(alias = "indentUnit")]
    indent_unit: Option<String>,
    #[serde(alias = "indentDepth")]
    indent_depth: Option<usize>,
    doctype: Option<TomlDoctype>,
    #[serde(alias = "outputMode")]
    output_mode: Option<OutputMode>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlDoctype {
    Flag(bool),
    Name(String),
}

impl From<TomlDoctype> for Doctype {
    fn from(value: TomlDoctype) -> Self {
        match value {
            TomlDoctype::Flag(false) => Doctype::Omit,
            TomlDoctype::Flag(true) => Doctype::Html,
            TomlDoctype::Name(name) => Doctype::Custom(name),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text used for one level of indentation
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Set the nesting level of top-level elements
    pub fn with_indent_depth(mut self, depth: usize) -> Self {
        self.indent_depth = depth;
        self
    }

    /// Set the doctype declaration
    pub fn with_doctype(mut self, doctype: Doctype) -> Self {
        self.doctype = doctype;
        self
    }

    /// Set the output mode
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Read a configuration object from a dynamic argument list.
    ///
    /// Accepted keys: `indentUnit` (or `indentString`), `indentDepth` (or
    /// `indentLevel`), `doctype` and `outputMode`. Unknown keys are ignored.
    /// An empty indent unit means the default.
    pub fn from_attributes(attrs: &Attributes) -> Result<Self, RenderError> {
        Self::default().apply_attributes(attrs)
    }

    /// Layer a configuration object on top of this configuration.
    ///
    /// Keys present in `attrs` replace the current values; absent keys keep
    /// them, and an empty indent unit keeps the current one. Accepts the same
    /// keys as [`RenderConfig::from_attributes`].
    pub fn apply_attributes(self, attrs: &Attributes) -> Result<Self, RenderError> {
        let mut config = self;
        for (key, value) in attrs.iter() {
            match key {
                "indentUnit" | "indentString" => match value {
                    Content::Text(unit) if unit.is_empty() => {}
                    Content::Text(unit) => config.indent_unit = unit.clone(),
                    other => {
                        return Err(RenderError::invalid_config(
                            key,
                            format!("expected text, found {}", other.kind()),
                        ))
                    }
                },
                "indentDepth" | "indentLevel" => {
                    config.indent_depth = depth_from(key, value)?;
                }
                "doctype" => config.doctype = doctype_from(value),
                "outputMode" => match value {
                    Content::Text(mode) => {
                        config.output_mode = mode
                            .parse()
                            .map_err(|reason| RenderError::invalid_config(key, reason))?;
                    }
                    other => {
                        return Err(RenderError::invalid_config(
                            key,
                            format!("expected text, found {}", other.kind()),
                        ))
                    }
                },
                _ => {}
            }
        }
        Ok(config)
    }
}

impl FromStr for RenderConfig {
    type Err = ConfigError;

    /// Parse configuration from TOML text
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(RenderConfig {
            indent_unit: parsed.indent_unit.unwrap_or(defaults.indent_unit),
            indent_depth: parsed.indent_depth.unwrap_or(defaults.indent_depth),
            doctype: parsed.doctype.map(Doctype::from).unwrap_or(defaults.doctype),
            output_mode: parsed.output_mode.unwrap_or(defaults.output_mode),
        })
    }
}

/// Largest depth accepted from a configuration object (2^53)
const MAX_INDENT_DEPTH: i64 = 1 << 53;

fn depth_from(key: &str, value: &Content) -> Result<usize, RenderError> {
    let invalid = |found: String| {
        RenderError::invalid_config(key, format!("expected a non-negative integer, found {}", found))
    };
    match value {
        Content::Number(Number::Int(n)) if *n <= MAX_INDENT_DEPTH => {
            usize::try_from(*n).map_err(|_| invalid(n.to_string()))
        }
        // Floats above 2^53 are not exact integers and would saturate the cast
        Content::Number(Number::Float(x))
            if x.fract() == 0.0 && *x >= 0.0 && *x <= MAX_INDENT_DEPTH as f64 =>
        {
            usize::try_from(*x as i64).map_err(|_| invalid(x.to_string()))
        }
        Content::Number(n) => Err(invalid(n.to_string())),
        // An absent depth falls back to zero
        Content::Null => Ok(0),
        other => Err(invalid(other.kind().to_string())),
    }
}

/// Truthy values enable the `html` doctype; non-empty text is used verbatim
fn doctype_from(value: &Content) -> Doctype {
    match value {
        Content::Text(text) if text.is_empty() => Doctype::Omit,
        Content::Text(text) => Doctype::Custom(text.clone()),
        Content::Bool(false) | Content::Null => Doctype::Omit,
        Content::Number(Number::Int(0)) => Doctype::Omit,
        Content::Number(Number::Float(x)) if *x == 0.0 || x.is_nan() => Doctype::Omit,
        _ => Doctype::Html,
    }
}

/// Split a dynamic argument list into configuration and content.
///
/// A leading attribute map is the configuration object; otherwise the
/// defaults apply and every argument is content.
pub fn split_arguments(args: Vec<Content>) -> Result<(RenderConfig, Vec<Content>), RenderError> {
    split_arguments_onto(RenderConfig::default(), args)
}

/// Like [`split_arguments`], but a leading configuration object is layered
/// on top of `base` instead of the defaults.
pub fn split_arguments_onto(
    base: RenderConfig,
    mut args: Vec<Content>,
) -> Result<(RenderConfig, Vec<Content>), RenderError> {
    let config = match args.first() {
        Some(Content::Attributes(attrs)) => Some(base.clone().apply_attributes(attrs)?),
        _ => None,
    };
    match config {
        Some(config) => {
            args.remove(0);
            Ok((config, args))
        }
        None => Ok((base, args)),
    }
}
