//! Error types for rendering and configuration

use thiserror::Error;

/// Errors that can occur while rendering an element description
///
/// All of these describe a malformed input document. Any output produced
/// before the failure is discarded.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    /// A sequence describing an element has no entries
    #[error("an empty sequence cannot be converted into markup")]
    EmptyElement,

    /// A value used as an element is neither a sequence nor a generator
    #[error("element value has incompatible type {found}; expected a sequence or a generator")]
    InvalidElementType { found: &'static str },

    /// The first entry of a tag description is not text
    #[error("tag name must be text, found {found}")]
    InvalidTagName { found: &'static str },

    /// An attribute value is not text, a number, or a boolean
    #[error("invalid type for attribute '{name}': {found} (must be text, number, or boolean)")]
    InvalidAttributeType { name: String, found: &'static str },

    /// A `pre` element does not hold exactly one text child
    #[error("<{tag}> element must contain exactly one text child, found {found}")]
    InvalidPreContent { tag: String, found: String },

    /// Tree output was asked to build more than one root
    #[error("tree output takes exactly one content argument, found {found}")]
    TooManyArguments { found: usize },

    /// The single-root call form received extra arguments
    #[error("unexpected trailing arguments: {count} argument(s) after the root element")]
    TrailingArguments { count: usize },

    /// A child value that cannot become a tree node
    #[error("child of type {found} cannot be converted into a tree node")]
    UnsupportedChildType { found: &'static str },

    /// The call carried a configuration but nothing to render
    #[error("no content to render")]
    MissingContent,

    /// A configuration object entry has the wrong type or value
    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },
}

impl RenderError {
    /// Create an invalid attribute type error
    pub fn invalid_attribute(name: impl Into<String>, found: &'static str) -> Self {
        Self::InvalidAttributeType {
            name: name.into(),
            found,
        }
    }

    /// Create an invalid `pre` content error
    pub fn invalid_pre(tag: impl Into<String>, found: impl Into<String>) -> Self {
        Self::InvalidPreContent {
            tag: tag.into(),
            found: found.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur when loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}
