//! Content model for element descriptions
//!
//! A document is described with plain nested values: a tag description is a
//! [`Content::Sequence`] whose first item is the tag name, optionally followed
//! by an [`Attributes`] map, followed by the children.
//!
//! # Example
//!
//! ```rust
//! use treehtml::{attrs, tag, Content};
//!
//! let doc: Content = tag!["p", attrs! { "class" => "lead" }, "Hello ", tag!["b", "world"]];
//! assert!(matches!(doc, Content::Sequence(_)));
//! ```

mod json;
mod tags;

pub use tags::Tags;

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// A single value in an element description
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Text content (escaped on output)
    Text(String),
    /// Numeric content (stringified on output)
    Number(Number),
    /// Boolean, only meaningful as an attribute value
    Bool(bool),
    /// Absent value, only produced by dynamic inputs such as JSON
    Null,
    /// Attribute map (recognised only directly after the tag name)
    Attributes(Attributes),
    /// Tag description: tag name, optional attributes, children
    Sequence(Vec<Content>),
    /// Closure producing a tag description
    Generator(Generator),
}

impl Content {
    /// Build a tag description from its items
    pub fn seq(items: impl IntoIterator<Item = Content>) -> Self {
        Content::Sequence(items.into_iter().collect())
    }

    /// Wrap a closure that produces a tag description
    pub fn generator<F>(f: F) -> Self
    where
        F: Fn(&Tags) -> Content + 'static,
    {
        Content::Generator(Generator::new(f))
    }

    /// Human-readable name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Text(_) => "text",
            Content::Number(_) => "number",
            Content::Bool(_) => "boolean",
            Content::Null => "null",
            Content::Attributes(_) => "attribute map",
            Content::Sequence(_) => "sequence",
            Content::Generator(_) => "generator",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_attributes(&self) -> Option<&Attributes> {
        match self {
            Content::Attributes(a) => Some(a),
            _ => None,
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&String> for Content {
    fn from(text: &String) -> Self {
        Content::Text(text.clone())
    }
}

impl From<bool> for Content {
    fn from(value: bool) -> Self {
        Content::Bool(value)
    }
}

impl From<Number> for Content {
    fn from(value: Number) -> Self {
        Content::Number(value)
    }
}

macro_rules! content_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Content {
                fn from(value: $ty) -> Self {
                    Content::Number(Number::from(value))
                }
            }
        )*
    };
}

content_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl From<Attributes> for Content {
    fn from(attrs: Attributes) -> Self {
        Content::Attributes(attrs)
    }
}

impl From<Vec<Content>> for Content {
    fn from(items: Vec<Content>) -> Self {
        Content::Sequence(items)
    }
}

impl From<Generator> for Content {
    fn from(generator: Generator) -> Self {
        Content::Generator(generator)
    }
}

/// Numeric value with host-style stringification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) if x.is_nan() => f.write_str("NaN"),
            Number::Float(x) if x.is_infinite() => {
                f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 prints as 0
            Number::Float(x) if x == 0.0 => f.write_str("0"),
            Number::Float(x) if x.fract() == 0.0 && x.abs() < 1e21 => write!(f, "{:.0}", x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

macro_rules! number_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Int(i64::from(value))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Number::Int)
            .unwrap_or(Number::Float(value as f64))
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::from(value as u64)
    }
}

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Number::Int(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Ordered attribute map
///
/// Entries keep insertion order, which is the order they are written in.
/// Values are arbitrary [`Content`]; only text, numbers and booleans render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: IndexMap<String, Content>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute, keeping its original position on replace
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Content>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Builder-style [`Attributes::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Content>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Content> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Content)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<Content>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

/// Shared closure producing a tag description from the [`Tags`] builder
#[derive(Clone)]
pub struct Generator(Rc<dyn Fn(&Tags) -> Content>);

impl Generator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Tags) -> Content + 'static,
    {
        Self(Rc::new(f))
    }

    /// Invoke the closure with the tag builder
    pub fn call(&self, tags: &Tags) -> Content {
        (self.0)(tags)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Generator(..)")
    }
}

impl PartialEq for Generator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Build a tag description from heterogeneous items
///
/// Every item goes through `Content::from`, so text, numbers, attribute maps,
/// nested descriptions and generators can be mixed freely.
#[macro_export]
macro_rules! tag {
    ($($item:expr),* $(,)?) => {
        $crate::Content::Sequence(vec![$($crate::Content::from($item)),*])
    };
}

/// Build an [`Attributes`] map from `name => value` pairs
#[macro_export]
macro_rules! attrs {
    ($($name:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut attrs = $crate::Attributes::new();
        $(attrs.insert($name, $value);)*
        attrs
    }};
}
