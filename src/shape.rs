//! Element-shape resolution
//!
//! Turns a content item into a tag name, an optional attribute map and the
//! list of children. Both renderers go through this one function.

use crate::content::{Attributes, Content, Tags};
use crate::error::RenderError;

/// A resolved tag description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape<'a> {
    /// Tag name, emitted verbatim
    pub tag: &'a str,
    /// Attribute map, present only when it directly follows the tag name
    pub attributes: Option<&'a Attributes>,
    /// Remaining items
    pub children: &'a [Content],
}

impl<'a> Shape<'a> {
    /// Split the items of a tag description
    pub fn from_items(items: &'a [Content]) -> Result<Self, RenderError> {
        let (first, rest) = items.split_first().ok_or(RenderError::EmptyElement)?;
        let tag = match first {
            Content::Text(name) => name.as_str(),
            other => return Err(RenderError::InvalidTagName { found: other.kind() }),
        };

        // Only the item right after the tag name can be the attribute map
        match rest.split_first() {
            Some((Content::Attributes(attributes), children)) => Ok(Self {
                tag,
                attributes: Some(attributes),
                children,
            }),
            _ => Ok(Self {
                tag,
                attributes: None,
                children: rest,
            }),
        }
    }

    /// Whether the lower-cased tag name equals `name`
    pub fn is(&self, name: &str) -> bool {
        self.tag.to_lowercase() == name
    }
}

/// Resolve `item` into a [`Shape`] and hand it to `visit`.
///
/// Generators are invoked with [`Tags`] and must return a sequence. The shape
/// borrows from the generated value, hence the continuation.
pub fn with_shape<R>(
    item: &Content,
    visit: impl FnOnce(Shape<'_>) -> Result<R, RenderError>,
) -> Result<R, RenderError> {
    match item {
        Content::Sequence(items) => visit(Shape::from_items(items)?),
        Content::Generator(generator) => match generator.call(&Tags) {
            Content::Sequence(items) => visit(Shape::from_items(&items)?),
            other => Err(RenderError::InvalidElementType {
                found: other.kind(),
            }),
        },
        other => Err(RenderError::InvalidElementType {
            found: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attrs, tag};

    fn resolve(item: &Content) -> Result<(String, Option<usize>, usize), RenderError> {
        with_shape(item, |shape| {
            Ok((
                shape.tag.to_string(),
                shape.attributes.map(Attributes::len),
                shape.children.len(),
            ))
        })
    }

    #[test]
    fn test_tag_only() {
        assert_eq!(resolve(&tag!["br"]), Ok(("br".to_string(), None, 0)));
    }

    #[test]
    fn test_attributes_in_second_position() {
        let item = tag!["div", attrs! { "a" => 1 }];
        assert_eq!(resolve(&item), Ok(("div".to_string(), Some(1), 0)));
    }

    #[test]
    fn test_attributes_elsewhere_are_children() {
        let item = tag!["div", "text", attrs! { "a" => 1 }];
        assert_eq!(resolve(&item), Ok(("div".to_string(), None, 2)));
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(resolve(&tag![]), Err(RenderError::EmptyElement));
    }

    #[test]
    fn test_non_text_tag_name() {
        assert_eq!(
            resolve(&tag![5, "x"]),
            Err(RenderError::InvalidTagName { found: "number" })
        );
    }

    #[test]
    fn test_scalar_is_not_an_element() {
        assert_eq!(
            resolve(&Content::from("div")),
            Err(RenderError::InvalidElementType { found: "text" })
        );
        assert_eq!(
            resolve(&Content::Null),
            Err(RenderError::InvalidElementType { found: "null" })
        );
    }

    #[test]
    fn test_generator_is_invoked() {
        let item = Content::generator(|t| t.element("section", vec![attrs! { "id" => "s" }.into(), "a".into()]));
        assert_eq!(resolve(&item), Ok(("section".to_string(), Some(1), 1)));
    }

    #[test]
    fn test_generator_must_return_sequence() {
        let item = Content::generator(|_| Content::from("oops"));
        assert_eq!(
            resolve(&item),
            Err(RenderError::InvalidElementType { found: "text" })
        );
    }

    #[test]
    fn test_is_compares_lowercase() {
        let items = [Content::from("PRE")];
        let shape = Shape::from_items(&items).unwrap();
        assert!(shape.is("pre"));
        assert!(!shape.is("div"));
    }
}
