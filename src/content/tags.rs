//! Tag builder handed to generator closures

use super::Content;

/// Builder capability passed to [`Generator`](super::Generator) closures.
///
/// Any text is accepted as a tag name through [`Tags::element`]; the named
/// methods are shorthands for common HTML tags.
///
/// ```rust
/// use treehtml::{render_markup, Content};
///
/// let doc = Content::generator(|t| t.ul(vec![t.li(vec!["one".into()]), t.li(vec!["two".into()])]));
/// let html = render_markup(&[doc]).unwrap();
/// assert!(html.starts_with("<ul>\n  <li>\n    one\n"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Tags;

macro_rules! tag_methods {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Build a `", stringify!($name), "` tag description.")]
            pub fn $name(&self, rest: Vec<Content>) -> Content {
                self.element(stringify!($name), rest)
            }
        )*
    };
}

impl Tags {
    /// Package a tag name and the remaining items into a tag description
    pub fn element(&self, name: impl Into<String>, rest: Vec<Content>) -> Content {
        let mut items = Vec::with_capacity(rest.len() + 1);
        items.push(Content::Text(name.into()));
        items.extend(rest);
        Content::Sequence(items)
    }

    tag_methods!(
        html, head, title, meta, link, script, style, body, header, footer, main, nav,
        section, article, aside, h1, h2, h3, h4, h5, h6, div, p, span, a, b, i, em,
        strong, small, code, pre, blockquote, ul, ol, li, dl, dt, dd, table, thead,
        tbody, tr, th, td, form, label, input, button, select, option, textarea, img,
        br, hr, figure, figcaption,
    );
}
