//! End-to-end rendering of complete documents

use pretty_assertions::assert_eq;

use treehtml::{
    attrs, render, render_markup, render_single, render_with_config, tag, Content, Doctype,
    OutputMode, RenderConfig, RenderError,
};

/// Check that every non-void open tag has a matching close tag, in order
fn assert_balanced(html: &str) {
    let mut stack: Vec<String> = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        let end = rest[start..].find('>').expect("unterminated tag") + start;
        let inner = &rest[start + 1..end];
        rest = &rest[end + 1..];

        if inner.starts_with('!') || inner.ends_with('/') {
            continue;
        }
        if let Some(name) = inner.strip_prefix('/') {
            assert_eq!(stack.pop().as_deref(), Some(name), "mismatched close tag");
        } else {
            let name = inner.split_whitespace().next().unwrap_or_default();
            stack.push(name.to_string());
        }
    }
    assert!(stack.is_empty(), "unclosed tags: {:?}", stack);
}

fn sample_document() -> Vec<Content> {
    vec![
        attrs! { "doctype" => true }.into(),
        tag![
            "html",
            attrs! { "lang" => "en" },
            tag![
                "head",
                tag!["title", "Demo"],
                tag!["meta", attrs! { "charset" => "utf-8" }]
            ],
            tag![
                "body",
                tag!["h1", "Hello & welcome"],
                tag![
                    "p",
                    attrs! { "class" => "lead", "title" => "\"quoted\"" },
                    "Count:",
                    3
                ],
                tag!["pre", "line 1\n  <b>"],
                tag!["br"]
            ]
        ],
    ]
}

#[test]
fn test_full_document() {
    let html = render(sample_document())
        .expect("Should render")
        .into_markup()
        .expect("text output");

    insta::assert_snapshot!(html.trim_end(), @r#"
<!DOCTYPE html>
<html lang="en">
  <head>
    <title>
      Demo
    </title>
    <meta charset="utf-8" />
  </head>
  <body>
    <h1>
      Hello &amp; welcome
    </h1>
    <p class="lead" title="&quot;quoted&quot;">
      Count:
      3
    </p>
    <pre>line 1
  &lt;b&gt;</pre>
    <br />
  </body>
</html>
"#);
    assert_balanced(&html);
}

#[test]
fn test_generated_list() {
    let items = ["alpha", "beta", "gamma"];
    let list = Content::generator(move |t| {
        t.ul(items
            .iter()
            .map(|item| t.li(vec![attrs! { "data-name" => *item }.into(), (*item).into()]))
            .collect())
    });

    let html = render_markup(&[list]).expect("Should render");
    assert_eq!(
        html,
        concat!(
            "<ul>\n",
            "  <li data-name=\"alpha\">\n    alpha\n  </li>\n",
            "  <li data-name=\"beta\">\n    beta\n  </li>\n",
            "  <li data-name=\"gamma\">\n    gamma\n  </li>\n",
            "</ul>\n",
        )
    );
    assert_balanced(&html);
}

#[test]
fn test_generator_with_custom_tag_name() {
    let widget = Content::generator(|t| t.element("x-card", vec![t.span(vec!["inside".into()])]));
    let html = render_markup(&[tag!["div", widget]]).expect("Should render");
    assert_eq!(
        html,
        "<div>\n  <x-card>\n    <span>\n      inside\n    </span>\n  </x-card>\n</div>\n"
    );
}

#[test]
fn test_generator_output_matches_literal() {
    let generated = Content::generator(|t| t.p(vec![attrs! { "id" => "a" }.into(), "x".into()]));
    let literal = tag!["p", attrs! { "id" => "a" }, "x"];
    assert_eq!(
        render_markup(&[generated]).unwrap(),
        render_markup(&[literal]).unwrap()
    );
}

#[test]
fn test_generator_returning_text_is_rejected() {
    let bad = Content::generator(|_| "not an element".into());
    assert_eq!(
        render_markup(&[bad]),
        Err(RenderError::InvalidElementType { found: "text" })
    );
}

#[test]
fn test_custom_indentation() {
    let config = RenderConfig::new()
        .with_indent_unit("\t")
        .with_indent_depth(1);
    let out = render_with_config(&config, &[tag!["div", tag!["span", "x"]]]).unwrap();
    assert_eq!(
        out.as_markup(),
        Some("\t<div>\n\t\t<span>\n\t\t\tx\n\t\t</span>\n\t</div>\n")
    );
}

#[test]
fn test_numbers_render_like_text() {
    let html = render_markup(&[tag!["td", attrs! { "colspan" => 2.0, "w" => 0.5 }, 1.5, -0.0, 42]])
        .unwrap();
    assert_eq!(html, "<td colspan=\"2\" w=\"0.5\">\n  1.5\n  0\n  42\n</td>\n");
}

#[test]
fn test_boolean_attributes() {
    let html = render_markup(&[tag!["input", attrs! { "checked" => true, "disabled" => false }]])
        .unwrap();
    assert_eq!(html, "<input checked=\"true\" disabled=\"false\" />\n");
}

#[test]
fn test_void_element_with_children_is_opened_and_closed() {
    let html = render_markup(&[tag!["BR", "text"]]).unwrap();
    assert_eq!(html, "<BR>\n  text\n</BR>\n");
}

#[test]
fn test_uppercase_pre_is_inline() {
    let html = render_markup(&[tag!["PRE", "keep  spacing"]]).unwrap();
    assert_eq!(html, "<PRE>keep  spacing</PRE>\n");
}

#[test]
fn test_empty_pre_is_written_as_childless() {
    assert_eq!(render_markup(&[tag!["pre"]]).unwrap(), "<pre></pre>\n");
}

#[test]
fn test_pre_with_element_child_is_rejected() {
    assert_eq!(
        render_markup(&[tag!["pre", tag!["b", "x"]]]),
        Err(RenderError::invalid_pre("pre", "sequence"))
    );
}

#[test]
fn test_error_deep_in_tree_discards_output() {
    let doc = tag![
        "div",
        tag!["p", "fine"],
        tag!["p", attrs! { "bad" => Content::Null }]
    ];
    assert_eq!(
        render_markup(&[doc]),
        Err(RenderError::invalid_attribute("bad", "null"))
    );
}

#[test]
fn test_attribute_map_in_child_position_is_rejected() {
    assert_eq!(
        render_markup(&[tag!["div", "a", attrs! { "x" => 1 }]]),
        Err(RenderError::InvalidElementType {
            found: "attribute map"
        })
    );
}

#[test]
fn test_non_text_tag_name() {
    assert_eq!(
        render_markup(&[tag![5, "x"]]),
        Err(RenderError::InvalidTagName { found: "number" })
    );
}

#[test]
fn test_doctype_variants() {
    let custom = RenderConfig::new().with_doctype(Doctype::Custom("html5".to_string()));
    let out = render_with_config(&custom, &[tag!["p"]]).unwrap();
    assert_eq!(out.as_markup(), Some("<!DOCTYPE html5>\n<p></p>\n"));

    let only_doctype = render(vec![attrs! { "doctype" => true }.into()]).unwrap();
    assert_eq!(only_doctype.as_markup(), Some("<!DOCTYPE html>\n"));
}

#[test]
fn test_tree_output() {
    let out = render(vec![
        attrs! { "outputMode" => "tree" }.into(),
        tag![
            "ul",
            attrs! { "class" => "menu" },
            tag!["li", "Home"],
            tag!["li", "About"]
        ],
    ])
    .unwrap();

    let node = out.into_tree().expect("tree output");
    let ul = node.as_element().expect("root element");
    assert_eq!(ul.tag, "ul");
    assert_eq!(ul.get_attr("class"), Some("menu"));
    assert_eq!(ul.children.len(), 2);
    assert_eq!(node.text_content(), "HomeAbout");
}

#[test]
fn test_tree_and_text_agree_on_structure() {
    let doc = tag!["div", attrs! { "id" => "x" }, tag!["span", "a"], "b"];
    let text = render_markup(std::slice::from_ref(&doc)).unwrap();
    let tree = render_with_config(
        &RenderConfig::new().with_output_mode(OutputMode::Tree),
        &[doc],
    )
    .unwrap()
    .into_tree()
    .unwrap();

    let div = tree.as_element().unwrap();
    assert!(text.starts_with("<div id=\"x\">"));
    assert_eq!(div.get_attr("id"), Some("x"));
    assert_eq!(div.children.len(), 2);
    assert_eq!(tree.text_content(), "ab");
}

#[test]
fn test_render_single_root() {
    let out = render_single(vec![attrs! { "indentUnit" => "    " }.into(), tag!["p", "x"]])
        .unwrap();
    assert_eq!(out.as_markup(), Some("<p>\n    x\n</p>\n"));

    assert_eq!(
        render_single(vec![tag!["p"], tag!["p"]]),
        Err(RenderError::TrailingArguments { count: 1 })
    );
}
