use crate::domain::RichText;
use crate::render::rich_text::format_rich_text;
use serde_json::{json, Value};

// builds a rich text fragment the way the Notion API returns it
fn span(content: &str, annotations: Value, link: Option<&str>) -> RichText {
    serde_json::from_value(json!({
        "type": "text",
        "text": {
            "content": content,
            "link": link.map(|url| json!({ "url": url })),
        },
        "annotations": annotations,
        "plain_text": content,
        "href": link,
    }))
    .expect("Should parse rich text")
}

// one node per span, and only the bold span carries the bold class
#[test]
fn test_one_bold_one_plain() {
    let spans = vec![
        span("Hello ", json!({ "bold": true }), None),
        span("world", json!({}), None),
    ];

    let nodes = format_rich_text(&spans);

    assert_eq!(nodes.len(), 2);
    let bold_count = nodes
        .iter()
        .filter_map(|n| n.as_element())
        .filter(|e| e.has_class("bold"))
        .count();
    assert_eq!(bold_count, 1);

    let html: String = nodes.iter().map(|n| n.to_string()).collect();
    assert_eq!(html, r#"<span class="bold">Hello </span><span>world</span>"#);
}

// nothing in, nothing out
#[test]
fn test_empty_input() {
    assert!(format_rich_text(&[]).is_empty());
}

// a linked span keeps its styling outside and the anchor inside
#[test]
fn test_link_inside_span() {
    let spans = vec![span(
        "docs",
        json!({ "italic": true }),
        Some("https://example.com/docs"),
    )];

    let html = format_rich_text(&spans)[0].to_string();

    assert_eq!(
        html,
        r#"<span class="italic"><a href="https://example.com/docs">docs</a></span>"#
    );
}

// every active annotation shows up as a class, in a stable order
#[test]
fn test_all_annotations() {
    let spans = vec![span(
        "x",
        json!({ "bold": true, "italic": true, "strikethrough": true, "underline": true, "code": true }),
        None,
    )];

    let nodes = format_rich_text(&spans);
    let element = nodes[0].as_element().unwrap();

    assert_eq!(
        element.get_attr("class"),
        Some("bold code italic strikethrough underline")
    );
}

// "default" means no inline style; background colors become background-color
#[test]
fn test_colors() {
    let nodes = format_rich_text(&[
        span("a", json!({ "color": "default" }), None),
        span("b", json!({ "color": "red" }), None),
        span("c", json!({ "color": "yellow_background" }), None),
    ]);
    let styles: Vec<Option<&str>> = nodes
        .iter()
        .map(|n| n.as_element().unwrap().get_attr("style"))
        .collect();

    assert_eq!(
        styles,
        vec![None, Some("color: red"), Some("background-color: yellow")]
    );
}

// user text is always escaped
#[test]
fn test_content_is_escaped() {
    let spans = vec![span("<script>alert('x')</script> & more", json!({}), None)];

    let html = format_rich_text(&spans)[0].to_string();

    assert_eq!(
        html,
        "<span>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more</span>"
    );
}
