use crate::domain::{Annotations, RichText};
use crate::render::markup::{Element, Node};

/// Formats rich text as one inline `<span>` per fragment.
pub fn format_rich_text(spans: &[RichText]) -> Vec<Node> {
    spans.iter().map(format_span).collect()
}

fn format_span(span: &RichText) -> Node {
    let mut element = Element::new("span");

    let classes = annotation_classes(&span.annotations);
    if !classes.is_empty() {
        element = element.attr("class", classes.join(" "));
    }
    if let Some(style) = color_style(&span.annotations) {
        element = element.attr("style", style);
    }

    let content: Node = match &span.link {
        Some(url) => Element::new("a")
            .attr("href", url.as_str())
            .child(span.content.as_str())
            .into(),
        None => Node::text(span.content.as_str()),
    };

    element.child(content).into()
}

fn annotation_classes(annotations: &Annotations) -> Vec<&'static str> {
    [
        (annotations.bold, "bold"),
        (annotations.code, "code"),
        (annotations.italic, "italic"),
        (annotations.strikethrough, "strikethrough"),
        (annotations.underline, "underline"),
    ]
    .into_iter()
    .filter_map(|(active, class)| active.then_some(class))
    .collect()
}

// notion colors are css color names, with a "_background" suffix for highlights
fn color_style(annotations: &Annotations) -> Option<String> {
    if !annotations.has_color() {
        return None;
    }

    Some(match annotations.color.strip_suffix("_background") {
        Some(color) => format!("background-color: {color}"),
        None => format!("color: {}", annotations.color),
    })
}
