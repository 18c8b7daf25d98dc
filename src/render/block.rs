use crate::domain::block::{Code, Media, Table, TableRow, TextBlock, ToDo};
use crate::domain::rich_text::first_plain_text;
use crate::domain::{Block, BlockKind};
use crate::render::markup::{Element, Node};
use crate::render::rich_text::format_rich_text;

/// Renders a sequence of sibling blocks.
///
/// Notion returns list items as flat siblings, so consecutive items of the
/// same kind are gathered into a single `<ul>` or `<ol>` here.
pub fn render_blocks(blocks: &[Block]) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::with_capacity(blocks.len());
    let mut iter = blocks.iter().peekable();

    while let Some(block) = iter.next() {
        let Some(list_tag) = list_wrapper(block) else {
            nodes.push(render_block(block));
            continue;
        };

        let mut items = vec![render_block(block)];
        while let Some(next) = iter.next_if(|b| list_wrapper(b) == Some(list_tag)) {
            items.push(render_block(next));
        }
        nodes.push(Element::new(list_tag).children(items).into());
    }

    nodes
}

/// Renders one block and, recursively, its children.
pub fn render_block(block: &Block) -> Node {
    match &block.kind {
        BlockKind::Paragraph(text) => text_element("p", text),
        BlockKind::Heading1(text) => text_element("h1", text),
        BlockKind::Heading2(text) => text_element("h2", text),
        BlockKind::Heading3(text) => text_element("h3", text),
        BlockKind::BulletedListItem(text) | BlockKind::NumberedListItem(text) => {
            Element::new("li")
                .children(format_rich_text(&text.rich_text))
                .children(render_nested_list(block.children()))
                .into()
        }
        BlockKind::ToDo(todo) => render_to_do(&block.id, todo),
        BlockKind::Toggle(text) => Element::new("details")
            .child(Element::new("summary").children(format_rich_text(&text.rich_text)))
            .children(render_blocks(block.children()))
            .into(),
        BlockKind::ChildPage(page) => Element::new("div")
            .attr("class", "child-page")
            .child(Element::new("strong").child(page.title.as_str()))
            .children(render_blocks(block.children()))
            .into(),
        BlockKind::Image(media) => render_image(media),
        BlockKind::Divider => Element::new("hr").into(),
        BlockKind::Quote(text) => Element::new("blockquote")
            .child(first_plain_text(&text.rich_text))
            .into(),
        BlockKind::Code(code) => render_code(code),
        BlockKind::File(media) => render_file(media),
        BlockKind::Bookmark(bookmark) => Element::new("a")
            .attr("href", bookmark.url.as_str())
            .attr("target", "_blank")
            .attr("class", "bookmark")
            .child(bookmark.url.as_str())
            .into(),
        BlockKind::Table(table) => render_table(block.children(), table),
        BlockKind::TableRow(row) => render_table_row(row, "td"),
        BlockKind::ColumnList => Element::new("div")
            .attr("class", "row")
            .children(render_blocks(block.children()))
            .into(),
        BlockKind::Column => Element::new("div")
            .children(render_blocks(block.children()))
            .into(),
        BlockKind::Missing(_) => Node::empty(),
        BlockKind::Unsupported(tag) => Node::text(unsupported_placeholder(tag)),
    }
}

pub fn unsupported_placeholder(tag: &str) -> String {
    let reason = if tag == "unsupported" {
        "unsupported by Notion API"
    } else {
        tag
    };
    format!("❌ Unsupported block ({reason})")
}

fn list_wrapper(block: &Block) -> Option<&'static str> {
    match block.kind {
        BlockKind::BulletedListItem(_) => Some("ul"),
        BlockKind::NumberedListItem(_) => Some("ol"),
        _ => None,
    }
}

fn text_element(tag: &'static str, text: &TextBlock) -> Node {
    Element::new(tag)
        .children(format_rich_text(&text.rich_text))
        .into()
}

// the first child decides the wrapper for the whole nested list
fn render_nested_list(children: &[Block]) -> Option<Node> {
    let first = children.first()?;
    let tag = match first.kind {
        BlockKind::NumberedListItem(_) => "ol",
        _ => "ul",
    };

    Some(
        Element::new(tag)
            .children(children.iter().map(render_block))
            .into(),
    )
}

fn render_to_do(id: &str, todo: &ToDo) -> Node {
    let mut checkbox = Element::new("input")
        .attr("type", "checkbox")
        .attr("id", id);
    if todo.checked {
        checkbox = checkbox.flag("checked");
    }

    Element::new("div")
        .child(
            Element::new("label")
                .attr("for", id)
                .child(checkbox)
                .child(" ")
                .children(format_rich_text(&todo.rich_text)),
        )
        .into()
}

fn render_image(media: &Media) -> Node {
    let caption = media.caption_text();

    Element::new("figure")
        .child(Element::new("img").attr("src", media.url()).attr("alt", caption))
        .children(figcaption(caption))
        .into()
}

fn render_code(code: &Code) -> Node {
    let class = match &code.language {
        Some(language) if !language.is_empty() => {
            format!("code-block language-{}", language.replace(' ', "-"))
        }
        _ => "code-block".to_string(),
    };

    Element::new("pre")
        .attr("class", "pre")
        .child(
            Element::new("code")
                .attr("class", class)
                .child(first_plain_text(&code.rich_text)),
        )
        .into()
}

fn render_file(media: &Media) -> Node {
    let url = media.url();

    Element::new("figure")
        .child(
            Element::new("div")
                .attr("class", "file")
                .child("📎 ")
                .child(Element::new("a").attr("href", url).child(file_name(url))),
        )
        .children(figcaption(media.caption_text()))
        .into()
}

/// Last path segment of a URL, without its query string.
pub fn file_name(url: &str) -> &str {
    let path = url.split('?').next().unwrap_or(url);
    path.rsplit('/').next().unwrap_or(path)
}

fn figcaption(caption: &str) -> Option<Node> {
    if caption.is_empty() {
        return None;
    }
    Some(Element::new("figcaption").child(caption).into())
}

fn render_table(children: &[Block], table: &Table) -> Node {
    let rows = children
        .iter()
        .filter_map(|child| match &child.kind {
            BlockKind::TableRow(row) => Some(row),
            _ => None,
        })
        .enumerate()
        .map(|(index, row)| {
            let cell_tag = if table.has_column_header && index == 0 {
                "th"
            } else {
                "td"
            };
            render_table_row(row, cell_tag)
        });

    Element::new("table")
        .attr("class", "table")
        .child(Element::new("tbody").children(rows))
        .into()
}

fn render_table_row(row: &TableRow, cell_tag: &'static str) -> Node {
    Element::new("tr")
        .children(
            row.cells
                .iter()
                .map(|cell| Node::from(Element::new(cell_tag).children(format_rich_text(cell)))),
        )
        .into()
}
