use crate::domain::rich_text::{first_plain_text, RichText};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// One node of a page's content tree, as returned by the blocks endpoint.
///
/// `children` is filled in by the content source for blocks whose
/// `has_children` flag is set. It stays `None` when the children were never
/// fetched, which the renderer treats the same as "no children".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawBlock")]
pub struct Block {
    pub id: String,
    pub kind: BlockKind,
    pub has_children: bool,
    pub children: Option<Vec<Block>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    Paragraph(TextBlock),
    Heading1(TextBlock),
    Heading2(TextBlock),
    Heading3(TextBlock),
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    ToDo(ToDo),
    Toggle(TextBlock),
    ChildPage(ChildPage),
    Image(Media),
    Divider,
    Quote(TextBlock),
    Code(Code),
    File(Media),
    Bookmark(Bookmark),
    Table(Table),
    TableRow(TableRow),
    ColumnList,
    Column,
    /// A known tag whose payload was absent or did not parse.
    Missing(String),
    /// Any tag this renderer does not know, including Notion's own `unsupported`.
    Unsupported(String),
}

impl BlockKind {
    pub fn tag(&self) -> &str {
        match self {
            BlockKind::Paragraph(_) => "paragraph",
            BlockKind::Heading1(_) => "heading_1",
            BlockKind::Heading2(_) => "heading_2",
            BlockKind::Heading3(_) => "heading_3",
            BlockKind::BulletedListItem(_) => "bulleted_list_item",
            BlockKind::NumberedListItem(_) => "numbered_list_item",
            BlockKind::ToDo(_) => "to_do",
            BlockKind::Toggle(_) => "toggle",
            BlockKind::ChildPage(_) => "child_page",
            BlockKind::Image(_) => "image",
            BlockKind::Divider => "divider",
            BlockKind::Quote(_) => "quote",
            BlockKind::Code(_) => "code",
            BlockKind::File(_) => "file",
            BlockKind::Bookmark(_) => "bookmark",
            BlockKind::Table(_) => "table",
            BlockKind::TableRow(_) => "table_row",
            BlockKind::ColumnList => "column_list",
            BlockKind::Column => "column",
            BlockKind::Missing(tag) | BlockKind::Unsupported(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToDo {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChildPage {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Code {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bookmark {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub has_column_header: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<Vec<RichText>>,
}

/// Payload shared by image and file blocks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Media {
    #[serde(flatten)]
    pub source: MediaSource,
    #[serde(default)]
    pub caption: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaSource {
    External { external: MediaUrl },
    File { file: MediaUrl },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaUrl {
    pub url: String,
}

impl Media {
    pub fn url(&self) -> &str {
        match &self.source {
            MediaSource::External { external } => &external.url,
            MediaSource::File { file } => &file.url,
        }
    }

    pub fn caption_text(&self) -> &str {
        first_plain_text(&self.caption)
    }
}

impl Block {
    pub fn children(&self) -> &[Block] {
        self.children.as_deref().unwrap_or(&[])
    }
}

#[derive(Deserialize)]
struct RawBlock {
    #[serde(default)]
    id: String,
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    has_children: bool,
    #[serde(default)]
    children: Option<Vec<Block>>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl From<RawBlock> for Block {
    fn from(mut raw: RawBlock) -> Self {
        let mut payload = raw.rest.remove(&raw.tag);

        // some sources nest list-item children inside the payload instead of on the block
        let mut children = raw.children;
        if children.is_none() {
            if let Some(Value::Object(fields)) = payload.as_mut() {
                children = fields
                    .remove("children")
                    .and_then(|value| serde_json::from_value(value).ok());
            }
        }

        Self {
            kind: kind_from_payload(&raw.tag, payload),
            id: raw.id,
            has_children: raw.has_children,
            children,
        }
    }
}

fn kind_from_payload(tag: &str, payload: Option<Value>) -> BlockKind {
    let parsed = match tag {
        "paragraph" => parse(payload).map(BlockKind::Paragraph),
        "heading_1" => parse(payload).map(BlockKind::Heading1),
        "heading_2" => parse(payload).map(BlockKind::Heading2),
        "heading_3" => parse(payload).map(BlockKind::Heading3),
        "bulleted_list_item" => parse(payload).map(BlockKind::BulletedListItem),
        "numbered_list_item" => parse(payload).map(BlockKind::NumberedListItem),
        "to_do" => parse(payload).map(BlockKind::ToDo),
        "toggle" => parse(payload).map(BlockKind::Toggle),
        "child_page" => parse(payload).map(BlockKind::ChildPage),
        "image" => parse(payload).map(BlockKind::Image),
        "quote" => parse(payload).map(BlockKind::Quote),
        "code" => parse(payload).map(BlockKind::Code),
        "file" => parse(payload).map(BlockKind::File),
        "bookmark" => parse(payload).map(BlockKind::Bookmark),
        "table" => parse(payload).map(BlockKind::Table),
        "table_row" => parse(payload).map(BlockKind::TableRow),
        // payload-free layout blocks
        "divider" => Some(BlockKind::Divider),
        "column_list" => Some(BlockKind::ColumnList),
        "column" => Some(BlockKind::Column),
        _ => return BlockKind::Unsupported(tag.to_string()),
    };

    parsed.unwrap_or_else(|| BlockKind::Missing(tag.to_string()))
}

fn parse<T: DeserializeOwned>(payload: Option<Value>) -> Option<T> {
    serde_json::from_value(payload?).ok()
}
