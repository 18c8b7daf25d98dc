use serde::Deserialize;

/// One styled fragment of Notion rich text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawRichText")]
pub struct RichText {
    pub content: String,
    pub link: Option<String>,
    pub annotations: Annotations,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: String,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: "default".to_string(),
        }
    }
}

impl Annotations {
    pub fn has_color(&self) -> bool {
        !self.color.is_empty() && self.color != "default"
    }
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            link: None,
            annotations: Annotations::default(),
        }
    }
}

/// Concatenates the plain text of every span.
pub fn plain_text(spans: &[RichText]) -> String {
    spans.iter().map(|span| span.content.as_str()).collect()
}

/// Plain text of the first span only, or "" when there is none.
pub fn first_plain_text(spans: &[RichText]) -> &str {
    spans.first().map(|span| span.content.as_str()).unwrap_or("")
}

// wire shape; mentions and equations carry no `text` object, so fall back to plain_text/href
#[derive(Deserialize)]
struct RawRichText {
    #[serde(default)]
    text: Option<RawText>,
    #[serde(default)]
    plain_text: Option<String>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    annotations: Annotations,
}

#[derive(Deserialize)]
struct RawText {
    content: String,
    #[serde(default)]
    link: Option<RawLink>,
}

#[derive(Deserialize)]
struct RawLink {
    url: String,
}

impl From<RawRichText> for RichText {
    fn from(raw: RawRichText) -> Self {
        let (content, link) = match raw.text {
            Some(text) => (text.content, text.link.map(|l| l.url).or(raw.href)),
            None => (raw.plain_text.unwrap_or_default(), raw.href),
        };

        Self {
            content,
            link,
            annotations: raw.annotations,
        }
    }
}
