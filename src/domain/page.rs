use crate::domain::rich_text::{plain_text, RichText};
use crate::slug::slugify;
use chrono::{DateTime, Utc};
use derive_more::derive::Display;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Display, Deserialize)]
#[display("{}", id)]
#[serde(from = "RawPage")]
pub struct Page {
    pub id: String,
    pub title: Vec<RichText>,
    pub last_edited_time: DateTime<Utc>,
}

impl Page {
    pub fn plain_title(&self) -> String {
        plain_text(&self.title)
    }

    pub fn slug(&self) -> String {
        slugify(&self.plain_title())
    }
}

// a database has exactly one title-typed property, whatever the user named it
#[derive(Deserialize)]
struct RawPage {
    id: String,
    last_edited_time: DateTime<Utc>,
    #[serde(default)]
    properties: HashMap<String, RawProperty>,
}

#[derive(Deserialize)]
struct RawProperty {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    title: Option<Vec<RichText>>,
}

impl From<RawPage> for Page {
    fn from(raw: RawPage) -> Self {
        let title = raw
            .properties
            .into_values()
            .find(|property| property.kind == "title")
            .and_then(|property| property.title)
            .unwrap_or_default();

        Self {
            id: raw.id,
            title,
            last_edited_time: raw.last_edited_time,
        }
    }
}
