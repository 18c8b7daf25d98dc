use crate::config::BlogConfig;
use crate::domain::{Block, Page};
use crate::notion::error::{ApiErrorBody, NotionError};
use crate::notion::ContentSource;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

const PAGE_SIZE: u32 = 100;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Thin client over the three read endpoints of the Notion REST API.
pub struct NotionClient {
    client: Client,
    base_url: Url,
    token: String,
    version: String,
}

// every list endpoint wraps results in the same cursor envelope
#[derive(Deserialize)]
struct PaginatedList<T> {
    results: Vec<T>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl NotionClient {
    pub fn new(base_url: &str, token: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid Notion API url {}", base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("Notion API url {} cannot carry a path", base_url);
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            token: token.into(),
            version: version.into(),
        })
    }

    pub fn from_config(config: &BlogConfig) -> Result<Self> {
        Self::new(
            &config.notion_api_url,
            config.notion_token.clone(),
            config.notion_version.clone(),
        )
    }

    // one escaped path segment per element, so a "/" inside an id stays inside it
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, NotionError> {
        let response = request
            .bearer_auth(&self.token)
            .header("Notion-Version", self.version.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let error: ApiErrorBody = serde_json::from_slice(&body).unwrap_or_default();
            return Err(NotionError::Api {
                status: status.as_u16(),
                code: error.code,
                message: error.message,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn query_database(&self, database_id: &str) -> Result<Vec<Page>, NotionError> {
        let url = self.endpoint(&["databases", database_id, "query"]);
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = json!({ "page_size": PAGE_SIZE });
            if let Some(start) = &cursor {
                body["start_cursor"] = json!(start);
            }

            debug!(database_id, cursor = ?cursor, "querying notion database");
            let list: PaginatedList<Page> =
                self.send(self.client.post(url.clone()).json(&body)).await?;
            pages.extend(list.results);

            match list.next_cursor {
                Some(next) if list.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(pages)
    }

    pub async fn retrieve_page(&self, page_id: &str) -> Result<Page, NotionError> {
        let url = self.endpoint(&["pages", page_id]);
        debug!(page_id, "retrieving notion page");
        self.send(self.client.get(url)).await
    }

    /// One level of children, following pagination.
    pub async fn list_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut url = self.endpoint(&["blocks", block_id, "children"]);
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("page_size", &PAGE_SIZE.to_string());
                if let Some(start) = &cursor {
                    query.append_pair("start_cursor", start);
                }
            }

            debug!(block_id, cursor = ?cursor, "listing notion block children");
            let list: PaginatedList<Block> = self.send(self.client.get(url)).await?;
            blocks.extend(list.results);

            match list.next_cursor {
                Some(next) if list.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(blocks)
    }

    /// Depth-first fetch of the whole tree below `block_id`.
    pub fn fetch_block_tree<'a>(
        &'a self,
        block_id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Block>, NotionError>> {
        Box::pin(async move {
            let mut blocks = self.list_children(block_id).await?;

            for block in blocks.iter_mut() {
                if block.has_children && block.children.is_none() {
                    let child_id = block.id.clone();
                    block.children = Some(self.fetch_block_tree(&child_id).await?);
                }
            }

            Ok(blocks)
        })
    }
}

#[async_trait]
impl ContentSource for NotionClient {
    async fn list_pages(&self, database_id: &str) -> Result<Vec<Page>> {
        self.query_database(database_id)
            .await
            .with_context(|| format!("Failed to list pages of database {}", database_id))
    }

    async fn get_page(&self, page_id: &str) -> Result<Page> {
        self.retrieve_page(page_id)
            .await
            .with_context(|| format!("Failed to retrieve page {}", page_id))
    }

    async fn get_blocks(&self, block_id: &str) -> Result<Vec<Block>> {
        self.fetch_block_tree(block_id)
            .await
            .with_context(|| format!("Failed to fetch blocks of {}", block_id))
    }
}
