use crate::config::BlogConfig;
use crate::domain::{Block, Page};
use crate::notion::{ContentSource, NotionError};
use crate::render::layout::{article_document, index_document, not_found_document};
use crate::slug;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A page together with its fully fetched block tree.
#[derive(Debug, Clone)]
pub struct Article {
    pub page: Page,
    pub blocks: Vec<Block>,
}

/// Outcome of assembling one route. Assembly starts out pending on the
/// content fetches and settles into exactly one of these.
#[derive(Debug, Clone)]
pub enum PageState {
    Found(Article),
    NotFound,
}

impl PageState {
    pub fn is_found(&self) -> bool {
        matches!(self, PageState::Found(_))
    }

    pub fn to_html(&self, site_title: &str) -> String {
        match self {
            PageState::Found(article) => article_document(site_title, &article.page, &article.blocks),
            PageState::NotFound => not_found_document(site_title),
        }
    }
}

pub struct BlogService {
    source: Box<dyn ContentSource>,
    config: Arc<BlogConfig>,
}

impl BlogService {
    pub fn new(source: Box<dyn ContentSource>, config: Arc<BlogConfig>) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    /// All posts of the configured database.
    pub async fn list_posts(&self) -> Result<Vec<Page>> {
        self.source
            .list_pages(&self.config.database_id)
            .await
            .context("Failed to list posts")
    }

    pub async fn render_index(&self) -> Result<String> {
        let pages = self.list_posts().await?;
        Ok(index_document(&self.config.site_title, &pages))
    }

    /// Every path a static build should produce, ids first, then slugs.
    pub async fn static_paths(&self) -> Result<Vec<String>> {
        let pages = self.list_posts().await?;
        Ok(slug::static_paths(&pages))
    }

    /// Resolves a route identifier (raw id or slug) and fetches the article.
    ///
    /// Any failure along the way, including listing the database, ends in
    /// `PageState::NotFound`.
    pub async fn assemble(&self, identifier: &str) -> PageState {
        let result = match self.list_posts().await {
            Ok(pages) => self.fetch_article(slug::resolve(identifier, &pages)).await,
            Err(e) => Err(e),
        };
        settle(identifier, result)
    }

    /// Same as [`BlogService::assemble`], but resolves against an already
    /// fetched page list.
    pub async fn assemble_among(&self, identifier: &str, pages: &[Page]) -> PageState {
        let result = self.fetch_article(slug::resolve(identifier, pages)).await;
        settle(identifier, result)
    }

    async fn fetch_article(&self, page_id: &str) -> Result<Article> {
        debug!(page_id, "fetching article");
        let page = self.source.get_page(page_id).await?;
        let blocks = self.source.get_blocks(page_id).await?;
        Ok(Article { page, blocks })
    }
}

fn settle(identifier: &str, result: Result<Article>) -> PageState {
    match result {
        Ok(article) => {
            info!(identifier, page_id = %article.page, "article assembled");
            PageState::Found(article)
        }
        Err(e) => {
            let missing = e
                .downcast_ref::<NotionError>()
                .map_or(false, NotionError::is_not_found);
            if missing {
                info!(identifier, "article does not exist");
            } else {
                warn!(identifier, error = %format!("{:#}", e), "article unavailable");
            }
            PageState::NotFound
        }
    }
}
