use crate::domain::{Block, Page};
use anyhow::Result;
use async_trait::async_trait;

pub mod client;
pub mod error;

pub use client::NotionClient;
pub use error::NotionError;

// read-only view of the content API; the blog never writes back
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// All pages of a database, in the order the API returns them.
    async fn list_pages(&self, database_id: &str) -> Result<Vec<Page>>;
    async fn get_page(&self, page_id: &str) -> Result<Page>;
    /// The block tree of a page, with every block's children already fetched.
    async fn get_blocks(&self, block_id: &str) -> Result<Vec<Block>>;
}
