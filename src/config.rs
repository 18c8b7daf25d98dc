use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

#[derive(Clone, Debug)]
pub struct BlogConfig {
    pub notion_token: String,
    pub database_id: String,
    pub notion_api_url: String,
    pub notion_version: String,
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub site_title: String,
}

impl BlogConfig {
    pub fn from_env() -> Result<Self> {
        let notion_token = std::env::var("NOTION_TOKEN")
            .context("Failed to determine NOTION_TOKEN from environment variables")?;

        let database_id = std::env::var("NOTION_DATABASE_ID")
            .context("Failed to determine NOTION_DATABASE_ID from environment variables")?;

        let notion_api_url = std::env::var("NOTION_API_URL")
            .unwrap_or_else(|_| DEFAULT_NOTION_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let notion_version =
            std::env::var("NOTION_VERSION").unwrap_or_else(|_| DEFAULT_NOTION_VERSION.to_string());

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string()));

        let site_title =
            std::env::var("SITE_TITLE").unwrap_or_else(|_| "Martin Kučera".to_string());

        Ok(Self {
            notion_token,
            database_id,
            notion_api_url,
            notion_version,
            bind_addr,
            static_dir,
            site_title,
        })
    }
}
