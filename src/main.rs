use crate::config::BlogConfig;
use crate::notion::NotionClient;
use crate::services::{export_site, BlogService};
use anyhow::Context;
use axum::Router;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::info;

pub mod config;
mod domain;
mod features;
mod notion;
mod render;
mod services;
mod slug;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub blog: Arc<BlogService>,
    pub config: Arc<BlogConfig>,
}

#[derive(Parser)]
#[command(name = "notion-press", about = "Blog front end for a Notion database")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve pages on demand, fetching from Notion per request (default)
    Serve,
    /// Render every page to static HTML
    Build {
        #[arg(short, long, default_value = "./dist")]
        out: PathBuf,
    },
    /// Print every route a static build produces
    Paths,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .nest_service("/assets", ServeDir::new(&state.config.static_dir))
        .merge(features::posts::posts_router())
        .with_state(state)
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    // load centralized config
    let config = Arc::new(BlogConfig::from_env()?);
    let client = NotionClient::from_config(&config)?;
    let blog = Arc::new(BlogService::new(Box::new(client), config.clone()));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let state = AppState {
                blog,
                config: config.clone(),
            };

            let listener = tokio::net::TcpListener::bind(&config.bind_addr)
                .await
                .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
            info!(addr = %config.bind_addr, "server listening");

            axum::serve(listener, app(state)).await?;
        }
        Command::Build { out } => {
            let report = export_site(&blog, &out).await?;
            info!(
                out = %out.display(),
                routes = report.routes_written,
                "build finished"
            );
        }
        Command::Paths => {
            for path in blog.static_paths().await? {
                println!("/{path}");
            }
        }
    }

    Ok(())
}
