use crate::render::layout::{index_document, not_found_document};
use crate::services::blog::BlogService;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub pages: usize,
    pub not_found: usize,
    pub routes_written: usize,
    pub assets_copied: usize,
}

/// Writes the whole site under `out_dir`.
///
/// Every page is reachable both by id and by slug (`<route>/index.html`).
/// When two titles share a slug the first page keeps it.
pub async fn export_site(blog: &BlogService, out_dir: &Path) -> Result<ExportReport> {
    let site_title = blog.config().site_title.clone();
    let pages = blog.list_posts().await?;

    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("Failed to create output dir {}", out_dir.display()))?;

    write_file(&out_dir.join("index.html"), &index_document(&site_title, &pages)).await?;
    write_file(&out_dir.join("404.html"), &not_found_document(&site_title)).await?;

    let mut report = ExportReport {
        pages: pages.len(),
        ..Default::default()
    };
    let mut claimed: HashSet<String> = HashSet::new();

    for page in &pages {
        let state = blog.assemble_among(&page.id, &pages).await;
        if !state.is_found() {
            report.not_found += 1;
        }
        let html = state.to_html(&site_title);

        for route in [page.id.clone(), page.slug()] {
            if !is_route_segment(&route) {
                continue;
            }
            if !claimed.insert(route.clone()) {
                warn!(route = %route, page_id = %page, "route already taken, skipping");
                continue;
            }

            let route_dir = out_dir.join(&route);
            tokio::fs::create_dir_all(&route_dir)
                .await
                .with_context(|| format!("Failed to create {}", route_dir.display()))?;
            write_file(&route_dir.join("index.html"), &html).await?;
            report.routes_written += 1;
        }
    }

    report.assets_copied = copy_assets(&blog.config().static_dir, &out_dir.join("assets")).await?;

    info!(
        pages = report.pages,
        routes = report.routes_written,
        not_found = report.not_found,
        assets = report.assets_copied,
        "static export complete"
    );

    Ok(report)
}

// a single non-empty path segment, never "." or ".."
fn is_route_segment(route: &str) -> bool {
    !route.is_empty()
        && route != "."
        && route != ".."
        && !route.contains(['/', '\\'])
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

async fn copy_assets(static_dir: &Path, target: &Path) -> Result<usize> {
    if !static_dir.is_dir() {
        warn!(dir = %static_dir.display(), "static dir missing, no assets copied");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(static_dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(static_dir).unwrap_or(entry.path());
        let destination = target.join(relative);
        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        tokio::fs::copy(entry.path(), &destination)
            .await
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }

    Ok(copied)
}
