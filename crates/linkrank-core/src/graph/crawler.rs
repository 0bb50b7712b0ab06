//! Corpus crawling: turn a directory of HTML pages into a link graph

use super::link_extractor::extract_links;
use super::LinkGraph;
use crate::error::{LinkRankError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use walkdir::WalkDir;

/// Crawl options
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// File extension that marks a page (without the dot)
    pub extension: String,
    pub follow_symlinks: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            extension: "html".to_string(),
            follow_symlinks: true,
        }
    }
}

/// Crawl `root` with default options.
pub fn crawl(root: &Path) -> Result<LinkGraph> {
    crawl_with(root, &CrawlOptions::default())
}

/// Read every page directly inside `root` and build its link graph.
///
/// Pages are identified by file name, dot-files included. Links to pages
/// outside the corpus and links from a page to itself are dropped.
pub fn crawl_with(root: &Path, options: &CrawlOptions) -> Result<LinkGraph> {
    if !root.is_dir() {
        return Err(LinkRankError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("corpus directory not found: {}", root.display()),
        )));
    }

    let suffix = format!(".{}", options.extension);
    let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(options.follow_symlinks);

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(&suffix) {
            continue;
        }

        let content = std::fs::read_to_string(entry.path())?;
        let links = extract_links(&content);
        tracing::debug!("Crawled {} ({} raw links)", name, links.len());
        raw.insert(name, links);
    }

    if raw.is_empty() {
        return Err(LinkRankError::InvalidGraph(format!(
            "no .{} pages found in {}",
            options.extension,
            root.display()
        )));
    }

    let graph = LinkGraph::from_raw_links(raw)?;
    tracing::info!(
        "Crawled {} pages with {} links from {}",
        graph.len(),
        graph.edge_count(),
        root.display()
    );
    Ok(graph)
}
