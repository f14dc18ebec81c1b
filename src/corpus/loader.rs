use anyhow::{anyhow, Context, Result};
use log2::{debug, info, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use url::Url;

use super::scrape::extract_links;
use crate::graph::{LinkGraph, Page};

/// Only files with this extension are pages
pub const PAGE_EXTENSION: &str = "html";

/// Reads every `.html` file directly inside `directory` and builds the link
/// graph between them.
///
/// Links to files outside the corpus and links from a page to itself are dropped.
pub fn crawl(directory: &Path) -> Result<LinkGraph> {
    let directory = directory
        .canonicalize()
        .with_context(|| format!("Cannot open corpus directory {}", directory.display()))?;
    let base = Url::from_directory_path(&directory)
        .map_err(|_| anyhow!("Corpus path {} is not absolute", directory.display()))?;

    let mut raw: BTreeMap<Page, BTreeSet<Page>> = BTreeMap::new();
    for entry in fs::read_dir(&directory)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(PAGE_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!("Skipping page with non UTF-8 name: {}", path.display());
            continue;
        };

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read page {}", path.display()))?;
        let mut links: BTreeSet<Page> = extract_links(&contents, &base)?.into_iter().collect();
        links.remove(name);
        debug!("Page {} links to {} pages", name, links.len());
        raw.insert(name.to_string(), links);
    }

    let pages: BTreeSet<Page> = raw.keys().cloned().collect();
    let links = raw
        .into_iter()
        .map(|(page, targets)| {
            let kept = targets.into_iter().filter(|t| pages.contains(t)).collect();
            (page, kept)
        })
        .collect();

    let graph = LinkGraph::new(links)
        .with_context(|| format!("Invalid corpus {}", directory.display()))?;
    info!("Loaded {} pages with {} links from {}", graph.len(), graph.edge_count(), directory.display());
    Ok(graph)
}
