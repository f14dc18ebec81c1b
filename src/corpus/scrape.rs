use anyhow::{anyhow, Result};
use log2::{debug, trace};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

use crate::graph::Page;

/// Resolves `href` against the corpus directory `base` (a `file://` URL ending
/// in `/`) and returns the file name it points to.
///
/// Fragments, queries and trailing slashes are ignored. Links with another
/// scheme or leading out of the directory resolve to `None`.
pub fn resolve_href(href: &str, base: &Url) -> Option<Page> {
    let mut url = base.join(href.trim()).ok()?;
    if url.scheme() != "file" {
        return None;
    }
    url.set_fragment(None);
    url.set_query(None);

    let path = url.to_file_path().ok()?;
    let directory = base.to_file_path().ok()?;
    if path.parent()? != directory.as_path() {
        return None;
    }
    path.file_name()?.to_str().map(str::to_string)
}

/// Collects the pages linked from `html` through `<a href>` elements.
pub fn extract_links(html: &str, base: &Url) -> Result<HashSet<Page>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a")
        .map_err(|e| anyhow!("Failed to parse <a> selector: {}", e))?;

    let mut found = HashSet::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            match resolve_href(href, base) {
                Some(page) => {
                    found.insert(page);
                }
                None => trace!("Skipped link leaving the corpus: {}", href),
            }
        }
    }

    debug!("Found {} links", found.len());
    Ok(found)
}
