pub mod loader;
pub mod scrape;

#[cfg(test)]
mod tests;

pub use loader::{crawl, PAGE_EXTENSION};
pub use scrape::{extract_links, resolve_href};
