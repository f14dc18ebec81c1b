use std::collections::HashSet;
use std::fs;
use url::Url;
use super::*;

fn base() -> Url {
    Url::parse("file:///corpus/").unwrap()
}

fn pages(names: &[&str]) -> HashSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

// tests for resolve_href start here
#[test]
fn test_plain_file_name() {
    assert_eq!(resolve_href("2.html", &base()), Some("2.html".to_string()));
}

#[test]
fn test_dot_slash_prefix() {
    assert_eq!(resolve_href("./2.html", &base()), Some("2.html".to_string()));
}

///Checks if sections and queries are removed
#[test]
fn test_fragment_and_query_dropped() {
    assert_eq!(resolve_href("2.html#history", &base()), Some("2.html".to_string()));
    assert_eq!(resolve_href("2.html?tab=1", &base()), Some("2.html".to_string()));
}

#[test]
fn test_trailing_slash() {
    assert_eq!(resolve_href("2.html/", &base()), resolve_href("2.html", &base()));
}

#[test]
fn test_foreign_scheme_skipped() {
    assert_eq!(resolve_href("https://example.com/2.html", &base()), None);
    assert_eq!(resolve_href("mailto:someone@example.com", &base()), None);
}

#[test]
fn test_leaving_directory_skipped() {
    assert_eq!(resolve_href("../2.html", &base()), None);
    assert_eq!(resolve_href("nested/2.html", &base()), None);
}

#[test]
fn test_percent_encoded_name() {
    assert_eq!(resolve_href("my%20page.html", &base()), Some("my page.html".to_string()));
}
// tests for resolve_href end here

// tests for extract_links start here
#[test]
fn test_extract_links_empty_page() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(extract_links("", &base())?, HashSet::new());
    Ok(())
}

#[test]
fn test_extract_links() -> Result<(), Box<dyn std::error::Error>> {
    let html = r#"
        <html>
            <body>
                <a href="1.html">One</a>
                <a class="nav" href="2.html">Two</a>
                <a href="2.html#again">Two again</a>
                <a>No href</a>
                <a href="https://example.com">External</a>
            </body>
        </html>
    "#;
    assert_eq!(extract_links(html, &base())?, pages(&["1.html", "2.html"]));
    Ok(())
}
// tests for extract_links end here

// tests for crawl start here
#[test]
fn test_crawl_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("1.html"), r#"<a href="2.html">2</a><a href="1.html">me</a>"#)?;
    fs::write(dir.path().join("2.html"), r#"<a href="1.html">1</a><a href="3.html">3</a><a href="missing.html">x</a>"#)?;
    fs::write(dir.path().join("3.html"), "<p>no links</p>")?;
    fs::write(dir.path().join("notes.txt"), r#"<a href="1.html">ignored</a>"#)?;

    let graph = crawl(dir.path())?;
    assert_eq!(graph.len(), 3);
    assert!(!graph.contains("notes.txt"));
    assert_eq!(graph.links("1.html").unwrap().iter().collect::<Vec<_>>(), vec!["2.html"]);
    assert_eq!(graph.links("2.html").unwrap().iter().collect::<Vec<_>>(), vec!["1.html", "3.html"]);
    assert!(graph.is_dangling("3.html"));
    Ok(())
}

#[test]
fn test_crawl_empty_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let err = crawl(dir.path()).unwrap_err();
    let root = err.downcast_ref::<crate::error::RankError>();
    assert_eq!(root, Some(&crate::error::RankError::EmptyCorpus));
    Ok(())
}

#[test]
fn test_crawl_missing_directory() {
    let result = crawl(std::path::Path::new("/definitely/not/a/corpus"));
    assert!(result.is_err());
}
// tests for crawl end here
