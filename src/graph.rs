use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::error::{RankError, Result};

/// Identifier of one document in the corpus
pub type Page = String;

/// Validated, immutable mapping from each page to the pages it links to.
///
/// Keys are exactly the corpus pages. Every link target is itself a key and no
/// page links to itself. Pages are kept sorted so iteration order (and therefore
/// every estimator's output) is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkGraph {
    links: BTreeMap<Page, BTreeSet<Page>>,
}

impl LinkGraph {
    pub fn new(links: BTreeMap<Page, BTreeSet<Page>>) -> Result<Self> {
        if links.is_empty() {
            return Err(RankError::EmptyCorpus);
        }
        for (page, targets) in &links {
            for target in targets {
                if target == page {
                    return Err(RankError::SelfLink { page: page.clone() });
                }
                if !links.contains_key(target) {
                    return Err(RankError::UnknownLink {
                        page: page.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(Self { links })
    }

    /// Builds a graph from `(page, [targets])` pairs.
    pub fn from_edges<P, I, T>(edges: I) -> Result<Self>
    where
        P: Into<Page>,
        T: Into<Page>,
        I: IntoIterator<Item = (P, Vec<T>)>,
    {
        let links = edges
            .into_iter()
            .map(|(page, targets)| {
                (page.into(), targets.into_iter().map(Into::into).collect())
            })
            .collect();
        Self::new(links)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Pages in sorted order
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.links.keys()
    }

    /// Outbound links of `page`, `None` when the page is not in the corpus
    pub fn links(&self, page: &str) -> Option<&BTreeSet<Page>> {
        self.links.get(page)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Page, &BTreeSet<Page>)> {
        self.links.iter()
    }

    pub fn outdegree(&self, page: &str) -> Option<usize> {
        self.links.get(page).map(BTreeSet::len)
    }

    pub fn is_dangling(&self, page: &str) -> bool {
        self.links.get(page).is_some_and(BTreeSet::is_empty)
    }

    pub fn dangling_pages(&self) -> impl Iterator<Item = &Page> {
        self.links
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(page, _)| page)
    }

    pub fn edge_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }
}

impl TryFrom<HashMap<Page, HashSet<Page>>> for LinkGraph {
    type Error = RankError;

    fn try_from(value: HashMap<Page, HashSet<Page>>) -> Result<Self> {
        let links = value
            .into_iter()
            .map(|(page, targets)| (page, targets.into_iter().collect()))
            .collect();
        Self::new(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> LinkGraph {
        LinkGraph::from_edges([("A", vec!["B", "C"]), ("B", vec![]), ("C", vec!["A"])]).unwrap()
    }

    #[test]
    fn test_pages_are_sorted() {
        let graph = LinkGraph::from_edges([("c", vec!["a"]), ("a", vec![]), ("b", vec!["c"])]).unwrap();
        let pages: Vec<&str> = graph.pages().map(String::as_str).collect();
        assert_eq!(pages, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_degrees_and_dangling() {
        let graph = sample_graph();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.outdegree("A"), Some(2));
        assert_eq!(graph.outdegree("B"), Some(0));
        assert_eq!(graph.outdegree("Z"), None);
        assert!(graph.is_dangling("B"));
        assert!(!graph.is_dangling("A"));
        assert!(!graph.is_dangling("Z"));
        assert_eq!(graph.dangling_pages().collect::<Vec<_>>(), vec!["B"]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let result = LinkGraph::new(BTreeMap::new());
        assert_eq!(result, Err(RankError::EmptyCorpus));
    }

    #[test]
    fn test_self_link_rejected() {
        let result = LinkGraph::from_edges([("A", vec!["A"])]);
        assert_eq!(result, Err(RankError::SelfLink { page: "A".into() }));
    }

    #[test]
    fn test_link_outside_corpus_rejected() {
        let result = LinkGraph::from_edges([("A", vec!["B"])]);
        assert_eq!(
            result,
            Err(RankError::UnknownLink { page: "A".into(), target: "B".into() })
        );
    }

    #[test]
    fn test_try_from_hash_map() {
        let map = HashMap::from([
            ("A".to_string(), HashSet::from(["B".to_string()])),
            ("B".to_string(), HashSet::new()),
        ]);
        let graph = LinkGraph::try_from(map).unwrap();
        assert!(graph.contains("A"));
        assert_eq!(graph.links("A").unwrap().len(), 1);
    }
}
