use std::collections::BTreeMap;

use crate::error::{check_damping, RankError, Result};
use crate::graph::{LinkGraph, Page};

/// Probability of moving to each page from a given current page
pub type TransitionDistribution = BTreeMap<Page, f64>;

/// Where a random surfer on `page` goes next.
///
/// With probability `damping` the surfer follows one of the page's outbound
/// links chosen uniformly; with `1 - damping` it teleports to any page. A
/// dangling page spreads its `damping` share uniformly over the whole corpus,
/// the same rule [`super::iterative`] applies to dangling mass.
pub fn transition(graph: &LinkGraph, page: &str, damping: f64) -> Result<TransitionDistribution> {
    check_damping(damping)?;
    let links = graph
        .links(page)
        .ok_or_else(|| RankError::UnknownPage(page.to_string()))?;

    let n = graph.len() as f64;
    let teleport = (1.0 - damping) / n;

    let distribution = if links.is_empty() {
        let share = teleport + damping / n;
        graph.pages().map(|p| (p.clone(), share)).collect()
    } else {
        let follow = damping / links.len() as f64;
        graph
            .pages()
            .map(|p| {
                let linked = if links.contains(p) { follow } else { 0.0 };
                (p.clone(), teleport + linked)
            })
            .collect()
    };

    Ok(distribution)
}
