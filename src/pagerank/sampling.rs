use log2::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::BTreeMap;

use super::transition::transition;
use super::RankVector;
use crate::error::{check_damping, RankError, Result};
use crate::graph::{LinkGraph, Page};

/// Estimates PageRank by simulating `n` steps of a random surfer, drawing from
/// the thread-local RNG.
pub fn sample_pagerank(graph: &LinkGraph, damping: f64, n: usize) -> Result<RankVector> {
    sample_pagerank_with_rng(graph, damping, n, &mut rand::thread_rng())
}

/// Same as [`sample_pagerank`] with a caller-supplied random source, so seeded
/// runs are reproducible.
///
/// The walk starts on a uniformly chosen page. Each step draws the next page
/// from [`transition`] of the current one and counts the visit; rank is the
/// share of the `n` visits a page received, so the vector sums to 1.
pub fn sample_pagerank_with_rng<R: Rng + ?Sized>(
    graph: &LinkGraph,
    damping: f64,
    n: usize,
    rng: &mut R,
) -> Result<RankVector> {
    check_damping(damping)?;
    if n == 0 {
        return Err(RankError::InvalidSampleCount);
    }

    let pages: Vec<&Page> = graph.pages().collect();
    let mut visits: BTreeMap<&Page, usize> = pages.iter().map(|p| (*p, 0)).collect();

    let mut current: &Page = graph.pages().choose(rng).ok_or(RankError::EmptyCorpus)?;
    debug!("Sampling {} steps starting from {}", n, current);

    for _ in 0..n {
        let distribution = transition(graph, current, damping)?;
        // distribution and `pages` share the graph's sorted key order
        let weights = WeightedIndex::new(distribution.values().copied())?;
        current = pages[weights.sample(rng)];
        if let Some(count) = visits.get_mut(current) {
            *count += 1;
        }
    }

    let n = n as f64;
    Ok(visits
        .into_iter()
        .map(|(page, count)| (page.clone(), count as f64 / n))
        .collect())
}
