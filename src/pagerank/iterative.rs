use log2::{debug, warn};
use serde::Serialize;

use super::config::{DEFAULT_MAX_ITERATIONS, DEFAULT_THRESHOLD};
use super::RankVector;
use crate::error::{check_damping, RankError, Result};
use crate::graph::LinkGraph;

/// Stopping rule for the fixed-point iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationConfig {
    pub damping: f64,
    pub threshold: f64,
    pub max_iterations: usize,
}

impl IterationConfig {
    pub fn new(damping: f64) -> Self {
        Self {
            damping,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Converged rank vector together with how it got there
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Convergence {
    pub ranks: RankVector,
    pub iterations: usize,
    /// Max per-page change of the final update
    pub delta: f64,
}

/// Computes PageRank by fixed-point iteration with the default threshold and
/// iteration cap.
pub fn iterate_pagerank(graph: &LinkGraph, damping: f64) -> Result<RankVector> {
    iterate_pagerank_with(graph, &IterationConfig::new(damping)).map(|c| c.ranks)
}

/// Iterates [`step`] from the uniform vector until no page moves by
/// `threshold` or more.
///
/// Each step keeps total mass at 1 (teleport contributes `1 - d`, links and
/// dangling pages together hand on `d`), so the result needs no rescaling by
/// `N`. It is still divided by its own sum to absorb rounding.
pub fn iterate_pagerank_with(graph: &LinkGraph, config: &IterationConfig) -> Result<Convergence> {
    check_damping(config.damping)?;
    if config.threshold.is_nan() || config.threshold <= 0.0 {
        return Err(RankError::InvalidThreshold(config.threshold));
    }
    if config.max_iterations == 0 {
        return Err(RankError::InvalidIterationCap);
    }

    let n = graph.len() as f64;
    let mut ranks: RankVector = graph.pages().map(|p| (p.clone(), 1.0 / n)).collect();
    let mut delta = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        let next = step(graph, &ranks, config.damping);
        delta = max_delta(&ranks, &next);
        ranks = next;
        debug!("Iteration {}: max delta {:.6}", iteration, delta);

        if delta < config.threshold {
            return Ok(Convergence {
                ranks: normalize(ranks),
                iterations: iteration,
                delta,
            });
        }
    }

    warn!("No convergence within {} iterations", config.max_iterations);
    Err(RankError::NonConvergence {
        iterations: config.max_iterations,
        delta,
    })
}

/// One synchronous update of the recurrence
/// `rank(p) = (1 - d)/N + d * (sum over q -> p of rank(q)/outdeg(q) + sum over dangling q of rank(q)/N)`.
///
/// Pages missing from `ranks` count as holding no mass.
pub fn step(graph: &LinkGraph, ranks: &RankVector, damping: f64) -> RankVector {
    let n = graph.len() as f64;
    let rank_of = |page: &str| ranks.get(page).copied().unwrap_or(0.0);

    let dangling_mass: f64 = graph.dangling_pages().map(|p| rank_of(p.as_str())).sum();
    let base = (1.0 - damping) / n + damping * dangling_mass / n;

    let mut next: RankVector = graph.pages().map(|p| (p.clone(), base)).collect();
    for (page, targets) in graph.iter() {
        if targets.is_empty() {
            continue;
        }
        let share = damping * rank_of(page.as_str()) / targets.len() as f64;
        for target in targets {
            if let Some(rank) = next.get_mut(target) {
                *rank += share;
            }
        }
    }
    next
}

fn max_delta(previous: &RankVector, next: &RankVector) -> f64 {
    next.iter()
        .map(|(page, rank)| (rank - previous.get(page).copied().unwrap_or(0.0)).abs())
        .fold(0.0, f64::max)
}

fn normalize(ranks: RankVector) -> RankVector {
    let total: f64 = ranks.values().sum();
    if total <= 0.0 {
        return ranks;
    }
    ranks.into_iter().map(|(page, rank)| (page, rank / total)).collect()
}
