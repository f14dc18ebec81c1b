pub mod config;
pub mod iterative;
pub mod sampling;
pub mod transition;

use log2::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::graph::{LinkGraph, Page};

pub use config::{RankConfig, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES, DEFAULT_THRESHOLD};
pub use iterative::{iterate_pagerank, iterate_pagerank_with, step, Convergence, IterationConfig};
pub use sampling::{sample_pagerank, sample_pagerank_with_rng};
pub use transition::{transition, TransitionDistribution};

/// PageRank mass per page, summing to 1 over the corpus
pub type RankVector = BTreeMap<Page, f64>;

/// Both estimators' results for one graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimates {
    pub config: RankConfig,
    pub sampled: RankVector,
    pub iterated: RankVector,
    pub iterations: usize,
}

/// Runs the sampling and iterative estimators independently over `graph`.
pub fn estimate(graph: &LinkGraph, config: &RankConfig) -> Result<Estimates> {
    config.validate()?;

    let sampled = match config.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            sample_pagerank_with_rng(graph, config.damping, config.samples, &mut rng)?
        }
        None => sample_pagerank(graph, config.damping, config.samples)?,
    };
    info!("Sampling finished after {} steps", config.samples);

    let iteration = IterationConfig::new(config.damping)
        .with_threshold(config.threshold)
        .with_max_iterations(config.max_iterations);
    let convergence = iterate_pagerank_with(graph, &iteration)?;
    info!(
        "Iteration converged after {} rounds (max delta {:.6})",
        convergence.iterations, convergence.delta
    );

    Ok(Estimates {
        config: config.clone(),
        sampled,
        iterated: convergence.ranks,
        iterations: convergence.iterations,
    })
}
