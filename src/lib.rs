pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod pagerank;
pub mod report;

pub use error::{RankError, Result};
pub use graph::{LinkGraph, Page};
pub use pagerank::{
    estimate, iterate_pagerank, sample_pagerank, sample_pagerank_with_rng, transition, Estimates,
    RankConfig, RankVector, TransitionDistribution,
};
