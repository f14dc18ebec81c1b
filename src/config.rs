use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pagerank::RankConfig;

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}
/// This struct receives all program arguments while RankConfig
/// describes only the estimators
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about = "Estimate PageRank over a directory of HTML pages", long_about = None)]
pub struct Config {
    /// Directory holding the corpus .html files
    pub corpus: PathBuf,
    /// Probability of following a link instead of jumping to a random page
    #[arg(short, long, default_value = "0.85")]
    pub damping: f64,
    /// Number of surfer steps for the sampling estimator
    #[arg(short = 'n', long, default_value = "10000")]
    pub samples: usize,
    /// Iteration stops once no page changes by this much
    #[arg(short, long, default_value = "0.001")]
    pub threshold: f64,
    /// Give up iterating after this many rounds
    #[arg(long, default_value = "10000")]
    pub max_iterations: usize,
    /// Seed for reproducible sampling
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Output file for a JSON report of both estimates
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            anyhow::bail!("damping must be within [0, 1]");
        }
        if self.samples == 0 {
            anyhow::bail!("samples must be greater than 0");
        }
        if self.threshold.is_nan() || self.threshold <= 0.0 {
            anyhow::bail!("threshold must be greater than 0");
        }
        if self.max_iterations == 0 {
            anyhow::bail!("max_iterations must be greater than 0");
        }
        Ok(())
    }

    pub fn rank_config(&self) -> RankConfig {
        let config = RankConfig::new()
            .with_damping(self.damping)
            .with_samples(self.samples)
            .with_threshold(self.threshold)
            .with_max_iterations(self.max_iterations);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}
