use serde::{Deserialize, Serialize};

use crate::error::{check_damping, RankError, Result};

/// Probability of following a link rather than teleporting
pub const DEFAULT_DAMPING: f64 = 0.85;
/// Number of surfer steps taken by the sampling estimator
pub const DEFAULT_SAMPLES: usize = 10_000;
/// Max per-page change at which iteration stops
pub const DEFAULT_THRESHOLD: f64 = 0.001;
/// Safety cap on fixed-point iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Parameters shared by both estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    pub damping: f64,
    pub samples: usize,
    pub threshold: f64,
    pub max_iterations: usize,
    /// Seed for the sampling estimator, `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RankConfig {
    pub fn new() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(RankError::InvalidSampleCount);
        }
        if self.threshold.is_nan() || self.threshold <= 0.0 {
            return Err(RankError::InvalidThreshold(self.threshold));
        }
        if self.max_iterations == 0 {
            return Err(RankError::InvalidIterationCap);
        }
        Ok(())
    }
}
