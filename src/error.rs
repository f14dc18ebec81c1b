use thiserror::Error;

/// Errors raised while validating a corpus or computing ranks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    /// Corpus has no pages
    #[error("corpus contains no pages")]
    EmptyCorpus,

    #[error("page {page} links to itself")]
    SelfLink { page: String },

    /// A link points outside the corpus
    #[error("page {page} links to {target}, which is not in the corpus")]
    UnknownLink { page: String, target: String },

    #[error("page {0} is not in the corpus")]
    UnknownPage(String),

    #[error("damping factor must be within [0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("sample count must be greater than 0")]
    InvalidSampleCount,

    #[error("convergence threshold must be a positive number, got {0}")]
    InvalidThreshold(f64),

    #[error("iteration cap must be greater than 0")]
    InvalidIterationCap,

    #[error("transition weights cannot be sampled: {0}")]
    InvalidWeights(#[from] rand::distributions::WeightedError),

    /// Iteration hit its cap before the per-page change dropped below the threshold
    #[error("no convergence after {iterations} iterations (last max delta {delta})")]
    NonConvergence { iterations: usize, delta: f64 },
}

pub type Result<T> = std::result::Result<T, RankError>;

/// Rejects damping factors outside [0, 1] (NaN included).
pub fn check_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(RankError::InvalidDamping(damping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_damping_bounds() {
        assert!(check_damping(0.0).is_ok());
        assert!(check_damping(1.0).is_ok());
        assert!(check_damping(0.85).is_ok());
        assert_eq!(check_damping(-0.1), Err(RankError::InvalidDamping(-0.1)));
        assert_eq!(check_damping(1.5), Err(RankError::InvalidDamping(1.5)));
        assert!(check_damping(f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages_name_the_page() {
        let err = RankError::UnknownLink { page: "1.html".into(), target: "9.html".into() };
        assert_eq!(err.to_string(), "page 1.html links to 9.html, which is not in the corpus");
        let err = RankError::SelfLink { page: "2.html".into() };
        assert!(err.to_string().contains("2.html"));
    }
}
