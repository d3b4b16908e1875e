use std::path::PathBuf;

use thiserror::Error;

/// Input rejected at the boundary. Nothing is coerced; the caller decides
/// whether to ask again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Word cannot be null or empty.")]
    BlankWord,
    #[error("The URL provided is invalid.")]
    InvalidUrl,
    #[error("Guess cannot be null or empty.")]
    BlankGuess,
    #[error("No word pairs available.")]
    NoPairs,
    #[error("total guesses {total} does not match {correct} correct + {incorrect} incorrect")]
    InconsistentStatistics {
        correct: u64,
        incorrect: u64,
        total: u64,
    },
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed trainer data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid trainer data: {0}")]
    Invalid(#[source] ValidationError),
    #[error("failed to encode trainer data: {0}")]
    Encode(#[source] serde_json::Error),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }

    /// True when the stored record exists but cannot be used.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Invalid(_))
    }
}
