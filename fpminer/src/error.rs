use std::path::PathBuf;

use thiserror::Error;

/// Threshold violations rejected before any tree is built.
///
/// An empty mining result is not an error: a threshold that no item meets
/// yields an empty [`FrequentItemsets`](crate::fp::FrequentItemsets).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MiningError {
    #[error("minimum support count must be at least 1, got {count}")]
    InvalidSupport { count: u64 },

    #[error("minimum support fraction must be in (0, 1], got {fraction}")]
    InvalidSupportFraction { fraction: f64 },

    #[error("minimum confidence must be in (0, 1], got {confidence}")]
    InvalidConfidence { confidence: f64 },
}

/// Failures raised by the transaction loaders and config readers.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input has no header row")]
    MissingHeader,

    #[error("column {column} not present in header")]
    MissingColumn { column: String },

    #[error("invalid transaction id {id:?} on record {record}")]
    InvalidTransactionId { id: String, record: usize },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type MiningResult<T> = Result<T, MiningError>;
pub type LoadResult<T> = Result<T, LoadError>;
