// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure kinds surfaced by the extraction pipeline and its collaborators.
///
/// Per-table and per-row problems are not errors: a table without a header
/// is skipped, a bad data row is dropped. Only an empty aggregate, a bad
/// argument, or a collaborator failure reaches the caller.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A path or argument was unusable before extraction began.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// All tables were processed and nothing extractable remained.
    #[error("no usable rows found in any table")]
    NoRecords,

    #[error("failed to read tables from {path}")]
    Ingestion {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },

    #[error("failed to write records to {path}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },
}

impl RosterError {
    pub fn ingestion(path: impl Into<PathBuf>, source: impl Into<BoxedSource>) -> Self {
        RosterError::Ingestion {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn serialization(path: impl Into<PathBuf>, source: impl Into<BoxedSource>) -> Self {
        RosterError::Serialization {
            path: path.into(),
            source: source.into(),
        }
    }
}
