//! Error types for dataset loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading a dataset directory.
#[derive(Error, Debug)]
pub enum DataError {
    /// A dataset file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row did not match the expected columns.
    #[error("malformed record in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;
