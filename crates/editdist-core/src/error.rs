use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around the distance computation. The distance functions
/// themselves are total and never return one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{label} is {chars} characters long, limit is {limit}")]
    InputTooLong {
        label: String,
        chars: usize,
        limit: usize,
    },

    #[error("distance matrix would have {cells} cells, limit is {limit}")]
    MatrixTooLarge { cells: u128, limit: usize },

    #[error("line {line}: expected two fields separated by a tab")]
    MalformedPair { line: usize },

    #[error("cannot read config at {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("cannot start worker pool: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, Error>;
