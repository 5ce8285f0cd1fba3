use std::path::PathBuf;
use thiserror::Error;

/// Startup failures. None of these are recoverable: the dashboard cannot run
/// without its three source tables.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("listing store error: {0}")]
    Store(#[from] rusqlite::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}
