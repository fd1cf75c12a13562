use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
