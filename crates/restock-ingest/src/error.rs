//! Error types for report ingestion.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File bytes are not UTF-8 (e.g. a Windows-1254 export).
    #[error("{path} is not UTF-8 (invalid byte at offset {offset}); re-save it as UTF-8")]
    Encoding { path: PathBuf, offset: usize },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Required report columns are absent.
    #[error("missing columns: {}; columns found: {}", missing.join(", "), found.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    /// Failed to render the upload template.
    #[error("failed to write template: {message}")]
    Template { message: String },

    /// DataFrame operation error.
    #[error("DataFrame error: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_both_sides() {
        let err = IngestError::MissingColumns {
            missing: vec!["Envanter".to_string()],
            found: vec!["MağazaAdı".to_string(), "NetMiktar".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "missing columns: Envanter; columns found: MağazaAdı, NetMiktar"
        );
    }

    #[test]
    fn polars_errors_convert() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("Beden".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
