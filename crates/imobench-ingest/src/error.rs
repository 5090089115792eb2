//! Error types for IMO Bench data loading.

use std::path::{Path, PathBuf};
use thiserror::Error;

use imobench_validate::ValidationError;

/// Errors that can occur while loading a dataset.
///
/// Variants fall into three kinds:
/// - **not found**: the data directory or a dataset file is absent
/// - **load**: I/O, CSV, or row-conversion failures (not-found is a subkind)
/// - **validation**: a row failed a semantic check
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    // === Not Found ===
    /// Data directory does not exist.
    #[error("data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Dataset file does not exist.
    #[error("dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    // === Load Errors ===
    /// Failed to open or read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (bad quoting, invalid UTF-8, I/O during parsing).
    #[error("failed to parse CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column needed to build the record is absent from the row.
    #[error("missing column '{column}' in {path} line {line}")]
    MissingColumn {
        path: PathBuf,
        line: u64,
        column: String,
    },

    /// A cell could not be converted to its typed form.
    #[error("invalid {field} value '{value}' in {path} line {line}")]
    InvalidField {
        path: PathBuf,
        line: u64,
        field: String,
        value: String,
    },

    // === Validation Errors ===
    /// A row failed validation.
    #[error("invalid row in {path} line {line}: {source}")]
    Validation {
        path: PathBuf,
        line: u64,
        #[source]
        source: ValidationError,
    },
}

impl IngestError {
    pub(crate) fn not_found_or_read(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    /// True when the data directory or a dataset file is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. } | Self::FileNotFound { .. }
        )
    }

    /// True for every non-validation failure, including not-found.
    pub fn is_load_error(&self) -> bool {
        !self.is_validation()
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The underlying validation failure, if this is one.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;
