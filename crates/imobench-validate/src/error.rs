//! Validation error type.

use thiserror::Error;

use imobench_model::{Category, Dataset};

/// A row or dataset failed a semantic check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// One or more required columns are absent. Names are sorted.
    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// A required value is blank after trimming.
    #[error("Empty value for required field: {field}")]
    EmptyField { field: String },

    /// `Category` is outside the closed set.
    #[error("Invalid category: {value}. Must be one of: {}", valid_categories())]
    InvalidCategory { value: String },

    /// Identifier does not carry the dataset's prefix.
    #[error("Invalid {field} format: {value}. Should start with '{prefix}'")]
    InvalidIdFormat {
        field: String,
        value: String,
        prefix: String,
    },

    /// `Points` does not parse as an integer.
    #[error("Points must be an integer, got: {value}")]
    PointsNotInteger { value: String },

    /// `Points` is an integer outside 0..=10. `points` is its decimal text,
    /// since it may not fit any integer type.
    #[error("Points must be between 0 and 10, got: {points}")]
    PointsOutOfRange { points: String },

    /// A dataset's record count is outside its expected band.
    #[error("Unexpected {dataset} count: {count} (expected {min}..={max})")]
    UnexpectedCount {
        dataset: Dataset,
        count: usize,
        min: usize,
        max: usize,
    },
}

fn valid_categories() -> String {
    Category::ALL
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
