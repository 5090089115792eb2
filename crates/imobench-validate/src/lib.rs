//! Validation for IMO Bench rows.
//!
//! Checks are pure: they read a [`Row`](imobench_model::Row) and either
//! return `Ok(())` or the first [`ValidationError`] found. Nothing here
//! touches the filesystem.
//!
//! # Example
//!
//! ```
//! use imobench_model::{Dataset, Row};
//! use imobench_validate::validate_row;
//!
//! let row = Row::new();
//! let err = validate_row(Dataset::AnswerBench, &row).unwrap_err();
//! assert!(err.to_string().starts_with("Missing required fields"));
//! ```

mod counts;
mod error;
mod row;

pub use counts::{
    ANSWERBENCH_COUNT, CountBand, GRADINGBENCH_COUNT, PROOFBENCH_COUNT, check_count,
    check_dataset_counts,
};
pub use error::ValidationError;
pub use row::{
    MAX_POINTS, MIN_POINTS, PointsValue, read_points, validate_answerbench_row, validate_gradingbench_row,
    validate_proofbench_row, validate_row,
};
