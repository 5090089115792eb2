//! Per-row semantic checks.
//!
//! Checks run in a fixed order and stop at the first failure:
//! presence, non-empty values, category, identifier prefix, then (grading
//! rows only) points and reward.

use std::collections::BTreeSet;

use imobench_model::{Category, Dataset, Reward, Row, columns};

use crate::error::ValidationError;

/// Lowest valid `Points` value.
pub const MIN_POINTS: i64 = 0;
/// Highest valid `Points` value.
pub const MAX_POINTS: i64 = 10;

/// How a `Points` cell reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointsValue {
    /// An integer within `MIN_POINTS..=MAX_POINTS`.
    Valid(i64),
    /// An integer outside the range, possibly too large for `i64`. Holds the
    /// number as it should be reported.
    OutOfRange(String),
    /// Not an optionally signed run of ASCII digits.
    NotInteger,
}

/// Reads a `Points` cell, ignoring surrounding whitespace.
pub fn read_points(value: &str) -> PointsValue {
    let text = value.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return PointsValue::NotInteger;
    }
    match text.parse::<i64>() {
        Ok(points) if (MIN_POINTS..=MAX_POINTS).contains(&points) => PointsValue::Valid(points),
        Ok(points) => PointsValue::OutOfRange(points.to_string()),
        Err(_) => PointsValue::OutOfRange(text.to_string()),
    }
}

/// Validates `row` against the schema and rules of `dataset`.
pub fn validate_row(dataset: Dataset, row: &Row) -> Result<(), ValidationError> {
    check_presence(dataset, row)?;
    check_non_empty(dataset, row)?;
    if dataset.has_category() {
        check_category(row)?;
    }
    check_id_prefix(dataset, row)?;
    if dataset == Dataset::GradingBench {
        check_points(row)?;
        check_reward(row);
    }
    Ok(())
}

/// Validates a row from `answerbench.csv`.
pub fn validate_answerbench_row(row: &Row) -> Result<(), ValidationError> {
    validate_row(Dataset::AnswerBench, row)
}

/// Validates a row from `proofbench.csv`. `Short Answer` may be blank.
pub fn validate_proofbench_row(row: &Row) -> Result<(), ValidationError> {
    validate_row(Dataset::ProofBench, row)
}

/// Validates a row from `gradingbench.csv`.
pub fn validate_gradingbench_row(row: &Row) -> Result<(), ValidationError> {
    validate_row(Dataset::GradingBench, row)
}

fn check_presence(dataset: Dataset, row: &Row) -> Result<(), ValidationError> {
    let required: BTreeSet<&str> = dataset.required_columns().iter().copied().collect();
    let present: BTreeSet<&str> = row.keys().map(String::as_str).collect();
    let missing: Vec<String> = required
        .difference(&present)
        .map(|field| (*field).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { fields: missing })
    }
}

fn check_non_empty(dataset: Dataset, row: &Row) -> Result<(), ValidationError> {
    let nullable = dataset.nullable_columns();
    for field in dataset.required_columns() {
        if nullable.contains(field) {
            continue;
        }
        if field_value(row, field).trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: (*field).to_string(),
            });
        }
    }
    Ok(())
}

fn check_category(row: &Row) -> Result<(), ValidationError> {
    let value = field_value(row, columns::CATEGORY);
    match value.parse::<Category>() {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::InvalidCategory {
            value: value.to_string(),
        }),
    }
}

fn check_id_prefix(dataset: Dataset, row: &Row) -> Result<(), ValidationError> {
    let value = field_value(row, dataset.id_column());
    if value.starts_with(dataset.id_prefix()) {
        return Ok(());
    }
    Err(ValidationError::InvalidIdFormat {
        field: dataset.id_column().to_string(),
        value: value.to_string(),
        prefix: dataset.id_prefix().to_string(),
    })
}

fn check_points(row: &Row) -> Result<(), ValidationError> {
    let value = field_value(row, columns::POINTS);
    match read_points(value) {
        PointsValue::Valid(_) => Ok(()),
        PointsValue::OutOfRange(points) => Err(ValidationError::PointsOutOfRange { points }),
        PointsValue::NotInteger => Err(ValidationError::PointsNotInteger {
            value: value.to_string(),
        }),
    }
}

/// `Reward` is open-ended: only emptiness is an error, and that is caught by
/// the non-empty check.
fn check_reward(row: &Row) {
    let value = field_value(row, columns::REWARD).trim();
    if value.parse::<Reward>().is_err() {
        tracing::debug!(reward = value, "accepting non-canonical reward value");
    }
}

/// Presence has been checked before any caller reaches this.
fn field_value<'a>(row: &'a Row, field: &str) -> &'a str {
    row.get(field).map(String::as_str).unwrap_or_default()
}
