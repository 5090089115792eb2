//! Row-to-record conversion.
//!
//! Each record type knows which dataset it comes from, which query filters
//! it, and how to build itself from a row.

use std::path::Path;

use imobench_model::{AnswerProblem, Dataset, GradingEntry, ProofProblem, Row, columns};
use imobench_validate::{PointsValue, read_points};

use crate::error::{IngestError, Result};
use crate::query::{AnswerBenchQuery, GradingBenchQuery, ProofBenchQuery, RecordQuery};

/// Where a row came from, for error messages.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub path: &'a Path,
    pub line: u64,
    /// Strict rows raise on unreadable cells instead of being skipped.
    pub strict: bool,
}

impl RowContext<'_> {
    /// Moves a column's value out of the row.
    fn take(&self, row: &mut Row, column: &str) -> Result<String> {
        row.remove(column).ok_or_else(|| missing(self, column))
    }

    fn invalid(&self, field: &str, value: &str) -> IngestError {
        IngestError::InvalidField {
            path: self.path.to_path_buf(),
            line: self.line,
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// A record type loadable from one of the dataset files.
pub trait BenchRecord: Sized {
    /// Dataset this record is read from.
    const DATASET: Dataset;

    /// Filters and options accepted when loading this record type.
    type Query: RecordQuery<Self> + Clone;

    /// Builds a record from `row`.
    ///
    /// Returns `Ok(None)` when a non-strict row is unreadable and should be
    /// skipped.
    fn from_row(row: Row, ctx: &RowContext<'_>) -> Result<Option<Self>>;
}

impl BenchRecord for AnswerProblem {
    const DATASET: Dataset = Dataset::AnswerBench;
    type Query = AnswerBenchQuery;

    fn from_row(mut row: Row, ctx: &RowContext<'_>) -> Result<Option<Self>> {
        Ok(Some(AnswerProblem {
            problem_id: ctx.take(&mut row, columns::PROBLEM_ID)?,
            problem: ctx.take(&mut row, columns::PROBLEM)?,
            short_answer: ctx.take(&mut row, columns::SHORT_ANSWER)?,
            category: ctx.take(&mut row, columns::CATEGORY)?,
            subcategory: ctx.take(&mut row, columns::SUBCATEGORY)?,
            source: ctx.take(&mut row, columns::SOURCE)?,
        }))
    }
}

impl BenchRecord for ProofProblem {
    const DATASET: Dataset = Dataset::ProofBench;
    type Query = ProofBenchQuery;

    fn from_row(mut row: Row, ctx: &RowContext<'_>) -> Result<Option<Self>> {
        Ok(Some(ProofProblem {
            problem_id: ctx.take(&mut row, columns::PROBLEM_ID)?,
            problem: ctx.take(&mut row, columns::PROBLEM)?,
            solution: ctx.take(&mut row, columns::SOLUTION)?,
            grading_guidelines: ctx.take(&mut row, columns::GRADING_GUIDELINES)?,
            category: ctx.take(&mut row, columns::CATEGORY)?,
            level: ctx.take(&mut row, columns::LEVEL)?,
            short_answer: ctx.take(&mut row, columns::SHORT_ANSWER)?,
            source: ctx.take(&mut row, columns::SOURCE)?,
        }))
    }
}

impl BenchRecord for GradingEntry {
    const DATASET: Dataset = Dataset::GradingBench;
    type Query = GradingBenchQuery;

    /// Rows whose `Points` or `Reward` cannot be read are skipped unless
    /// strict; any other missing column is an error either way.
    fn from_row(mut row: Row, ctx: &RowContext<'_>) -> Result<Option<Self>> {
        let Some((points, reward)) = read_scores(&mut row, ctx)? else {
            return Ok(None);
        };

        Ok(Some(GradingEntry {
            grading_id: ctx.take(&mut row, columns::GRADING_ID)?,
            problem_id: ctx.take(&mut row, columns::PROBLEM_ID)?,
            problem: ctx.take(&mut row, columns::PROBLEM)?,
            solution: ctx.take(&mut row, columns::SOLUTION)?,
            grading_guidelines: ctx.take(&mut row, columns::GRADING_GUIDELINES)?,
            response: ctx.take(&mut row, columns::RESPONSE)?,
            points,
            reward,
            problem_source: ctx.take(&mut row, columns::PROBLEM_SOURCE)?,
        }))
    }
}

/// Points outside `0..=10` count as unreadable, so tolerant loads drop them
/// the same way as non-integers.
fn read_scores(row: &mut Row, ctx: &RowContext<'_>) -> Result<Option<(i64, String)>> {
    let points = match row.get(columns::POINTS) {
        Some(value) => match read_points(value) {
            PointsValue::Valid(points) => points,
            PointsValue::OutOfRange(_) | PointsValue::NotInteger => {
                return skip_or_fail(ctx, columns::POINTS, Some(value));
            }
        },
        None => return skip_or_fail(ctx, columns::POINTS, None),
    };
    let reward = match row.remove(columns::REWARD) {
        Some(value) => value.trim().to_string(),
        None => return skip_or_fail(ctx, columns::REWARD, None),
    };
    Ok(Some((points, reward)))
}

fn missing(ctx: &RowContext<'_>, column: &str) -> IngestError {
    IngestError::MissingColumn {
        path: ctx.path.to_path_buf(),
        line: ctx.line,
        column: column.to_string(),
    }
}

/// `value` is `None` when the column is absent.
fn skip_or_fail<T>(ctx: &RowContext<'_>, field: &str, value: Option<&str>) -> Result<Option<T>> {
    if ctx.strict {
        return Err(match value {
            Some(value) => ctx.invalid(field, value),
            None => missing(ctx, field),
        });
    }
    tracing::debug!(line = ctx.line, field, value, "skipping unreadable row");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(strict: bool) -> RowContext<'static> {
        RowContext {
            path: Path::new("gradingbench.csv"),
            line: 2,
            strict,
        }
    }

    fn grading_row(points: &str) -> Row {
        [
            ("Grading ID", "GB-0001"),
            ("Problem ID", "PB-Basic-001"),
            ("Problem", "p"),
            ("Solution", "s"),
            ("Grading guidelines", "g"),
            ("Response", "r"),
            ("Points", points),
            ("Reward", " Correct "),
            ("Problem Source", "src"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_grading_entry_trims_reward_only() {
        let entry = GradingEntry::from_row(grading_row(" 7"), &ctx(true))
            .unwrap()
            .unwrap();
        assert_eq!(entry.points, 7);
        assert_eq!(entry.reward, "Correct");
        assert_eq!(entry.problem_source, "src");
    }

    #[test]
    fn test_bad_points_strict_is_invalid_field() {
        let err = GradingEntry::from_row(grading_row("n/a"), &ctx(true)).unwrap_err();
        assert!(matches!(err, IngestError::InvalidField { ref field, .. } if field == "Points"));
    }

    #[test]
    fn test_bad_points_tolerant_is_skipped() {
        let entry = GradingEntry::from_row(grading_row("n/a"), &ctx(false)).unwrap();
        assert!(entry.is_none());
    }

    #[test]
    fn test_out_of_range_points_tolerant_is_skipped() {
        for points in ["15", "-1", "99999999999999999999"] {
            let entry = GradingEntry::from_row(grading_row(points), &ctx(false)).unwrap();
            assert!(entry.is_none(), "points {points} should be skipped");
        }
    }

    #[test]
    fn test_out_of_range_points_strict_is_invalid_field() {
        let err = GradingEntry::from_row(grading_row("15"), &ctx(true)).unwrap_err();
        assert!(
            matches!(err, IngestError::InvalidField { ref field, ref value, .. } if field == "Points" && value == "15")
        );
    }

    #[test]
    fn test_missing_column_errors_even_when_tolerant() {
        let mut row = grading_row("3");
        row.remove("Response");
        let err = GradingEntry::from_row(row, &ctx(false)).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "Response"));
    }

    #[test]
    fn test_answer_problem_missing_column() {
        let row: Row = [("Problem ID", "imo-bench-a-1")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let err = AnswerProblem::from_row(row, &ctx(false)).unwrap_err();
        assert!(err.is_load_error());
    }
}
