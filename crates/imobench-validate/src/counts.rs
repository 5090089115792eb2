//! Dataset-size sanity check.
//!
//! Optional post-load check; the loader never runs it on its own.

use std::ops::RangeInclusive;

use imobench_model::Dataset;

use crate::error::ValidationError;

/// Expected record-count band for one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountBand {
    pub dataset: Dataset,
    pub range: RangeInclusive<usize>,
}

/// About 400 problems.
pub const ANSWERBENCH_COUNT: CountBand = CountBand {
    dataset: Dataset::AnswerBench,
    range: 390..=410,
};

/// About 60 problems.
pub const PROOFBENCH_COUNT: CountBand = CountBand {
    dataset: Dataset::ProofBench,
    range: 55..=65,
};

/// At least the 1000 published gradings, up to the full release.
pub const GRADINGBENCH_COUNT: CountBand = CountBand {
    dataset: Dataset::GradingBench,
    range: 900..=200_000,
};

/// Checks a single count against its band.
pub fn check_count(band: &CountBand, count: usize) -> Result<(), ValidationError> {
    if band.range.contains(&count) {
        return Ok(());
    }
    Err(ValidationError::UnexpectedCount {
        dataset: band.dataset,
        count,
        min: *band.range.start(),
        max: *band.range.end(),
    })
}

/// Checks all three dataset counts, reporting the first one out of band.
pub fn check_dataset_counts(
    answerbench_count: usize,
    proofbench_count: usize,
    gradingbench_count: usize,
) -> Result<(), ValidationError> {
    check_count(&ANSWERBENCH_COUNT, answerbench_count)?;
    check_count(&PROOFBENCH_COUNT, proofbench_count)?;
    check_count(&GRADINGBENCH_COUNT, gradingbench_count)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_within_bands() {
        assert!(check_dataset_counts(400, 60, 1000).is_ok());
        assert!(check_dataset_counts(390, 55, 900).is_ok());
        assert!(check_dataset_counts(410, 65, 200_000).is_ok());
    }

    #[test]
    fn test_count_names_dataset_and_band() {
        let err = check_dataset_counts(400, 60, 899).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnexpectedCount {
                dataset: Dataset::GradingBench,
                count: 899,
                min: 900,
                max: 200_000,
            }
        );
    }

    #[test]
    fn test_first_violation_wins() {
        let err = check_dataset_counts(0, 0, 0).unwrap_err();
        assert!(err.to_string().contains("answerbench"));
    }
}
