//! Command implementations.
//!
//! Each command returns data; printing is left to `main`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use imobench_ingest::{
    AnswerBenchQuery, BenchLoader, GradingBenchQuery, ProofBenchQuery,
};
use imobench_model::{AnswerProblem, Dataset, GradingEntry, ProofProblem};
use imobench_validate::check_dataset_counts;

/// Record count for one dataset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetCount {
    pub dataset: Dataset,
    pub path: PathBuf,
    pub records: usize,
}

/// Loads all three datasets and counts their records.
///
/// The grading file is streamed rather than held in memory.
pub fn count_datasets(loader: &BenchLoader, validate: bool) -> Result<Vec<DatasetCount>> {
    let answers = loader
        .load_answerbench(&AnswerBenchQuery::default().with_validation(validate))
        .context("load answerbench")?
        .len();
    let proofs = loader
        .load_proofbench(&ProofBenchQuery::default().with_validation(validate))
        .context("load proofbench")?
        .len();
    let mut gradings = 0usize;
    for entry in loader
        .iter_gradingbench(GradingBenchQuery::default().with_validation(validate))
        .context("open gradingbench")?
    {
        entry.context("load gradingbench")?;
        gradings += 1;
    }

    let counts = [
        (Dataset::AnswerBench, answers),
        (Dataset::ProofBench, proofs),
        (Dataset::GradingBench, gradings),
    ]
    .into_iter()
    .map(|(dataset, records)| DatasetCount {
        dataset,
        path: loader.dataset_path(dataset),
        records,
    })
    .collect();
    info!(answers, proofs, gradings, "counted datasets");
    Ok(counts)
}

/// Checks counts against the expected dataset sizes.
pub fn check_counts(counts: &[DatasetCount]) -> Result<()> {
    let count_of = |dataset: Dataset| {
        counts
            .iter()
            .find(|count| count.dataset == dataset)
            .map_or(0, |count| count.records)
    };
    check_dataset_counts(
        count_of(Dataset::AnswerBench),
        count_of(Dataset::ProofBench),
        count_of(Dataset::GradingBench),
    )?;
    Ok(())
}

pub fn list_answers(
    loader: &BenchLoader,
    query: &AnswerBenchQuery,
    limit: Option<usize>,
) -> Result<Vec<AnswerProblem>> {
    let mut problems = loader
        .load_answerbench(query)
        .context("load answerbench")?;
    if let Some(limit) = limit {
        problems.truncate(limit);
    }
    Ok(problems)
}

pub fn list_proofs(
    loader: &BenchLoader,
    query: &ProofBenchQuery,
    limit: Option<usize>,
) -> Result<Vec<ProofProblem>> {
    let mut problems = loader.load_proofbench(query).context("load proofbench")?;
    if let Some(limit) = limit {
        problems.truncate(limit);
    }
    Ok(problems)
}

/// Lists grading entries, reading only as far as `limit` requires.
pub fn list_gradings(
    loader: &BenchLoader,
    query: GradingBenchQuery,
    limit: Option<usize>,
) -> Result<Vec<GradingEntry>> {
    let entries = loader
        .iter_gradingbench(query)
        .context("open gradingbench")?
        .take(limit.unwrap_or(usize::MAX))
        .collect::<imobench_ingest::Result<Vec<_>>>()
        .context("load gradingbench")?;
    Ok(entries)
}
