//! Convenience functions backed by a process-wide default loader.
//!
//! The default loader reads from [`default_data_dir`](crate::default_data_dir)
//! and is created on first use. A failed creation is not cached.

use std::sync::OnceLock;

use imobench_model::{AnswerProblem, GradingEntry, ProofProblem};

use crate::error::Result;
use crate::loader::{BenchLoader, GradingBenchIter};
use crate::query::{AnswerBenchQuery, GradingBenchQuery, ProofBenchQuery};

static DEFAULT_LOADER: OnceLock<BenchLoader> = OnceLock::new();

/// Returns the shared default loader, creating it if needed.
pub fn default_loader() -> Result<&'static BenchLoader> {
    get_or_try_init(&DEFAULT_LOADER, || BenchLoader::new(None))
}

/// Fills `cell` from `make` unless it is already set. An error leaves the
/// cell empty so the next call tries again.
fn get_or_try_init<'a>(
    cell: &'a OnceLock<BenchLoader>,
    make: impl FnOnce() -> Result<BenchLoader>,
) -> Result<&'a BenchLoader> {
    if let Some(loader) = cell.get() {
        return Ok(loader);
    }
    let loader = make()?;
    Ok(cell.get_or_init(|| loader))
}

/// See [`BenchLoader::load_answerbench`].
pub fn load_answerbench(query: &AnswerBenchQuery) -> Result<Vec<AnswerProblem>> {
    default_loader()?.load_answerbench(query)
}

/// See [`BenchLoader::load_proofbench`].
pub fn load_proofbench(query: &ProofBenchQuery) -> Result<Vec<ProofProblem>> {
    default_loader()?.load_proofbench(query)
}

/// See [`BenchLoader::load_gradingbench`].
pub fn load_gradingbench(query: &GradingBenchQuery) -> Result<Vec<GradingEntry>> {
    default_loader()?.load_gradingbench(query)
}

/// See [`BenchLoader::iter_gradingbench`].
pub fn iter_gradingbench(query: GradingBenchQuery) -> Result<GradingBenchIter> {
    default_loader()?.iter_gradingbench(query)
}
