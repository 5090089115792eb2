//! Dataset loader.
//!
//! A [`BenchLoader`] resolves its data directory once, then each load call
//! streams the dataset file through validate, convert, and filter.

use std::ffi::OsString;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use imobench_model::{AnswerProblem, Dataset, GradingEntry, ProofProblem};
use imobench_validate::validate_row;

use crate::csv::{RowReader, SourceRow};
use crate::error::{IngestError, Result};
use crate::query::{AnswerBenchQuery, GradingBenchQuery, ProofBenchQuery, RecordQuery};
use crate::record::{BenchRecord, RowContext};

/// Environment variable for overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "IMOBENCH_DATA_DIR";

/// Get the default data directory.
///
/// Checks the `IMOBENCH_DATA_DIR` environment variable first,
/// then falls back to `imobench/` at the workspace root.
pub fn default_data_dir() -> PathBuf {
    resolve_data_dir(std::env::var_os(DATA_DIR_ENV_VAR))
}

fn resolve_data_dir(env_value: Option<OsString>) -> PathBuf {
    match env_value {
        Some(root) if !root.is_empty() => PathBuf::from(root),
        _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../imobench"),
    }
}

/// Loads the IMO Bench datasets from a directory.
///
/// # Example
///
/// ```no_run
/// use imobench_ingest::{AnswerBenchQuery, BenchLoader};
///
/// let loader = BenchLoader::new(None)?;
/// let algebra = loader.load_answerbench(&AnswerBenchQuery::default().with_category("Algebra"))?;
/// println!("{} algebra problems", algebra.len());
/// # Ok::<(), imobench_ingest::IngestError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BenchLoader {
    data_dir: PathBuf,
}

impl BenchLoader {
    /// Creates a loader for `data_dir`, or for [`default_data_dir`] if `None`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::DirectoryNotFound`] if the directory does not
    /// exist. This is checked once, here.
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = data_dir.map_or_else(default_data_dir, Path::to_path_buf);
        if !data_dir.is_dir() {
            return Err(IngestError::DirectoryNotFound { path: data_dir });
        }
        tracing::debug!(path = %data_dir.display(), "using data directory");
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of a dataset file.
    pub fn dataset_path(&self, dataset: Dataset) -> PathBuf {
        self.data_dir.join(dataset.file_name())
    }

    /// Loads every record of `R` that passes `query`, in file order.
    ///
    /// With validation on, the first invalid row aborts the load.
    pub fn load<R: BenchRecord>(&self, query: &R::Query) -> Result<Vec<R>> {
        let records = self.iter::<R>(query.clone())?.collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            dataset = %R::DATASET,
            records = records.len(),
            "loaded dataset"
        );
        Ok(records)
    }

    fn iter<R: BenchRecord>(&self, query: R::Query) -> Result<RecordIter<R>> {
        let path = self.dataset_path(R::DATASET);
        tracing::debug!(dataset = %R::DATASET, path = %path.display(), "opening dataset");
        let rows = RowReader::open(&path)?;
        tracing::trace!(columns = ?rows.headers(), "read header");
        Ok(RecordIter {
            rows,
            query,
            done: false,
            _record: PhantomData,
        })
    }

    /// Loads `answerbench.csv`.
    pub fn load_answerbench(&self, query: &AnswerBenchQuery) -> Result<Vec<AnswerProblem>> {
        self.load::<AnswerProblem>(query)
    }

    /// Loads `proofbench.csv`.
    pub fn load_proofbench(&self, query: &ProofBenchQuery) -> Result<Vec<ProofProblem>> {
        self.load::<ProofProblem>(query)
    }

    /// Loads all of `gradingbench.csv` into memory.
    ///
    /// With validation off, rows whose points cannot be parsed are skipped.
    pub fn load_gradingbench(&self, query: &GradingBenchQuery) -> Result<Vec<GradingEntry>> {
        self.load::<GradingEntry>(query)
    }

    /// Iterates `gradingbench.csv` one row at a time.
    ///
    /// The file is opened now and stays open until the iterator is exhausted
    /// or dropped. Errors surface at the offending row; records already
    /// yielded remain valid.
    pub fn iter_gradingbench(&self, query: GradingBenchQuery) -> Result<GradingBenchIter> {
        self.iter::<GradingEntry>(query)
    }
}

/// Single-pass iterator over the records of one dataset file.
///
/// Fused: after yielding an error it yields nothing more.
pub struct RecordIter<R: BenchRecord> {
    rows: RowReader,
    query: R::Query,
    done: bool,
    _record: PhantomData<R>,
}

/// Lazy iterator returned by [`BenchLoader::iter_gradingbench`].
pub type GradingBenchIter = RecordIter<GradingEntry>;

impl<R: BenchRecord> RecordIter<R> {
    /// Runs one row through validate, convert, and filter.
    fn process(&self, source: SourceRow) -> Result<Option<R>> {
        let SourceRow { line, row } = source;
        let path = self.rows.path();
        let strict = self.query.validate();

        if strict {
            validate_row(R::DATASET, &row).map_err(|e| IngestError::Validation {
                path: path.to_path_buf(),
                line,
                source: e,
            })?;
        }

        let ctx = RowContext { path, line, strict };
        let Some(record) = R::from_row(row, &ctx)? else {
            return Ok(None);
        };

        if !self.query.matches(&record) {
            return Ok(None);
        }
        tracing::trace!(line, "accepted row");
        Ok(Some(record))
    }
}

impl<R: BenchRecord> Iterator for RecordIter<R> {
    type Item = Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let processed = match self.rows.next() {
                Some(Ok(source)) => self.process(source),
                Some(Err(e)) => Err(e),
                None => {
                    self.done = true;
                    return None;
                }
            };
            match processed {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl<R: BenchRecord> FusedIterator for RecordIter<R> {}

impl<R: BenchRecord> std::fmt::Debug for RecordIter<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordIter")
            .field("dataset", &R::DATASET)
            .field("path", &self.rows.path())
            .field("done", &self.done)
            .finish()
    }
}
