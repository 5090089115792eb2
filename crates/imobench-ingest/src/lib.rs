//! IMO Bench data loading.
//!
//! This crate reads the three IMO Bench CSV files, validates each row, and
//! returns typed records in file order.
//!
//! # Features
//!
//! - **Eager loading**: `load_answerbench`, `load_proofbench`, `load_gradingbench`
//! - **Lazy iteration**: `iter_gradingbench` streams the large grading file
//! - **Filtering**: per-dataset query structs, combined as a logical AND
//! - **Tolerant mode**: with validation off, grading rows with unreadable
//!   points are skipped instead of failing the load
//!
//! # Example
//!
//! ```no_run
//! use imobench_ingest::{BenchLoader, GradingBenchQuery};
//!
//! let loader = BenchLoader::new(None)?;
//!
//! // Stop after the first ten high-scoring gradings without reading the rest.
//! let query = GradingBenchQuery::default().with_min_points(7);
//! for entry in loader.iter_gradingbench(query)?.take(10) {
//!     println!("{}", entry?);
//! }
//! # Ok::<(), imobench_ingest::IngestError>(())
//! ```

mod csv;
mod error;
mod facade;
mod loader;
mod query;
mod record;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loader ===
pub use loader::{BenchLoader, DATA_DIR_ENV_VAR, GradingBenchIter, RecordIter, default_data_dir};

// === Queries ===
pub use query::{AnswerBenchQuery, GradingBenchQuery, ProofBenchQuery, RecordQuery};

// === Records ===
pub use record::{BenchRecord, RowContext};

// === Default Loader ===
pub use facade::{
    default_loader, iter_gradingbench, load_answerbench, load_gradingbench, load_proofbench,
};
