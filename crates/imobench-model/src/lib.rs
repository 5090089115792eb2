//! Data model for the IMO Bench datasets.
//!
//! Three fixed-schema tables are covered:
//! - **AnswerBench**: short-answer problems ([`AnswerProblem`])
//! - **ProofBench**: proof problems with grading guidelines ([`ProofProblem`])
//! - **GradingBench**: human-graded responses ([`GradingEntry`])
//!
//! # Module Organization
//!
//! - [`columns`]: Column names exactly as they appear in the CSV headers
//! - [`enums`]: Closed sets (`Category`, `Reward`) and the `Dataset` kind
//! - [`records`]: The typed, immutable record for each dataset
//! - [`row`]: The raw, column-ordered row a record is built from

pub mod columns;
pub mod enums;
pub mod records;
pub mod row;

pub use enums::{Category, Dataset, Reward};
pub use records::{AnswerProblem, GradingEntry, ProofProblem};
pub use row::Row;
