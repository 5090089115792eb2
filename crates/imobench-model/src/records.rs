//! Typed records, one per dataset row.
//!
//! Records are plain values built fresh on every load. String fields hold the
//! file content verbatim; typed views are available through accessors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Category, Reward};

/// A short-answer problem from `answerbench.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerProblem {
    /// Identifier, e.g. `imo-bench-algebra-001`.
    pub problem_id: String,
    /// Problem statement (LaTeX).
    pub problem: String,
    pub short_answer: String,
    pub category: String,
    pub subcategory: String,
    pub source: String,
}

impl AnswerProblem {
    /// Typed category, or `None` when the raw value is outside the closed set.
    pub fn category_kind(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

impl fmt::Display for AnswerProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnswerProblem(id='{}', category='{}')",
            self.problem_id, self.category
        )
    }
}

/// A proof problem from `proofbench.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofProblem {
    /// Identifier, e.g. `PB-Basic-001`.
    pub problem_id: String,
    pub problem: String,
    /// Reference solution.
    pub solution: String,
    /// Rubric for partial credit.
    pub grading_guidelines: String,
    pub category: String,
    /// Difficulty label such as `IMO-easy` or `pre-IMO`.
    pub level: String,
    /// May be empty.
    pub short_answer: String,
    pub source: String,
}

impl ProofProblem {
    pub fn category_kind(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

impl fmt::Display for ProofProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProofProblem(id='{}', level='{}')",
            self.problem_id, self.level
        )
    }
}

/// A human grading of one response, from `gradingbench.csv`.
///
/// `problem_id` is a label only; it is not checked against either problem set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingEntry {
    /// Identifier, e.g. `GB-0001`.
    pub grading_id: String,
    pub problem_id: String,
    pub problem: String,
    pub solution: String,
    pub grading_guidelines: String,
    /// The graded response.
    pub response: String,
    /// Awarded points on a 0-10 scale.
    pub points: i64,
    /// Outcome label, whitespace-trimmed.
    pub reward: String,
    pub problem_source: String,
}

impl GradingEntry {
    /// Typed reward for the canonical labels; `None` for any other value.
    pub fn reward_kind(&self) -> Option<Reward> {
        self.reward.parse().ok()
    }
}

impl fmt::Display for GradingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GradingEntry(id='{}', points={})",
            self.grading_id, self.points
        )
    }
}
