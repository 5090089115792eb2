//! Type-safe enumerations for IMO Bench metadata.
//!
//! The CSV files store these as plain strings; records keep the raw string
//! and expose the typed form through accessors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::columns;

/// Problem category shared by AnswerBench and ProofBench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Algebra,
    Combinatorics,
    Geometry,
    /// Written `Number theory` in the data files.
    #[serde(rename = "Number theory")]
    NumberTheory,
}

impl Category {
    /// Every valid category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Algebra,
        Category::Combinatorics,
        Category::Geometry,
        Category::NumberTheory,
    ];

    /// Returns the literal as it appears in the data files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Algebra => "Algebra",
            Category::Combinatorics => "Combinatorics",
            Category::Geometry => "Geometry",
            Category::NumberTheory => "Number theory",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl FromStr for Category {
    type Err = String;

    /// Exact, case-sensitive match against the file literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

/// Canonical grading outcomes.
///
/// The `Reward` column is open-ended; values outside this set are valid and
/// simply have no typed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reward {
    Correct,
    Partial,
    Incorrect,
    Almost,
}

impl Reward {
    pub const ALL: [Reward; 4] = [
        Reward::Correct,
        Reward::Partial,
        Reward::Incorrect,
        Reward::Almost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Reward::Correct => "Correct",
            Reward::Partial => "Partial",
            Reward::Incorrect => "Incorrect",
            Reward::Almost => "Almost",
        }
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Reward {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reward::ALL
            .into_iter()
            .find(|reward| reward.as_str() == s)
            .ok_or_else(|| format!("Unknown reward: {s}"))
    }
}

/// The three IMO Bench datasets.
///
/// Each kind knows its file name, its required columns, and the identifier
/// convention its rows must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dataset {
    AnswerBench,
    ProofBench,
    GradingBench,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [
        Dataset::AnswerBench,
        Dataset::ProofBench,
        Dataset::GradingBench,
    ];

    /// Lowercase name used in messages and file names.
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::AnswerBench => "answerbench",
            Dataset::ProofBench => "proofbench",
            Dataset::GradingBench => "gradingbench",
        }
    }

    /// Fixed file name, resolved against the loader's base directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::AnswerBench => "answerbench.csv",
            Dataset::ProofBench => "proofbench.csv",
            Dataset::GradingBench => "gradingbench.csv",
        }
    }

    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Dataset::AnswerBench => columns::ANSWERBENCH_COLUMNS,
            Dataset::ProofBench => columns::PROOFBENCH_COLUMNS,
            Dataset::GradingBench => columns::GRADINGBENCH_COLUMNS,
        }
    }

    /// Required columns whose value may be blank.
    pub fn nullable_columns(&self) -> &'static [&'static str] {
        match self {
            Dataset::ProofBench => &[columns::SHORT_ANSWER],
            Dataset::AnswerBench | Dataset::GradingBench => &[],
        }
    }

    /// Column holding the row identifier.
    pub fn id_column(&self) -> &'static str {
        match self {
            Dataset::AnswerBench | Dataset::ProofBench => columns::PROBLEM_ID,
            Dataset::GradingBench => columns::GRADING_ID,
        }
    }

    /// Literal prefix every identifier must start with.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Dataset::AnswerBench => "imo-bench-",
            Dataset::ProofBench => "PB-",
            Dataset::GradingBench => "GB-",
        }
    }

    /// Whether rows carry a `Category` column restricted to [`Category`].
    pub fn has_category(&self) -> bool {
        matches!(self, Dataset::AnswerBench | Dataset::ProofBench)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
