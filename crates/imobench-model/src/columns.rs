//! CSV column names.
//!
//! Header matching is case- and spelling-exact, including embedded spaces.

pub const PROBLEM_ID: &str = "Problem ID";
pub const PROBLEM: &str = "Problem";
pub const SHORT_ANSWER: &str = "Short Answer";
pub const CATEGORY: &str = "Category";
pub const SUBCATEGORY: &str = "Subcategory";
pub const SOURCE: &str = "Source";
pub const SOLUTION: &str = "Solution";
pub const GRADING_GUIDELINES: &str = "Grading guidelines";
pub const LEVEL: &str = "Level";
pub const GRADING_ID: &str = "Grading ID";
pub const RESPONSE: &str = "Response";
pub const POINTS: &str = "Points";
pub const REWARD: &str = "Reward";
pub const PROBLEM_SOURCE: &str = "Problem Source";

/// Required columns of `answerbench.csv`.
pub const ANSWERBENCH_COLUMNS: &[&str] = &[
    PROBLEM_ID,
    PROBLEM,
    SHORT_ANSWER,
    CATEGORY,
    SUBCATEGORY,
    SOURCE,
];

/// Required columns of `proofbench.csv`.
pub const PROOFBENCH_COLUMNS: &[&str] = &[
    PROBLEM_ID,
    PROBLEM,
    SOLUTION,
    GRADING_GUIDELINES,
    CATEGORY,
    LEVEL,
    SHORT_ANSWER,
    SOURCE,
];

/// Required columns of `gradingbench.csv`.
pub const GRADINGBENCH_COLUMNS: &[&str] = &[
    GRADING_ID,
    PROBLEM_ID,
    PROBLEM,
    SOLUTION,
    GRADING_GUIDELINES,
    RESPONSE,
    POINTS,
    REWARD,
    PROBLEM_SOURCE,
];
