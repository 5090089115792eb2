//! Per-dataset load options and record filters.
//!
//! All supplied filters combine as a logical AND. A filter set to an empty
//! string is treated as absent.

use imobench_model::{AnswerProblem, GradingEntry, ProofProblem};

/// Options and filters for a single load call.
pub trait RecordQuery<R> {
    /// Whether rows are validated before conversion.
    fn validate(&self) -> bool;

    /// Whether `record` passes every supplied filter.
    fn matches(&self, record: &R) -> bool;
}

fn field_matches(filter: Option<&str>, value: &str) -> bool {
    filter.filter(|f| !f.is_empty()).is_none_or(|f| f == value)
}

/// Filters for `answerbench.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerBenchQuery {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub source: Option<String>,
    pub validate: bool,
}

impl Default for AnswerBenchQuery {
    fn default() -> Self {
        Self {
            category: None,
            subcategory: None,
            source: None,
            validate: true,
        }
    }
}

impl AnswerBenchQuery {
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Enable or disable row validation.
    #[must_use]
    pub fn with_validation(mut self, enable: bool) -> Self {
        self.validate = enable;
        self
    }
}

impl RecordQuery<AnswerProblem> for AnswerBenchQuery {
    fn validate(&self) -> bool {
        self.validate
    }

    fn matches(&self, record: &AnswerProblem) -> bool {
        field_matches(self.category.as_deref(), &record.category)
            && field_matches(self.subcategory.as_deref(), &record.subcategory)
            && field_matches(self.source.as_deref(), &record.source)
    }
}

/// Filters for `proofbench.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofBenchQuery {
    pub category: Option<String>,
    /// Difficulty level, e.g. `IMO-easy`.
    pub level: Option<String>,
    pub validate: bool,
}

impl Default for ProofBenchQuery {
    fn default() -> Self {
        Self {
            category: None,
            level: None,
            validate: true,
        }
    }
}

impl ProofBenchQuery {
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_validation(mut self, enable: bool) -> Self {
        self.validate = enable;
        self
    }
}

impl RecordQuery<ProofProblem> for ProofBenchQuery {
    fn validate(&self) -> bool {
        self.validate
    }

    fn matches(&self, record: &ProofProblem) -> bool {
        field_matches(self.category.as_deref(), &record.category)
            && field_matches(self.level.as_deref(), &record.level)
    }
}

/// Filters for `gradingbench.csv`.
///
/// `min_points` and `max_points` are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingBenchQuery {
    pub problem_id: Option<String>,
    pub min_points: Option<i64>,
    pub max_points: Option<i64>,
    pub validate: bool,
}

impl Default for GradingBenchQuery {
    fn default() -> Self {
        Self {
            problem_id: None,
            min_points: None,
            max_points: None,
            validate: true,
        }
    }
}

impl GradingBenchQuery {
    #[must_use]
    pub fn with_problem_id(mut self, problem_id: impl Into<String>) -> Self {
        self.problem_id = Some(problem_id.into());
        self
    }

    #[must_use]
    pub fn with_min_points(mut self, points: i64) -> Self {
        self.min_points = Some(points);
        self
    }

    #[must_use]
    pub fn with_max_points(mut self, points: i64) -> Self {
        self.max_points = Some(points);
        self
    }

    #[must_use]
    pub fn with_validation(mut self, enable: bool) -> Self {
        self.validate = enable;
        self
    }
}

impl RecordQuery<GradingEntry> for GradingBenchQuery {
    fn validate(&self) -> bool {
        self.validate
    }

    fn matches(&self, record: &GradingEntry) -> bool {
        field_matches(self.problem_id.as_deref(), &record.problem_id)
            && self.min_points.is_none_or(|min| record.points >= min)
            && self.max_points.is_none_or(|max| record.points <= max)
    }
}
