use crate::models::{CourseCode, ExistenceState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A surfaced, non-fatal problem from one validation run.
///
/// Lookup failures never abort validation: the affected codes stay in
/// `Unknown` existence state and the failure is recorded here for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Which lookup round (1-based) produced the warning
    pub round: usize,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(round: usize, message: impl Into<String>) -> Self {
        Self {
            round,
            message: message.into(),
        }
    }
}

/// Per-course validation result for display and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseValidation {
    pub code: CourseCode,
    pub existence: ExistenceState,
    /// Transitive unmet prerequisites; empty when existence is not
    /// confirmed (checking is skipped, fail-open)
    pub missing_prerequisites: Vec<CourseCode>,
}

/// The full outcome of one validation run, shaped for consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub generated_at: DateTime<Utc>,
    /// Generation id of the session run that produced this report
    pub generation: u64,
    pub rounds: usize,
    pub courses: Vec<CourseValidation>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn new(
        generation: u64,
        rounds: usize,
        courses: Vec<CourseValidation>,
        warnings: Vec<ValidationWarning>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            generation,
            rounds,
            courses,
            warnings,
        }
    }

    /// True when every requested course exists and has no unmet prerequisites
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
            && self.courses.iter().all(|c| {
                c.existence == ExistenceState::Exists && c.missing_prerequisites.is_empty()
            })
    }
}
