use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalize a raw course string into a comparable key.
///
/// Uppercases and strips everything that is not an ASCII letter or digit,
/// so `"cs 170"`, `"CS-170"` and `"CS170"` all collapse to `"CS170"`.
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// A normalized course identifier (e.g. `CS170`, `CHEM150E`, `BIOL999XFR`).
///
/// Always uppercase letters and digits only; equality is plain string
/// equality after normalization. Construct through [`CourseCode::new`] so
/// the invariant holds everywhere downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    /// Create a code from any raw string, normalizing it first.
    pub fn new(raw: &str) -> Self {
        Self(normalize_code(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Which transcript section a course code was extracted from.
///
/// Determines the acceptance rules during extraction: incoming categories
/// require equivalence evidence ("as" before / standalone "T" after), the
/// academic record applies the grade filter instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranscriptCategory {
    /// Credit transferred from another institution
    TransferIncoming,
    /// Credit granted for standardized test scores (AP/IB)
    TestIncoming,
    /// Courses taken directly, listed in the academic record
    AcademicRecord,
}

impl TranscriptCategory {
    /// Display label for CLI output
    pub fn label(&self) -> &'static str {
        match self {
            TranscriptCategory::TransferIncoming => "Transfer credit",
            TranscriptCategory::TestIncoming => "Test credit",
            TranscriptCategory::AcademicRecord => "Academic record",
        }
    }
}

/// The per-category outcome of parsing one transcript.
///
/// Each category holds a deduplicated list of codes in first-seen order.
/// Categories are mutually exclusive by construction: academic-record codes
/// that already appear in either incoming list are removed during parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedCourseSet {
    pub transfer: Vec<CourseCode>,
    pub test: Vec<CourseCode>,
    pub academic: Vec<CourseCode>,
}

impl ParsedCourseSet {
    /// Codes for one category, in extraction order
    pub fn category(&self, category: TranscriptCategory) -> &[CourseCode] {
        match category {
            TranscriptCategory::TransferIncoming => &self.transfer,
            TranscriptCategory::TestIncoming => &self.test,
            TranscriptCategory::AcademicRecord => &self.academic,
        }
    }

    /// Union of all categories, deduplicated, first-seen order
    pub fn all_codes(&self) -> Vec<CourseCode> {
        let mut out: Vec<CourseCode> = Vec::new();
        for code in self
            .transfer
            .iter()
            .chain(self.test.iter())
            .chain(self.academic.iter())
        {
            if !out.contains(code) {
                out.push(code.clone());
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.transfer.is_empty() && self.test.is_empty() && self.academic.is_empty()
    }

    pub fn total(&self) -> usize {
        self.transfer.len() + self.test.len() + self.academic.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_and_uppercases() {
        assert_eq!(normalize_code("cs 170"), "CS170");
        assert_eq!(normalize_code("Chem-150e"), "CHEM150E");
        assert_eq!(normalize_code("ENVS& 131"), "ENVS131");
        assert_eq!(normalize_code(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["cs 170", "CS170", "  qtm 100 ", "bio-999xfr", "!!", "Ünïcode 123"] {
            let once = normalize_code(raw);
            assert_eq!(normalize_code(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_course_code_equality_after_normalization() {
        assert_eq!(CourseCode::new("cs 170"), CourseCode::new("CS170"));
        assert_ne!(CourseCode::new("CS170"), CourseCode::new("CS171"));
    }

    #[test]
    fn test_all_codes_dedups_across_categories() {
        let set = ParsedCourseSet {
            transfer: vec![CourseCode::new("CHEM150")],
            test: vec![CourseCode::new("PSYC111"), CourseCode::new("CHEM150")],
            academic: vec![CourseCode::new("CS170")],
        };
        assert_eq!(
            set.all_codes(),
            vec![
                CourseCode::new("CHEM150"),
                CourseCode::new("PSYC111"),
                CourseCode::new("CS170")
            ]
        );
    }

    #[test]
    fn test_empty_set() {
        let set = ParsedCourseSet::default();
        assert!(set.is_empty());
        assert_eq!(set.total(), 0);
        assert!(set.all_codes().is_empty());
    }
}
