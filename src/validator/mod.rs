pub mod conflict;
pub mod prereq;

pub use conflict::{has_hard_conflict, intervals_overlap, overlapping_courses, patterns_conflict};
pub use prereq::{missing_prerequisites, PrereqValidator, ValidationOutcome, MAX_LOOKUP_ROUNDS};
