pub mod course;
pub mod prereq;
pub mod schedule;
pub mod validation;

pub use course::{normalize_code, CourseCode, ParsedCourseSet, TranscriptCategory};
pub use prereq::{ExistenceMap, ExistenceState, OrGroup, PrerequisiteGraph, PrerequisiteRule};
pub use schedule::{BlockedTime, CourseRecord, Day, MeetingEntry, MeetingPattern, TimeInterval};
pub use validation::{CourseValidation, ValidationReport, ValidationWarning};
