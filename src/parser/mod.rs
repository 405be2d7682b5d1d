pub mod codes;
pub mod meeting;
pub mod transcript;

pub use codes::{extract_academic, extract_incoming};
pub use meeting::{
    blocked_to_interval, parse_clock_time, parse_days, parse_meeting, parse_meeting_string,
    parse_time_range, record_pattern,
};
pub use transcript::{normalize_whitespace, segment, TranscriptSections};

use crate::models::{CourseCode, ParsedCourseSet};

/// Parse raw transcript text into category-tagged course-code sets.
///
/// Runs the full extraction pipeline: whitespace normalization, anchor-based
/// segmentation, then per-category code extraction. Academic-record codes
/// that already appear in either incoming category are dropped so a
/// transfer/test equivalence never double-counts as a taken course.
///
/// Malformed or empty input yields three empty sets; this never fails.
pub fn parse_transcript(raw: &str) -> ParsedCourseSet {
    let text = normalize_whitespace(raw);
    let sections = segment(&text);

    let transfer = extract_incoming(&sections.transfer);
    let test = extract_incoming(&sections.test);
    let academic: Vec<CourseCode> = extract_academic(&sections.academic)
        .into_iter()
        .filter(|code| !transfer.contains(code) && !test.contains(code))
        .collect();

    ParsedCourseSet {
        transfer,
        test,
        academic,
    }
}
