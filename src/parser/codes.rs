use crate::models::CourseCode;
use regex::Regex;

/// Department token (2-6 uppercase letters, `&` allowed), optional space,
/// 3-4 digit number, optional 0-3 uppercase-letter suffix.
const CODE_PATTERN: &str = r"\b([A-Z][A-Z&]{1,5})\s?(\d{3,4})([A-Z]{0,3})\b";

/// Grade tokens as they appear standalone in the academic record
const GRADE_PATTERN: &str = r"^(?:W|S|U|F|[A-D][+-]?)$";

/// Grades that exclude a course from the academic record: failed,
/// unsatisfactory, or withdrawn. Everything else (including no grade at
/// all, meaning in progress) keeps the course.
const EXCLUDED_GRADES: &[&str] = &["W", "U", "F", "D", "D+", "D-"];

/// How far before a candidate to look for the "as" equivalence marker
const AS_WINDOW: usize = 40;
/// How far after a candidate to look for a standalone "T" marker or a
/// grade token. A heuristic window: an unusually long course title can push
/// the grade past it, which then reads as "in progress, include".
const AFTER_WINDOW: usize = 120;

/// A course-code match within a section, with its byte span
struct Candidate {
    code: CourseCode,
    start: usize,
    end: usize,
}

/// Scan a section left to right for plausible course codes.
///
/// A candidate is plausible only if its number has exactly 3 digits in
/// [100, 699], or is the special `999XFR` transfer-credit marker. 4-digit
/// numbers (commonly calendar years) are always rejected, as are 3-letter
/// suffixes other than `XFR` (junk glued onto a code, e.g. `CS171XYZ`).
fn candidates(section: &str) -> Vec<Candidate> {
    let Ok(re) = Regex::new(CODE_PATTERN) else {
        return Vec::new();
    };

    re.captures_iter(section)
        .filter_map(|cap| {
            let dept = cap.get(1)?.as_str();
            let number = cap.get(2)?.as_str();
            let suffix = cap.get(3)?.as_str();
            if !is_plausible(number, suffix) {
                return None;
            }
            let full = cap.get(0)?;
            Some(Candidate {
                code: CourseCode::new(&format!("{dept}{number}{suffix}")),
                start: full.start(),
                end: full.end(),
            })
        })
        .collect()
}

fn is_plausible(number: &str, suffix: &str) -> bool {
    if number.len() != 3 {
        return false;
    }
    if number == "999" {
        return suffix == "XFR";
    }
    let Ok(n) = number.parse::<u32>() else {
        return false;
    };
    (100..=699).contains(&n) && suffix.len() < 3
}

/// Extract equivalence codes from a transfer- or test-credit section.
///
/// A candidate is kept only when the surrounding text marks it as the
/// *destination* of an equivalence rather than a source identifier: the
/// word "as" within the preceding 40 characters, or a standalone `T` token
/// within the following 120 characters. Deduplicated, first-seen order.
pub fn extract_incoming(section: &str) -> Vec<CourseCode> {
    let as_re = Regex::new(r"(?i)\bas\b").ok();
    let t_re = Regex::new(r"\bT\b").ok();

    let mut out: Vec<CourseCode> = Vec::new();
    for candidate in candidates(section) {
        let before = window_before(section, candidate.start, AS_WINDOW);
        let after = window_after(section, candidate.end, AFTER_WINDOW);

        let as_precedes = as_re.as_ref().is_some_and(|re| re.is_match(before));
        let t_follows = t_re.as_ref().is_some_and(|re| re.is_match(after));
        if (as_precedes || t_follows) && !out.contains(&candidate.code) {
            out.push(candidate.code);
        }
    }
    out
}

/// Extract taken courses from the academic-record section.
///
/// A candidate is dropped only when the nearest grade token within the
/// following 120 characters denotes failure or withdrawal. A passing grade,
/// or no grade token at all (in-progress course), keeps it. Deduplicated,
/// first-seen order.
pub fn extract_academic(section: &str) -> Vec<CourseCode> {
    let grade_re = match Regex::new(GRADE_PATTERN) {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    let mut out: Vec<CourseCode> = Vec::new();
    for candidate in candidates(section) {
        let after = window_after(section, candidate.end, AFTER_WINDOW);
        let grade = after
            .split_whitespace()
            .find(|token| grade_re.is_match(token));
        if let Some(grade) = grade {
            if EXCLUDED_GRADES.contains(&grade) {
                continue;
            }
        }
        if !out.contains(&candidate.code) {
            out.push(candidate.code);
        }
    }
    out
}

/// Up to `len` bytes of text preceding `pos`, clamped to char boundaries
fn window_before(text: &str, pos: usize, len: usize) -> &str {
    let start = floor_char_boundary(text, pos.saturating_sub(len));
    text.get(start..pos).unwrap_or_default()
}

/// Up to `len` bytes of text following `pos`, clamped to char boundaries
fn window_after(text: &str, pos: usize, len: usize) -> &str {
    let end = floor_char_boundary(text, (pos + len).min(text.len()));
    text.get(pos..end).unwrap_or_default()
}

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
