use crate::models::{MeetingPattern, TimeInterval};

/// Half-open interval overlap: same day and `startA < endB && startB < endA`.
/// Touching endpoints (one ends exactly when the other starts) do not count.
pub fn intervals_overlap(a: &TimeInterval, b: &TimeInterval) -> bool {
    a.day == b.day && a.start_minute < b.end_minute && b.start_minute < a.end_minute
}

/// True iff any interval of one pattern overlaps any interval of the other.
/// An empty pattern (TBA section) never conflicts with anything.
pub fn patterns_conflict(a: &[TimeInterval], b: &[TimeInterval]) -> bool {
    a.iter()
        .any(|ia| b.iter().any(|ib| intervals_overlap(ia, ib)))
}

/// Hard conflict: a course's meeting pattern against the student's blocked
/// intervals. Blocked times arrive with day names from a different source
/// than course meetings; both are normalized to [`crate::models::Day`]
/// before reaching this check, so the same overlap rule applies.
pub fn has_hard_conflict(pattern: &[TimeInterval], blocked: &[TimeInterval]) -> bool {
    patterns_conflict(pattern, blocked)
}

/// Names of already-selected courses whose patterns overlap the candidate,
/// in selection order. Computed on demand before a course is added.
pub fn overlapping_courses<'a>(
    candidate: &[TimeInterval],
    selected: &'a [(String, MeetingPattern)],
) -> Vec<&'a str> {
    selected
        .iter()
        .filter(|(_, pattern)| patterns_conflict(candidate, pattern))
        .map(|(name, _)| name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    fn interval(day: Day, start: u16, end: u16) -> TimeInterval {
        TimeInterval::new(day, start, end)
    }

    #[test]
    fn test_overlap_requires_same_day() {
        let monday = interval(Day::Monday, 540, 615);
        let tuesday = interval(Day::Tuesday, 540, 615);
        assert!(!intervals_overlap(&monday, &tuesday));
        assert!(intervals_overlap(&monday, &monday));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        // [9:00, 10:15) and [10:15, 11:30) on the same day
        let first = interval(Day::Monday, 540, 615);
        let second = interval(Day::Monday, 615, 690);
        assert!(!intervals_overlap(&first, &second));
        assert!(!intervals_overlap(&second, &first));
    }

    #[test]
    fn test_partial_overlap_detected() {
        // [9:00, 10:30) and [10:00, 11:00) do overlap
        let first = interval(Day::Monday, 540, 630);
        let second = interval(Day::Monday, 600, 660);
        assert!(intervals_overlap(&first, &second));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = interval(Day::Wednesday, 540, 720);
        let inner = interval(Day::Wednesday, 600, 660);
        assert!(intervals_overlap(&outer, &inner));
        assert!(intervals_overlap(&inner, &outer));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let cases = [
            (interval(Day::Monday, 540, 630), interval(Day::Monday, 600, 660)),
            (interval(Day::Monday, 540, 615), interval(Day::Monday, 615, 690)),
            (interval(Day::Friday, 540, 600), interval(Day::Monday, 540, 600)),
            (interval(Day::Tuesday, 0, 1440), interval(Day::Tuesday, 100, 200)),
        ];
        for (a, b) in cases {
            assert_eq!(intervals_overlap(&a, &b), intervals_overlap(&b, &a));
        }
    }

    #[test]
    fn test_patterns_conflict_any_pair() {
        let mwf = vec![
            interval(Day::Monday, 540, 590),
            interval(Day::Wednesday, 540, 590),
            interval(Day::Friday, 540, 590),
        ];
        let tuth = vec![
            interval(Day::Tuesday, 540, 615),
            interval(Day::Thursday, 540, 615),
        ];
        let mon_lab = vec![interval(Day::Monday, 570, 700)];

        assert!(!patterns_conflict(&mwf, &tuth));
        assert!(patterns_conflict(&mwf, &mon_lab));
        assert_eq!(
            patterns_conflict(&mwf, &mon_lab),
            patterns_conflict(&mon_lab, &mwf)
        );
    }

    #[test]
    fn test_empty_pattern_never_conflicts() {
        let tba: MeetingPattern = Vec::new();
        let busy = vec![interval(Day::Monday, 0, 1440)];
        assert!(!patterns_conflict(&tba, &busy));
        assert!(!patterns_conflict(&busy, &tba));
        assert!(!has_hard_conflict(&tba, &busy));
    }

    #[test]
    fn test_hard_conflict_against_blocked_time() {
        // MWF 9:00-9:50 course vs Monday 9:30-10:00 blocked
        let course = vec![
            interval(Day::Monday, 540, 590),
            interval(Day::Wednesday, 540, 590),
            interval(Day::Friday, 540, 590),
        ];
        let blocked_monday = vec![interval(Day::Monday, 570, 600)];
        let blocked_tuesday = vec![interval(Day::Tuesday, 540, 600)];
        assert!(has_hard_conflict(&course, &blocked_monday));
        assert!(!has_hard_conflict(&course, &blocked_tuesday));
    }

    #[test]
    fn test_overlapping_courses_reports_names() {
        let candidate = vec![interval(Day::Monday, 540, 590)];
        let selected = vec![
            ("CS170".to_string(), vec![interval(Day::Monday, 570, 660)]),
            ("QTM100".to_string(), vec![interval(Day::Tuesday, 540, 590)]),
            ("HIST201".to_string(), vec![interval(Day::Monday, 500, 560)]),
        ];
        assert_eq!(
            overlapping_courses(&candidate, &selected),
            vec!["CS170", "HIST201"]
        );
    }
}
