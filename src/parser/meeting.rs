use crate::models::{BlockedTime, CourseRecord, Day, MeetingPattern, TimeInterval};
use regex::Regex;

/// `H:MM(am|pm)-H:MM(am|pm)`, optional spaces around the dash
const TIME_RANGE_PATTERN: &str =
    r"(?i)(\d{1,2}):(\d{2})\s*(am|pm)\s*-\s*(\d{1,2}):(\d{2})\s*(am|pm)";

/// A bare hour like `9am`, not already followed by `:MM`
const BARE_HOUR_PATTERN: &str = r"(?i)(^|[^:0-9])(\d{1,2})(am|pm)";

/// Decode a compact day token into a deduplicated day list.
///
/// A small longest-match-first lexer: the two-letter codes `Th` (Thursday)
/// and `Tu` (Tuesday) are recognized before the single letters M/T/W/R/F,
/// where `T` is Tuesday and `R` is Thursday in the alternate single-letter
/// scheme. Unrecognized characters are skipped, so `"MWF"`, `"TuTh"` and
/// `"TTh"` all decode as expected.
pub fn parse_days(token: &str) -> Vec<Day> {
    let chars: Vec<char> = token.chars().collect();
    let mut days: Vec<Day> = Vec::new();
    let mut push = |days: &mut Vec<Day>, day: Day| {
        if !days.contains(&day) {
            days.push(day);
        }
    };

    let mut i = 0;
    while i < chars.len() {
        // two-letter codes take precedence over a bare 'T'
        if chars[i] == 'T' && i + 1 < chars.len() {
            if chars[i + 1] == 'h' {
                push(&mut days, Day::Thursday);
                i += 2;
                continue;
            }
            if chars[i + 1] == 'u' {
                push(&mut days, Day::Tuesday);
                i += 2;
                continue;
            }
        }
        match chars[i] {
            'M' => push(&mut days, Day::Monday),
            'T' => push(&mut days, Day::Tuesday),
            'W' => push(&mut days, Day::Wednesday),
            'R' => push(&mut days, Day::Thursday),
            'F' => push(&mut days, Day::Friday),
            _ => {}
        }
        i += 1;
    }
    days
}

/// Decode a 12-hour time range into minutes since midnight.
///
/// Bare hour forms (`"9am"`) are normalized to `"9:00am"` first. Returns
/// `None` when no range pattern is present or the range is not strictly
/// increasing, so placeholder strings like `"TBA"` simply yield nothing.
pub fn parse_time_range(token: &str) -> Option<(u16, u16)> {
    let normalized = normalize_bare_hours(token);
    let re = Regex::new(TIME_RANGE_PATTERN).ok()?;
    let cap = re.captures(&normalized)?;

    let start = to_minutes(&cap[1], &cap[2], &cap[3])?;
    let end = to_minutes(&cap[4], &cap[5], &cap[6])?;
    if start < end {
        Some((start, end))
    } else {
        None
    }
}

/// Parse a single clock time like `"9:30am"` or `"9am"` into minutes
/// since midnight. Used for blocked-time preferences.
pub fn parse_clock_time(token: &str) -> Option<u16> {
    let normalized = normalize_bare_hours(token.trim());
    let re = Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*(am|pm)$").ok()?;
    let cap = re.captures(normalized.trim())?;
    to_minutes(&cap[1], &cap[2], &cap[3])
}

/// Parse one `(day_token, time_range_token)` meeting entry.
///
/// Every recognized day is paired with the same start/end, one interval per
/// day. An unparsable time range yields an empty pattern for this entry
/// only; the course's other entries are unaffected.
pub fn parse_meeting(day_token: &str, time_token: &str) -> MeetingPattern {
    let Some((start, end)) = parse_time_range(time_token) else {
        return Vec::new();
    };
    parse_days(day_token)
        .into_iter()
        .map(|day| TimeInterval::new(day, start, end))
        .collect()
}

/// Parse a combined `"<days> <range>"` meeting string, e.g.
/// `"MWF 9:00am-9:50am"`. `"TBA"` and other placeholders yield an empty
/// pattern (a TBA course never conflicts).
pub fn parse_meeting_string(entry: &str) -> MeetingPattern {
    let trimmed = entry.trim();
    let Some((day_token, time_token)) = trimmed.split_once(char::is_whitespace) else {
        return Vec::new();
    };
    parse_meeting(day_token, time_token)
}

/// Convert a blocked-time preference entry into a comparable interval.
///
/// The day may arrive as a long name ("Monday") or short code ("Mon");
/// both normalize to the same [`Day`]. Entries that fail to parse are
/// dropped by the caller.
pub fn blocked_to_interval(blocked: &BlockedTime) -> Option<TimeInterval> {
    let day = Day::from_name(&blocked.day)?;
    let start = parse_clock_time(&blocked.start)?;
    let end = parse_clock_time(&blocked.end)?;
    if start < end {
        Some(TimeInterval::new(day, start, end))
    } else {
        None
    }
}

/// Derive a course record's meeting pattern.
///
/// Prefers the structured meeting entries when the catalog provides them
/// (their `day` field is a full or short day name, not a compact token) and
/// falls back to the human-readable combined string. Entries that fail to
/// parse are dropped without affecting the record's other entries.
pub fn record_pattern(record: &CourseRecord) -> MeetingPattern {
    if let Some(meetings) = &record.meetings {
        return meetings
            .iter()
            .filter_map(|entry| {
                let day = Day::from_name(&entry.day)?;
                let (start, end) = parse_time_range(&entry.time)?;
                Some(TimeInterval::new(day, start, end))
            })
            .collect();
    }
    parse_meeting_string(&record.meeting_time)
}

/// Rewrite bare `9am` forms to `9:00am` so one range pattern handles both
fn normalize_bare_hours(token: &str) -> String {
    match Regex::new(BARE_HOUR_PATTERN) {
        Ok(re) => re.replace_all(token, "${1}${2}:00${3}").into_owned(),
        Err(_) => token.to_string(),
    }
}

/// 12-hour clock to minutes since midnight: 12am -> 0, 12pm -> 12,
/// pm adds 12 otherwise
fn to_minutes(hour: &str, minute: &str, meridiem: &str) -> Option<u16> {
    let hour: u16 = hour.parse().ok()?;
    let minute: u16 = minute.parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }
    let hour24 = match (hour, meridiem.eq_ignore_ascii_case("pm")) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    Some(hour24 * 60 + minute)
}
