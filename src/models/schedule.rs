use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekday a course section can meet on. Weekend meetings do not occur in
/// the source catalog, so only Monday through Friday are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// Parse a day name as it arrives from external sources: either the
    /// long form ("Monday") or the short code ("Mon"), case-insensitive.
    /// Both forms normalize to the same variant so intervals from different
    /// sources compare correctly.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Some(Day::Monday),
            "tuesday" | "tue" | "tues" => Some(Day::Tuesday),
            "wednesday" | "wed" => Some(Day::Wednesday),
            "thursday" | "thu" | "thur" | "thurs" => Some(Day::Thursday),
            "friday" | "fri" => Some(Day::Friday),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    pub fn short(&self) -> &'static str {
        match self {
            Day::Monday => "Mon",
            Day::Tuesday => "Tue",
            Day::Wednesday => "Wed",
            Day::Thursday => "Thu",
            Day::Friday => "Fri",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One meeting block: a day plus a half-open minute range.
///
/// Minutes are measured from midnight; `start_minute < end_minute` holds
/// for every interval produced by the meeting parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub day: Day,
    pub start_minute: u16,
    pub end_minute: u16,
}

impl TimeInterval {
    pub fn new(day: Day, start_minute: u16, end_minute: u16) -> Self {
        Self {
            day,
            start_minute,
            end_minute,
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}-{:02}:{:02}",
            self.day.short(),
            self.start_minute / 60,
            self.start_minute % 60,
            self.end_minute / 60,
            self.end_minute % 60
        )
    }
}

/// All meeting blocks of one course section. Empty for "TBA" sections,
/// which never conflict with anything.
pub type MeetingPattern = Vec<TimeInterval>;

/// A user-declared unavailable time as it appears in the preferences file.
///
/// `day` may be a long name or a short code; `start`/`end` are clock times
/// like `"9:30am"` or `"9am"`. Converted to [`TimeInterval`] by the meeting
/// parser before conflict checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedTime {
    pub day: String,
    pub start: String,
    pub end: String,
}

/// One structured meeting entry on a course search record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingEntry {
    pub day: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A course as returned by the catalog's search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub professor: String,
    #[serde(default)]
    pub credits: f32,
    /// Human-readable meeting-time string, e.g. "MWF 9:00am-9:50am"
    #[serde(default)]
    pub meeting_time: String,
    /// Structured meeting entries when the catalog provides them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meetings: Option<Vec<MeetingEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_from_long_and_short_names() {
        assert_eq!(Day::from_name("Monday"), Some(Day::Monday));
        assert_eq!(Day::from_name("mon"), Some(Day::Monday));
        assert_eq!(Day::from_name("THURSDAY"), Some(Day::Thursday));
        assert_eq!(Day::from_name("Thu"), Some(Day::Thursday));
        assert_eq!(Day::from_name(" tue "), Some(Day::Tuesday));
        assert_eq!(Day::from_name("Saturday"), None);
        assert_eq!(Day::from_name(""), None);
    }

    #[test]
    fn test_both_name_forms_normalize_to_same_day() {
        for day in [
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
            Day::Thursday,
            Day::Friday,
        ] {
            assert_eq!(Day::from_name(day.name()), Some(day));
            assert_eq!(Day::from_name(day.short()), Some(day));
        }
    }

    #[test]
    fn test_interval_display() {
        let interval = TimeInterval::new(Day::Monday, 9 * 60, 10 * 60 + 15);
        assert_eq!(interval.to_string(), "Mon 09:00-10:15");
    }
}
