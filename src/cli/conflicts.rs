use crate::models::MeetingPattern;
use crate::parser::parse_meeting_string;
use crate::validator::{has_hard_conflict, overlapping_courses};
use crate::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ConflictEntry {
    course: String,
    meeting: String,
    parsed_intervals: usize,
    hard_conflict: bool,
    overlaps: Vec<String>,
}

/// Check meeting patterns for pairwise conflicts and hard conflicts
/// against blocked time.
///
/// Each entry is either `NAME=<days> <range>` or a bare meeting string
/// (auto-named). Unparsable patterns (e.g. "TBA") become empty and never
/// conflict.
pub async fn run(meetings: Vec<String>, blocked: Option<&Path>, json: bool) -> Result<()> {
    if meetings.is_empty() {
        anyhow::bail!("No meeting entries given");
    }
    let blocked = super::load_blocked(blocked)?;

    let courses: Vec<(String, String, MeetingPattern)> = meetings
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let (name, meeting) = match entry.split_once('=') {
                Some((name, meeting)) => (name.trim().to_string(), meeting.trim().to_string()),
                None => (format!("course{}", i + 1), entry.trim().to_string()),
            };
            let pattern = parse_meeting_string(&meeting);
            (name, meeting, pattern)
        })
        .collect();

    let named: Vec<(String, MeetingPattern)> = courses
        .iter()
        .map(|(name, _, pattern)| (name.clone(), pattern.clone()))
        .collect();

    let entries: Vec<ConflictEntry> = courses
        .iter()
        .map(|(name, meeting, pattern)| {
            let overlaps = overlapping_courses(pattern, &named)
                .into_iter()
                .filter(|other| *other != name)
                .map(str::to_string)
                .collect();
            ConflictEntry {
                course: name.clone(),
                meeting: meeting.clone(),
                parsed_intervals: pattern.len(),
                hard_conflict: has_hard_conflict(pattern, &blocked),
                overlaps,
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "Conflict report".cyan().bold());
    println!();
    for entry in &entries {
        println!("   {} ({})", entry.course.bold(), entry.meeting);
        if entry.parsed_intervals == 0 {
            println!("      {}", "no parsable meeting times (TBA?)".bright_black());
            continue;
        }
        if entry.hard_conflict {
            println!("      {}", "✗ conflicts with blocked time".red());
        }
        if !entry.overlaps.is_empty() {
            println!(
                "      {} {}",
                "✗ overlaps".red(),
                entry.overlaps.join(", ")
            );
        }
        if !entry.hard_conflict && entry.overlaps.is_empty() {
            println!("      {}", "✓ no conflicts".green());
        }
    }

    Ok(())
}
