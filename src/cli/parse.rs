use crate::models::TranscriptCategory;
use crate::parser::parse_transcript;
use crate::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Parse a transcript text file into category-tagged course codes.
///
/// The input is the raw text an external document reader extracted from
/// the transcript PDF; malformed input yields empty sets, never an error.
pub async fn run(transcript: &Path, json: bool) -> Result<()> {
    let raw = std::fs::read_to_string(transcript)
        .with_context(|| format!("Failed to read transcript {}", transcript.display()))?;

    let set = parse_transcript(&raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&set)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Parsed transcript: {}", transcript.display())
            .cyan()
            .bold()
    );
    println!();

    for category in [
        TranscriptCategory::TransferIncoming,
        TranscriptCategory::TestIncoming,
        TranscriptCategory::AcademicRecord,
    ] {
        let codes = set.category(category);
        println!("   {} ({}):", category.label().bold(), codes.len());
        if codes.is_empty() {
            println!("      {}", "(none)".bright_black());
        }
        for code in codes {
            println!("      {code}");
        }
    }

    println!();
    if set.is_empty() {
        println!("{}", "No course codes found.".yellow());
    } else {
        println!("{}", format!("{} codes extracted", set.total()).green());
    }

    Ok(())
}
