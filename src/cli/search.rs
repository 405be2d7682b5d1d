use crate::models::CourseRecord;
use crate::parser::record_pattern;
use crate::services::{CatalogLookup, HttpCatalog};
use crate::validator::has_hard_conflict;
use crate::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct SearchResult {
    #[serde(flatten)]
    record: CourseRecord,
    hard_conflict: bool,
}

/// Search the catalog and flag results that collide with blocked time.
///
/// The hard-conflict flag is what the UI consults before allowing a course
/// to be added; a course with no parsable meeting times never conflicts.
pub async fn run(
    query: &str,
    limit: usize,
    catalog_url: Option<String>,
    blocked: Option<&Path>,
    json: bool,
) -> Result<()> {
    let blocked = super::load_blocked(blocked)?;
    let catalog = HttpCatalog::new(super::resolve_catalog_url(catalog_url));

    let records = catalog
        .search(query, limit)
        .await
        .context("Course search failed")?;

    let results: Vec<SearchResult> = records
        .into_iter()
        .map(|record| {
            let pattern = record_pattern(&record);
            SearchResult {
                hard_conflict: has_hard_conflict(&pattern, &blocked),
                record,
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", format!("No courses found for '{query}'").yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("{} courses for '{}'", results.len(), query)
            .cyan()
            .bold()
    );
    println!();
    for result in &results {
        let flag = if result.hard_conflict {
            "✗".red()
        } else {
            "✓".green()
        };
        println!(
            "   {} {} {} ({} cr)",
            flag,
            result.record.code.bold(),
            result.record.title,
            result.record.credits
        );
        if !result.record.meeting_time.is_empty() {
            println!("      {}", result.record.meeting_time);
        }
        if !result.record.professor.is_empty() {
            println!("      {}", result.record.professor.bright_black());
        }
        if result.hard_conflict {
            println!("      {}", "conflicts with blocked time".red());
        }
    }

    Ok(())
}
