use crate::models::{CourseCode, CourseValidation, ExistenceState, ValidationReport};
use crate::services::HttpCatalog;
use crate::state::ValidationSession;
use crate::validator::{missing_prerequisites, PrereqValidator};
use crate::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::time::Duration;

/// Validate course codes against the catalog's prerequisite graph.
///
/// Runs the batched frontier discovery, then reports per-code existence
/// and the transitive missing prerequisites given the `--taken` set.
/// Lookup failures are surfaced as warnings; affected codes stay unknown.
pub async fn run(
    codes: Vec<String>,
    taken: Vec<String>,
    catalog_url: Option<String>,
    json: bool,
) -> Result<()> {
    let codes: Vec<CourseCode> = codes
        .iter()
        .map(|raw| CourseCode::new(raw))
        .filter(|code| !code.is_empty())
        .collect();
    if codes.is_empty() {
        anyhow::bail!("No valid course codes given");
    }
    let taken: HashSet<CourseCode> = taken
        .iter()
        .map(|raw| CourseCode::new(raw))
        .filter(|code| !code.is_empty())
        .collect();

    let catalog = HttpCatalog::new(super::resolve_catalog_url(catalog_url));
    let validator = PrereqValidator::new(&catalog);

    let mut session = ValidationSession::new();
    session.set_codes(&codes);
    let Some(ticket) = session.begin() else {
        anyhow::bail!("Validation already in progress");
    };

    let spinner = if json {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style);
        }
        bar.set_message("Querying catalog...");
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    };

    let outcome = validator.discover(&ticket.codes).await;
    spinner.finish_and_clear();

    let generation = ticket.generation;
    session.complete(ticket, outcome);
    let Some(outcome) = session.outcome() else {
        anyhow::bail!("Validation run was superseded");
    };

    let courses: Vec<CourseValidation> = codes
        .iter()
        .map(|code| CourseValidation {
            code: code.clone(),
            existence: outcome.existence.get(code),
            missing_prerequisites: missing_prerequisites(
                code,
                &outcome.graph,
                &outcome.existence,
                &taken,
            ),
        })
        .collect();
    let report = ValidationReport::new(generation, outcome.rounds, courses, outcome.warnings.clone());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Prerequisite validation".cyan().bold());
    println!(
        "   {} rounds, generated {}",
        report.rounds,
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!();

    for course in &report.courses {
        let status = match course.existence {
            ExistenceState::Exists => course.existence.symbol().green(),
            ExistenceState::Missing => course.existence.symbol().red(),
            ExistenceState::Unknown => course.existence.symbol().yellow(),
        };
        println!("   {} {}", status, course.code.to_string().bold());
        match course.existence {
            ExistenceState::Missing => {
                println!("      {}", "not found in catalog".red());
            }
            ExistenceState::Unknown => {
                println!(
                    "      {}",
                    "existence unresolved, prerequisite check skipped".yellow()
                );
            }
            ExistenceState::Exists => {
                if course.missing_prerequisites.is_empty() {
                    println!("      {}", "prerequisites satisfied".green());
                } else {
                    let list = course
                        .missing_prerequisites
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<&str>>()
                        .join(", ");
                    println!("      {} {}", "missing prerequisites:".red(), list);
                }
            }
        }
    }

    if !report.warnings.is_empty() {
        println!();
        for warning in &report.warnings {
            println!(
                "   {} round {}: {}",
                "⚠".yellow(),
                warning.round,
                warning.message.yellow()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_rejects_empty_code_list() {
        assert!(run(vec![], vec![], None, false).await.is_err());
        assert!(run(vec!["   ".into()], vec![], None, true).await.is_err());
    }
}
