use crate::models::{
    CourseCode, ExistenceMap, ExistenceState, PrerequisiteGraph, PrerequisiteRule,
    ValidationWarning,
};
use crate::services::CatalogLookup;
use std::collections::HashSet;

/// Hard bound on frontier-expansion rounds. Bounds the discovery walk on
/// pathological or cyclic prerequisite graphs regardless of lookup failures.
pub const MAX_LOOKUP_ROUNDS: usize = 5;

/// Everything one discovery run produced: the rule graph, the existence
/// map, surfaced lookup warnings, and how many rounds actually ran.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOutcome {
    pub graph: PrerequisiteGraph,
    pub existence: ExistenceMap,
    pub warnings: Vec<ValidationWarning>,
    pub rounds: usize,
}

/// Incrementally discovers the prerequisite closure of a code set through
/// batched catalog lookups.
///
/// Each round issues exactly one batched lookup for the codes queued by the
/// previous round's discoveries, awaited before the next round starts, so
/// at most one external call is ever in flight.
pub struct PrereqValidator<'a> {
    catalog: &'a dyn CatalogLookup,
    max_rounds: usize,
}

impl<'a> PrereqValidator<'a> {
    pub fn new(catalog: &'a dyn CatalogLookup) -> Self {
        Self {
            catalog,
            max_rounds: MAX_LOOKUP_ROUNDS,
        }
    }

    /// Override the round bound (tests and tooling)
    pub fn with_max_rounds(catalog: &'a dyn CatalogLookup, max_rounds: usize) -> Self {
        Self {
            catalog,
            max_rounds,
        }
    }

    /// Run breadth-expanding discovery from the given code frontier.
    ///
    /// Per round: batch = frontier minus already-queried codes; stop when
    /// the batch is empty or the round bound is hit. Batch codes are marked
    /// `Unknown` where unset before the lookup. On success the returned
    /// existence flags are applied, returned rules recorded, and any
    /// rule-bearing code still `Unknown` promoted to `Exists`. On failure
    /// the batch's existence states are left exactly as they were and a
    /// warning is recorded. The next frontier is every code referenced in
    /// any discovered OR-group that has not been queried yet.
    pub async fn discover(&self, codes: &[CourseCode]) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::default();
        let mut seen: HashSet<CourseCode> = HashSet::new();

        let mut frontier: Vec<CourseCode> = Vec::new();
        for code in codes {
            if !code.is_empty() && !frontier.contains(code) {
                frontier.push(code.clone());
            }
        }

        for round in 1..=self.max_rounds {
            let batch: Vec<CourseCode> = frontier
                .iter()
                .filter(|code| !seen.contains(*code))
                .cloned()
                .collect();
            if batch.is_empty() {
                break;
            }

            seen.extend(batch.iter().cloned());
            for code in &batch {
                outcome.existence.observe(code);
            }
            outcome.rounds = round;

            match self.catalog.lookup(&batch).await {
                Ok(response) if response.success => {
                    for (raw, exists) in &response.exists {
                        outcome.existence.resolve(CourseCode::new(raw), *exists);
                    }
                    for (raw, groups) in &response.prereqs {
                        let code = CourseCode::new(raw);
                        let rule = PrerequisiteRule::from_raw(groups.clone());
                        // A prerequisite entry implies the catalog knows the code
                        if outcome.existence.get(&code) == ExistenceState::Unknown {
                            outcome.existence.resolve(code.clone(), true);
                        }
                        outcome.graph.insert(code, rule);
                    }
                }
                Ok(_) => {
                    outcome.warnings.push(ValidationWarning::new(
                        round,
                        format!("catalog rejected lookup for {} codes", batch.len()),
                    ));
                }
                Err(err) => {
                    outcome
                        .warnings
                        .push(ValidationWarning::new(round, err.to_string()));
                }
            }

            frontier = graph_frontier(&outcome.graph, &seen);
        }

        outcome
    }
}

/// Codes referenced by discovered rules that have not been queried yet
fn graph_frontier(graph: &PrerequisiteGraph, seen: &HashSet<CourseCode>) -> Vec<CourseCode> {
    graph
        .referenced_codes()
        .into_iter()
        .filter(|code| !seen.contains(code))
        .collect()
}

/// Compute the transitive set of unmet prerequisites for one course.
///
/// An OR-group is satisfied when any alternative is in `selected`; a rule
/// only when every group is. Checking is skipped entirely for codes whose
/// existence is not confirmed (fail-open: an unresolved code reports
/// nothing rather than guessing). Missing prerequisites are expanded
/// recursively with a `visited` set so cyclic rule graphs terminate; codes
/// already selected never appear in the result.
pub fn missing_prerequisites(
    code: &CourseCode,
    graph: &PrerequisiteGraph,
    existence: &ExistenceMap,
    selected: &HashSet<CourseCode>,
) -> Vec<CourseCode> {
    let mut visited: HashSet<CourseCode> = HashSet::new();
    let mut missing: Vec<CourseCode> = Vec::new();
    collect_missing(code, graph, existence, selected, &mut visited, &mut missing);
    missing
}

fn collect_missing(
    code: &CourseCode,
    graph: &PrerequisiteGraph,
    existence: &ExistenceMap,
    selected: &HashSet<CourseCode>,
    visited: &mut HashSet<CourseCode>,
    missing: &mut Vec<CourseCode>,
) {
    // a code is never expanded twice in one closure computation
    if !visited.insert(code.clone()) {
        return;
    }
    if !existence.is_confirmed(code) {
        return;
    }
    let Some(rule) = graph.get(code) else {
        return;
    };

    for group in rule.unsatisfied_groups(selected) {
        for alternative in group {
            if selected.contains(alternative) {
                continue;
            }
            if !missing.contains(alternative) {
                missing.push(alternative.clone());
            }
            collect_missing(alternative, graph, existence, selected, visited, missing);
        }
    }
}
