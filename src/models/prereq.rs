use crate::models::CourseCode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// One prerequisite requirement: a nonempty list of alternative codes,
/// any one of which satisfies the requirement.
pub type OrGroup = Vec<CourseCode>;

/// A course's full prerequisite rule: AND of OR-groups.
///
/// The rule is satisfied only if *every* OR-group contains at least one
/// code present in the student's selected set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrerequisiteRule {
    pub groups: Vec<OrGroup>,
}

impl PrerequisiteRule {
    /// Build a rule from raw alternative lists, normalizing every code and
    /// dropping groups that end up empty.
    pub fn from_raw(groups: Vec<Vec<String>>) -> Self {
        let groups = groups
            .into_iter()
            .map(|group| {
                group
                    .iter()
                    .map(|alt| CourseCode::new(alt))
                    .filter(|code| !code.is_empty())
                    .collect::<OrGroup>()
            })
            .filter(|group| !group.is_empty())
            .collect();
        Self { groups }
    }

    /// True if every OR-group has at least one alternative in `selected`
    pub fn satisfied_by(&self, selected: &HashSet<CourseCode>) -> bool {
        self.groups
            .iter()
            .all(|group| group.iter().any(|alt| selected.contains(alt)))
    }

    /// The OR-groups with no alternative in `selected`, in rule order
    pub fn unsatisfied_groups(&self, selected: &HashSet<CourseCode>) -> Vec<&OrGroup> {
        self.groups
            .iter()
            .filter(|group| !group.iter().any(|alt| selected.contains(alt)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Catalog existence status of a course code.
///
/// Every newly observed code starts `Unknown`. Once resolved to `Exists`
/// or `Missing` it never regresses back to `Unknown`; see
/// [`ExistenceMap::resolve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistenceState {
    #[default]
    Unknown,
    Exists,
    Missing,
}

impl ExistenceState {
    /// Display symbol for CLI output
    pub fn symbol(&self) -> &'static str {
        match self {
            ExistenceState::Unknown => "?",
            ExistenceState::Exists => "✓",
            ExistenceState::Missing => "✗",
        }
    }
}

/// Existence tri-state per code, accumulated across lookup rounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistenceMap {
    entries: HashMap<CourseCode, ExistenceState>,
}

impl ExistenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a code; codes never observed read as `Unknown`
    pub fn get(&self, code: &CourseCode) -> ExistenceState {
        self.entries.get(code).copied().unwrap_or_default()
    }

    /// Record that a code has been queued for lookup. Only inserts the
    /// `Unknown` marker when the code has no entry yet, so an already
    /// resolved code is left alone.
    pub fn observe(&mut self, code: &CourseCode) {
        self.entries.entry(code.clone()).or_default();
    }

    /// Resolve a code to confirmed-exists or confirmed-missing. A resolved
    /// state never regresses to `Unknown`, but a later lookup may flip
    /// `Exists`/`Missing` if the catalog changes its answer.
    pub fn resolve(&mut self, code: CourseCode, exists: bool) {
        let state = if exists {
            ExistenceState::Exists
        } else {
            ExistenceState::Missing
        };
        self.entries.insert(code, state);
    }

    pub fn is_confirmed(&self, code: &CourseCode) -> bool {
        self.get(code) == ExistenceState::Exists
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All tracked codes in sorted order, for deterministic reporting
    pub fn codes(&self) -> Vec<&CourseCode> {
        let mut codes: Vec<&CourseCode> = self.entries.keys().collect();
        codes.sort();
        codes
    }
}

/// Incrementally built map from course code to its prerequisite rule.
///
/// Absence of a key means "not yet queried", not "no prerequisites" — a
/// course confirmed to have none carries an empty rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrerequisiteGraph {
    rules: HashMap<CourseCode, PrerequisiteRule>,
}

impl PrerequisiteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: CourseCode, rule: PrerequisiteRule) {
        self.rules.insert(code, rule);
    }

    pub fn get(&self, code: &CourseCode) -> Option<&PrerequisiteRule> {
        self.rules.get(code)
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.rules.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every code referenced inside any OR-group of any rule discovered so
    /// far, sorted for deterministic frontier ordering.
    pub fn referenced_codes(&self) -> Vec<CourseCode> {
        let mut codes = BTreeSet::new();
        for rule in self.rules.values() {
            for group in &rule.groups {
                for alt in group {
                    codes.insert(alt.clone());
                }
            }
        }
        codes.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CourseCode {
        CourseCode::new(s)
    }

    fn selected(codes: &[&str]) -> HashSet<CourseCode> {
        codes.iter().map(|s| CourseCode::new(s)).collect()
    }

    #[test]
    fn test_rule_and_of_ors() {
        // (CS170 OR CS171) AND MATH111
        let rule = PrerequisiteRule::from_raw(vec![
            vec!["CS170".into(), "CS171".into()],
            vec!["MATH111".into()],
        ]);
        assert!(rule.satisfied_by(&selected(&["CS171", "MATH111"])));
        assert!(!rule.satisfied_by(&selected(&["CS171"])));
        assert!(!rule.satisfied_by(&selected(&["MATH111"])));
        assert_eq!(rule.unsatisfied_groups(&selected(&["CS171"])).len(), 1);
    }

    #[test]
    fn test_empty_rule_is_always_satisfied() {
        let rule = PrerequisiteRule::default();
        assert!(rule.satisfied_by(&HashSet::new()));
    }

    #[test]
    fn test_from_raw_normalizes_and_drops_empty_groups() {
        let rule = PrerequisiteRule::from_raw(vec![
            vec!["cs 170".into()],
            vec!["".into(), "  ".into()],
        ]);
        assert_eq!(rule.groups, vec![vec![code("CS170")]]);
    }

    #[test]
    fn test_existence_defaults_to_unknown() {
        let map = ExistenceMap::new();
        assert_eq!(map.get(&code("CS170")), ExistenceState::Unknown);
    }

    #[test]
    fn test_observe_does_not_clobber_resolved_state() {
        let mut map = ExistenceMap::new();
        map.resolve(code("CS170"), true);
        map.observe(&code("CS170"));
        assert_eq!(map.get(&code("CS170")), ExistenceState::Exists);

        map.resolve(code("FAKE101"), false);
        map.observe(&code("FAKE101"));
        assert_eq!(map.get(&code("FAKE101")), ExistenceState::Missing);
    }

    #[test]
    fn test_graph_referenced_codes_sorted_and_deduped() {
        let mut graph = PrerequisiteGraph::new();
        graph.insert(
            code("CS253"),
            PrerequisiteRule::from_raw(vec![vec!["CS224".into(), "CS171".into()]]),
        );
        graph.insert(
            code("CS224"),
            PrerequisiteRule::from_raw(vec![vec!["CS171".into()]]),
        );
        assert_eq!(graph.referenced_codes(), vec![code("CS171"), code("CS224")]);
    }

    #[test]
    fn test_graph_absence_is_not_no_prereqs() {
        let graph = PrerequisiteGraph::new();
        assert!(graph.get(&code("CS170")).is_none());
        assert!(!graph.contains(&code("CS170")));
    }
}
