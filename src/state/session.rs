//! ValidationSession - owns per-session validation state
//!
//! The existence map and prerequisite graph are scoped to one active
//! transcript/selection session. Whenever the displayed code set changes
//! identity the state is rebuilt from scratch, never merged; a generation
//! counter tags each run so results of a superseded run are discarded.

use crate::models::CourseCode;
use crate::validator::ValidationOutcome;

/// Handle for one validation run. Carries the generation the run belongs
/// to and a snapshot of the codes to validate.
#[derive(Debug, Clone, PartialEq)]
pub struct RunTicket {
    pub generation: u64,
    pub codes: Vec<CourseCode>,
}

/// Owner of the validation state for one active session.
///
/// Consumers read the latest completed generation only. Validation must
/// not run concurrently with itself: [`ValidationSession::begin`] refuses
/// to hand out a ticket while a run is in flight, and the caller is
/// responsible for re-triggering with the latest code set once the
/// in-flight run completes.
#[derive(Debug, Default)]
pub struct ValidationSession {
    codes: Vec<CourseCode>,
    generation: u64,
    in_flight: bool,
    outcome: Option<ValidationOutcome>,
}

impl ValidationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the displayed code set. Returns `true` when the identity
    /// actually changed, in which case the generation is bumped and any
    /// previously completed outcome is dropped (reset, not merged). Order
    /// and duplicates do not affect identity.
    pub fn set_codes(&mut self, codes: &[CourseCode]) -> bool {
        let mut identity: Vec<CourseCode> = Vec::new();
        for code in codes {
            if !code.is_empty() && !identity.contains(code) {
                identity.push(code.clone());
            }
        }
        identity.sort();

        if identity == self.codes {
            return false;
        }
        self.codes = identity;
        self.generation += 1;
        self.outcome = None;
        true
    }

    /// Start a validation run. Returns `None` while another run is in
    /// flight (reentrancy guard) or when there is nothing to validate.
    pub fn begin(&mut self) -> Option<RunTicket> {
        if self.in_flight || self.codes.is_empty() {
            return None;
        }
        self.in_flight = true;
        Some(RunTicket {
            generation: self.generation,
            codes: self.codes.clone(),
        })
    }

    /// Finish a run. The outcome is adopted only when the ticket's
    /// generation still matches the session's; a run whose input identity
    /// changed mid-flight is superseded and its outcome discarded.
    /// Returns whether the outcome was adopted.
    pub fn complete(&mut self, ticket: RunTicket, outcome: ValidationOutcome) -> bool {
        self.in_flight = false;
        if ticket.generation != self.generation {
            return false;
        }
        self.outcome = Some(outcome);
        true
    }

    /// The latest completed outcome for the current generation, if any
    pub fn outcome(&self) -> Option<&ValidationOutcome> {
        self.outcome.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn codes(&self) -> &[CourseCode] {
        &self.codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<CourseCode> {
        list.iter().map(|s| CourseCode::new(s)).collect()
    }

    #[test]
    fn test_identity_change_bumps_generation_and_resets() {
        let mut session = ValidationSession::new();
        assert!(session.set_codes(&codes(&["CS170", "CS171"])));
        assert_eq!(session.generation(), 1);

        let ticket = session.begin().unwrap();
        assert!(session.complete(ticket, ValidationOutcome::default()));
        assert!(session.outcome().is_some());

        assert!(session.set_codes(&codes(&["CS170", "CS224"])));
        assert_eq!(session.generation(), 2);
        // previous outcome dropped, not merged
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_same_identity_is_a_noop() {
        let mut session = ValidationSession::new();
        assert!(session.set_codes(&codes(&["CS170", "CS171"])));
        // order and duplicates do not change identity
        assert!(!session.set_codes(&codes(&["CS171", "CS170", "cs 170"])));
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_reentrancy_guard() {
        let mut session = ValidationSession::new();
        session.set_codes(&codes(&["CS170"]));

        let ticket = session.begin().unwrap();
        // a re-trigger while in flight is ignored
        assert!(session.begin().is_none());

        session.complete(ticket, ValidationOutcome::default());
        // after completion the caller may trigger again
        assert!(session.begin().is_some());
    }

    #[test]
    fn test_stale_generation_discarded() {
        let mut session = ValidationSession::new();
        session.set_codes(&codes(&["CS170"]));
        let stale = session.begin().unwrap();

        // identity changes while the run is in flight
        session.set_codes(&codes(&["CS170", "QTM100"]));

        assert!(!session.complete(stale, ValidationOutcome::default()));
        assert!(session.outcome().is_none());
        // guard released, fresh run possible for the new generation
        let fresh = session.begin().unwrap();
        assert_eq!(fresh.generation, 2);
        assert_eq!(fresh.codes.len(), 2);
    }

    #[test]
    fn test_begin_with_no_codes() {
        let mut session = ValidationSession::new();
        assert!(session.begin().is_none());
    }
}
