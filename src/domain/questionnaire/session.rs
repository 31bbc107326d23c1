//! Questionnaire session aggregate.
//!
//! One session walks the catalog's categories in order, accumulates a
//! selection of life events, and produces exactly one
//! [`DiagnosticResult`] on submission. A fresh session is created for
//! every new diagnostic; sessions are never reused.

use crate::domain::catalog::{EventCatalog, LifeEvent};
use crate::domain::diagnostic::{DiagnosticResult, ScoringEngine};
use crate::domain::foundation::{DomainError, ErrorCode, EventId, StateMachine};
use std::collections::BTreeSet;

use super::SessionState;

/// Stateful walk through the catalog's categories.
///
/// # Invariants
///
/// - `state` only changes through `toggle`/`next`/`previous`
/// - the selection only contains ids present in the catalog
/// - `result` is `Some` exactly when `state` is `Complete`
#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    catalog: EventCatalog,
    state: SessionState,
    selection: BTreeSet<EventId>,
    result: Option<DiagnosticResult>,
}

impl QuestionnaireSession {
    /// Starts a session at the first category, or `Empty` when the
    /// catalog loaded no categories.
    pub fn new(catalog: EventCatalog) -> Self {
        let state = if catalog.categories().is_empty() {
            SessionState::Empty
        } else {
            SessionState::AtCategory(0)
        };
        Self {
            catalog,
            state,
            selection: BTreeSet::new(),
            result: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Returns the current selection.
    pub fn selection(&self) -> &BTreeSet<EventId> {
        &self.selection
    }

    /// Returns the category currently shown, if any.
    pub fn current_category(&self) -> Option<&str> {
        match self.state {
            SessionState::AtCategory(index) => {
                self.catalog.categories().get(index).map(String::as_str)
            }
            _ => None,
        }
    }

    /// Returns the events of the current category, in catalog order.
    pub fn current_events(&self) -> Vec<&LifeEvent> {
        match self.current_category() {
            Some(category) => self.catalog.events_in_category(category),
            None => Vec::new(),
        }
    }

    /// Returns whether an event is currently selected.
    pub fn is_selected(&self, id: EventId) -> bool {
        self.selection.contains(&id)
    }

    /// Progress through the questionnaire as an integer percentage.
    ///
    /// Submission counts as its own step, so this never reaches 100
    /// while still answering: at category `i` of `n` the value is
    /// `(i + 1) * 100 / (n + 1)`.
    pub fn progress(&self) -> u8 {
        match self.state {
            SessionState::Empty => 0,
            SessionState::AtCategory(index) => {
                let steps = self.catalog.categories().len() + 1;
                ((index + 1) * 100 / steps) as u8
            }
            SessionState::Submitting | SessionState::Complete => 100,
        }
    }

    /// Returns the result once the session is complete.
    pub fn result(&self) -> Option<&DiagnosticResult> {
        self.result.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Flips selection membership of an event.
    ///
    /// Returns whether the event is selected after the call. Outside of
    /// an answerable state the call has no effect and reports current
    /// membership unchanged.
    ///
    /// # Errors
    ///
    /// - `UnknownEvent` if the id is not in the catalog
    pub fn toggle(&mut self, id: EventId) -> Result<bool, DomainError> {
        if !self.catalog.contains(id) {
            return Err(DomainError::new(
                ErrorCode::UnknownEvent,
                format!("Event {} is not in the loaded catalog", id),
            ));
        }
        if !self.state.is_answerable() {
            return Ok(self.selection.contains(&id));
        }

        if self.selection.remove(&id) {
            Ok(false)
        } else {
            self.selection.insert(id);
            Ok(true)
        }
    }

    /// Advances to the next category, or submits from the last one.
    ///
    /// Submission scores the selection, classifies it, and attaches the
    /// recommendations, leaving the session `Complete` with the result
    /// exposed through [`result`](Self::result).
    ///
    /// # Errors
    ///
    /// - `EmptySelection` when submitting with nothing selected; the
    ///   session stays at the last category
    /// - `InvalidStateTransition` when the session is not answerable
    pub fn next(&mut self) -> Result<SessionState, DomainError> {
        let index = self.answerable_index()?;
        let last = self.catalog.categories().len() - 1;

        if index < last {
            self.state = self
                .state
                .transition_to(SessionState::AtCategory(index + 1))?;
            return Ok(self.state);
        }

        // Last category: submit.
        if self.selection.is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptySelection,
                "Sélectionnez au moins un évènement avant de valider",
            ));
        }

        self.state = self.state.transition_to(SessionState::Submitting)?;
        let score = ScoringEngine::score(&self.catalog, &self.selection);
        self.result = Some(DiagnosticResult::from_score(score, self.selection.len()));
        self.state = self.state.transition_to(SessionState::Complete)?;
        Ok(self.state)
    }

    /// Steps back one category; no-op at the first one.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` when the session is not answerable
    pub fn previous(&mut self) -> Result<SessionState, DomainError> {
        let index = self.answerable_index()?;
        if index > 0 {
            self.state = self
                .state
                .transition_to(SessionState::AtCategory(index - 1))?;
        }
        Ok(self.state)
    }

    fn answerable_index(&self) -> Result<usize, DomainError> {
        match self.state {
            SessionState::AtCategory(index) => Ok(index),
            SessionState::Complete => Err(DomainError::new(
                ErrorCode::SessionComplete,
                "The session already produced its result",
            )),
            _ => Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot navigate from state {:?}", self.state),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostic::StressLevel;
    use crate::domain::foundation::ErrorCode;

    fn work_only_catalog() -> EventCatalog {
        EventCatalog::new(vec![
            LifeEvent::new(EventId::new(1), "Surcharge de travail", 50, "Travail").unwrap(),
            LifeEvent::new(EventId::new(2), "Conflit avec un collègue", 60, "Travail").unwrap(),
        ])
    }

    fn two_category_catalog() -> EventCatalog {
        EventCatalog::new(vec![
            LifeEvent::new(EventId::new(1), "Surcharge de travail", 50, "Travail").unwrap(),
            LifeEvent::new(EventId::new(2), "Déménagement", 20, "Vie personnelle").unwrap(),
            LifeEvent::new(EventId::new(3), "Maladie d'un proche", 40, "Vie personnelle").unwrap(),
        ])
    }

    #[test]
    fn new_session_starts_at_first_category() {
        let session = QuestionnaireSession::new(two_category_catalog());
        assert_eq!(session.state(), SessionState::AtCategory(0));
        assert_eq!(session.current_category(), Some("Travail"));
    }

    #[test]
    fn empty_catalog_yields_empty_state() {
        let session = QuestionnaireSession::new(EventCatalog::empty());
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.current_events().is_empty());
        assert_eq!(session.progress(), 0);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut session = QuestionnaireSession::new(work_only_catalog());
        assert!(session.toggle(EventId::new(1)).unwrap());
        assert!(session.is_selected(EventId::new(1)));
        assert!(!session.toggle(EventId::new(1)).unwrap());
        assert!(!session.is_selected(EventId::new(1)));
    }

    #[test]
    fn toggle_rejects_unknown_event() {
        let mut session = QuestionnaireSession::new(work_only_catalog());
        let err = session.toggle(EventId::new(99)).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownEvent);
    }

    #[test]
    fn next_walks_categories_in_order() {
        let mut session = QuestionnaireSession::new(two_category_catalog());
        session.toggle(EventId::new(1)).unwrap();
        assert_eq!(session.next().unwrap(), SessionState::AtCategory(1));
        assert_eq!(session.current_category(), Some("Vie personnelle"));
    }

    #[test]
    fn previous_steps_back_and_stops_at_zero() {
        let mut session = QuestionnaireSession::new(two_category_catalog());
        session.toggle(EventId::new(1)).unwrap();
        session.next().unwrap();
        assert_eq!(session.previous().unwrap(), SessionState::AtCategory(0));
        // No-op at the first category.
        assert_eq!(session.previous().unwrap(), SessionState::AtCategory(0));
    }

    #[test]
    fn submitting_both_work_events_scores_110_faible() {
        let mut session = QuestionnaireSession::new(work_only_catalog());
        session.toggle(EventId::new(1)).unwrap();
        session.toggle(EventId::new(2)).unwrap();

        assert_eq!(session.next().unwrap(), SessionState::Complete);
        let result = session.result().unwrap();
        assert_eq!(result.score(), 110);
        assert_eq!(result.level(), StressLevel::Faible);
        assert_eq!(result.selected_events_count(), 2);
    }

    #[test]
    fn empty_selection_blocks_submission() {
        let mut session = QuestionnaireSession::new(work_only_catalog());
        let err = session.next().unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptySelection);
        // Session stays at the last category, still answerable.
        assert_eq!(session.state(), SessionState::AtCategory(0));
        assert!(session.result().is_none());
    }

    #[test]
    fn selection_in_earlier_category_allows_submission_from_last() {
        let mut session = QuestionnaireSession::new(two_category_catalog());
        session.toggle(EventId::new(1)).unwrap();
        session.next().unwrap();
        assert_eq!(session.next().unwrap(), SessionState::Complete);
        assert_eq!(session.result().unwrap().score(), 50);
    }

    #[test]
    fn toggle_after_completion_has_no_effect() {
        let mut session = QuestionnaireSession::new(work_only_catalog());
        session.toggle(EventId::new(1)).unwrap();
        session.next().unwrap();
        assert!(session.state().is_complete());

        // Reports membership without flipping it.
        assert!(session.toggle(EventId::new(1)).unwrap());
        assert!(session.is_selected(EventId::new(1)));
    }

    #[test]
    fn next_after_completion_fails() {
        let mut session = QuestionnaireSession::new(work_only_catalog());
        session.toggle(EventId::new(1)).unwrap();
        session.next().unwrap();
        let err = session.next().unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionComplete);
    }

    #[test]
    fn navigation_from_empty_state_fails() {
        let mut session = QuestionnaireSession::new(EventCatalog::empty());
        assert_eq!(
            session.next().unwrap_err().code,
            ErrorCode::InvalidStateTransition
        );
    }

    #[test]
    fn progress_counts_submission_as_a_step() {
        let mut session = QuestionnaireSession::new(two_category_catalog());
        // Two categories + submission: 1/3 then 2/3 then 100.
        assert_eq!(session.progress(), 33);
        session.toggle(EventId::new(1)).unwrap();
        session.next().unwrap();
        assert_eq!(session.progress(), 66);
        session.next().unwrap();
        assert_eq!(session.progress(), 100);
    }
}
