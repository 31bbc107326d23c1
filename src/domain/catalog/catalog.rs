//! Loaded event catalog.

use super::LifeEvent;
use crate::domain::foundation::EventId;
use serde::{Deserialize, Serialize};

/// The categorized list of selectable life events for one session.
///
/// # Invariants
///
/// - Event ids are unique (duplicates from the source are dropped, first wins)
/// - Every event belongs to exactly one category; the category list
///   partitions the catalog
/// - Category order is first-seen order and stable for the lifetime of
///   the catalog (it drives the questionnaire navigation sequence)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCatalog {
    events: Vec<LifeEvent>,
    categories: Vec<String>,
}

impl EventCatalog {
    /// Builds a catalog from normalized events.
    ///
    /// Duplicate ids are dropped (first occurrence wins). Category order
    /// is the order in which each category is first seen.
    pub fn new(events: Vec<LifeEvent>) -> Self {
        let mut seen_ids = Vec::new();
        let mut deduped = Vec::new();
        let mut categories: Vec<String> = Vec::new();

        for event in events {
            if seen_ids.contains(&event.id()) {
                continue;
            }
            seen_ids.push(event.id());
            if !categories.iter().any(|c| c == event.category()) {
                categories.push(event.category().to_string());
            }
            deduped.push(event);
        }

        Self {
            events: deduped,
            categories,
        }
    }

    /// Builds an empty catalog ("no questions available").
    pub fn empty() -> Self {
        Self {
            events: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Returns the distinct categories in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns all events in the catalog.
    pub fn events(&self) -> &[LifeEvent] {
        &self.events
    }

    /// Returns the events belonging to one category, in catalog order.
    pub fn events_in_category(&self, category: &str) -> Vec<&LifeEvent> {
        self.events
            .iter()
            .filter(|e| e.category() == category)
            .collect()
    }

    /// Looks up an event by id.
    pub fn event(&self, id: EventId) -> Option<&LifeEvent> {
        self.events.iter().find(|e| e.id() == id)
    }

    /// Returns true if the catalog contains the given id.
    pub fn contains(&self, id: EventId) -> bool {
        self.event(id).is_some()
    }

    /// Returns the number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events were loaded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
