//! Life event value object.

use crate::domain::foundation::{EventId, ValidationError};
use serde::{Deserialize, Serialize};

/// Category assigned when the source record carries none.
pub const DEFAULT_CATEGORY: &str = "Général";

/// A weighted life occurrence the user may have experienced.
///
/// # Invariants
///
/// - `text` is non-empty
/// - `weight` is non-negative by construction (`u32`)
/// - `category` is non-empty (defaulted upstream when absent)
///
/// Events are immutable once loaded for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeEvent {
    id: EventId,
    text: String,
    weight: u32,
    category: String,
}

impl LifeEvent {
    /// Creates a new life event.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if text is blank after trimming
    pub fn new(
        id: EventId,
        text: impl Into<String>,
        weight: u32,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }

        let category = category.into();
        let category = if category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category
        };

        Ok(Self {
            id,
            text,
            weight,
            category,
        })
    }

    /// Returns the event id.
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Returns the display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the stress weight.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Returns the category name.
    pub fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_keeps_fields() {
        let event = LifeEvent::new(EventId::new(1), "Déménagement", 20, "Vie personnelle").unwrap();
        assert_eq!(event.id(), EventId::new(1));
        assert_eq!(event.text(), "Déménagement");
        assert_eq!(event.weight(), 20);
        assert_eq!(event.category(), "Vie personnelle");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(LifeEvent::new(EventId::new(1), "   ", 20, "Travail").is_err());
    }

    #[test]
    fn blank_category_falls_back_to_default() {
        let event = LifeEvent::new(EventId::new(1), "Un évènement", 10, "").unwrap();
        assert_eq!(event.category(), DEFAULT_CATEGORY);
    }

    #[test]
    fn zero_weight_is_allowed() {
        let event = LifeEvent::new(EventId::new(1), "Rien de grave", 0, "Divers").unwrap();
        assert_eq!(event.weight(), 0);
    }
}
