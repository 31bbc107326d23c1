//! Scoring of a selection against the event catalog.

use crate::domain::catalog::EventCatalog;
use crate::domain::foundation::EventId;
use std::collections::BTreeSet;

/// Pure scoring over a selection of event ids.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Sums the weights of every selected event found in the catalog.
    ///
    /// Stale ids (selected but absent from the catalog) are ignored, not
    /// errors. No side effects, no ordering dependence; monotonic
    /// non-decreasing as the selection grows since weights are
    /// non-negative. The sum saturates at `u32::MAX` so extreme catalog
    /// weights can never wrap the score into a lower band.
    pub fn score(catalog: &EventCatalog, selection: &BTreeSet<EventId>) -> u32 {
        selection
            .iter()
            .filter_map(|id| catalog.event(*id))
            .fold(0u32, |acc, event| acc.saturating_add(event.weight()))
    }
}
