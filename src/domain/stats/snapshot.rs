//! Derived statistics snapshot.

use crate::domain::diagnostic::StressLevel;
use crate::domain::foundation::Timestamp;
use serde::{Deserialize, Serialize};

/// Direction of the recent score trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Improving,
    Stable,
    Worsening,
    InsufficientData,
}

/// Aggregate view over the diagnostic history.
///
/// Derived on demand, never persisted; recomputing over an unchanged
/// history yields an identical snapshot.
///
/// The level distribution is an insertion-ordered list rather than a
/// map: insertion order (order of first appearance while walking the
/// records most-recent-first) is the tie-break rule for
/// `most_frequent_level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_diagnostics: usize,
    pub average_events_count: u32,
    pub level_distribution: Vec<(StressLevel, u32)>,
    pub most_frequent_level: Option<StressLevel>,
    pub recent_trend: Trend,
    pub last_diagnostic_date: Option<Timestamp>,
}

impl StatsSnapshot {
    /// The snapshot for an empty (or unavailable) history.
    pub fn empty() -> Self {
        Self {
            total_diagnostics: 0,
            average_events_count: 0,
            level_distribution: Vec::new(),
            most_frequent_level: None,
            recent_trend: Trend::InsufficientData,
            last_diagnostic_date: None,
        }
    }

    /// Count for one level, zero when the level never occurred.
    pub fn count_for(&self, level: StressLevel) -> u32 {
        self.level_distribution
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}
