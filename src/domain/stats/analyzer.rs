//! Pure aggregation over the diagnostic history.

use super::{StatsSnapshot, Trend};
use crate::domain::diagnostic::StressLevel;
use crate::domain::history::HistoryRecord;

/// Number of records needed before a trend is computed.
pub const TREND_WINDOW: usize = 6;

/// Absolute score difference below which the trend is considered flat.
pub const TREND_STABLE_MARGIN: f64 = 20.0;

/// Pure statistics over an ordered (most-recent-first) history.
pub struct StatisticsAnalyzer;

impl StatisticsAnalyzer {
    /// Computes the snapshot for a most-recent-first record list.
    ///
    /// Idempotent: the same list always yields the same snapshot. An
    /// empty list yields [`StatsSnapshot::empty`] rather than an error,
    /// so unavailable-history paths degrade to an empty view.
    pub fn analyze(records: &[HistoryRecord]) -> StatsSnapshot {
        if records.is_empty() {
            return StatsSnapshot::empty();
        }

        let total = records.len();
        let events_sum: usize = records.iter().map(|r| r.selected_events_count()).sum();
        // Round half up without going through floats.
        let average_events_count = ((events_sum * 2 + total) / (total * 2)) as u32;

        let level_distribution = Self::distribution(records);
        let most_frequent_level = Self::most_frequent(&level_distribution);

        StatsSnapshot {
            total_diagnostics: total,
            average_events_count,
            level_distribution,
            most_frequent_level,
            recent_trend: Self::trend(records),
            last_diagnostic_date: records.first().map(|r| r.created_at()),
        }
    }

    /// Counts records per level, insertion-ordered by first appearance
    /// while walking most-recent-first.
    fn distribution(records: &[HistoryRecord]) -> Vec<(StressLevel, u32)> {
        let mut distribution: Vec<(StressLevel, u32)> = Vec::new();
        for record in records {
            match distribution.iter_mut().find(|(l, _)| *l == record.level()) {
                Some((_, count)) => *count += 1,
                None => distribution.push((record.level(), 1)),
            }
        }
        distribution
    }

    /// First level to reach the maximum count in insertion order.
    fn most_frequent(distribution: &[(StressLevel, u32)]) -> Option<StressLevel> {
        let mut best: Option<(StressLevel, u32)> = None;
        for (level, count) in distribution {
            match best {
                Some((_, best_count)) if *count <= best_count => {}
                _ => best = Some((*level, *count)),
            }
        }
        best.map(|(level, _)| level)
    }

    /// Compares the 3 most recent scores against the 3 before them.
    ///
    /// Requires at least [`TREND_WINDOW`] records; a drop of more than
    /// [`TREND_STABLE_MARGIN`] points is Improving, a rise of more than
    /// that is Worsening, anything in between is Stable.
    fn trend(records: &[HistoryRecord]) -> Trend {
        if records.len() < TREND_WINDOW {
            return Trend::InsufficientData;
        }

        let mean = |window: &[HistoryRecord]| {
            window.iter().map(|r| r.score() as f64).sum::<f64>() / window.len() as f64
        };
        let recent_avg = mean(&records[0..3]);
        let previous_avg = mean(&records[3..6]);
        let diff = recent_avg - previous_avg;

        if diff < -TREND_STABLE_MARGIN {
            Trend::Improving
        } else if diff > TREND_STABLE_MARGIN {
            Trend::Worsening
        } else {
            Trend::Stable
        }
    }
}
