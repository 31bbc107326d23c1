//! Pure statistics over the diagnostic history.

mod analyzer;
mod snapshot;

pub use analyzer::{StatisticsAnalyzer, TREND_STABLE_MARGIN, TREND_WINDOW};
pub use snapshot::{StatsSnapshot, Trend};
