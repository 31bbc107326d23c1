//! Diagnostic result, the immutable outcome of one submission.

use super::{ClassificationPolicy, RecommendationGenerator, StressLevel};
use serde::{Deserialize, Serialize};

/// Outcome of one questionnaire submission.
///
/// Created once per submission and never mutated; a new submission
/// produces a new result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    score: u32,
    level: StressLevel,
    interpretation: String,
    recommendations: Vec<String>,
    selected_events_count: usize,
}

impl DiagnosticResult {
    /// Derives the full result from a score: classification first, then
    /// the recommendation list for the classified level.
    pub fn from_score(score: u32, selected_events_count: usize) -> Self {
        let classification = ClassificationPolicy::classify(score);
        let recommendations = RecommendationGenerator::recommend(classification.level);
        Self {
            score,
            level: classification.level,
            interpretation: classification.interpretation,
            recommendations,
            selected_events_count,
        }
    }

    /// Returns the numeric score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the classified stress level.
    pub fn level(&self) -> StressLevel {
        self.level
    }

    /// Returns the interpretation text.
    pub fn interpretation(&self) -> &str {
        &self.interpretation
    }

    /// Returns the ordered advice list.
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// Returns how many events were selected.
    pub fn selected_events_count(&self) -> usize {
        self.selected_events_count
    }
}
