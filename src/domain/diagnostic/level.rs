//! Stress level classification labels.

use serde::{Deserialize, Serialize};

/// Qualitative classification of a diagnostic score.
///
/// `TresEleve` is representable because stored submissions may carry the
/// label, but the live classifier only ever produces the first three
/// bands (see `ClassificationPolicy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    Faible,
    Modere,
    Eleve,
    TresEleve,
}

impl StressLevel {
    /// Returns the French display label.
    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Faible => "Faible",
            StressLevel::Modere => "Modéré",
            StressLevel::Eleve => "Élevé",
            StressLevel::TresEleve => "Très élevé",
        }
    }

    /// Parses a label as supplied by the backend for stored submissions.
    ///
    /// Accepts both accented display labels and the unaccented ASCII
    /// variants some surfaces persist. Returns `None` for anything else;
    /// callers fall back to re-classifying from the stored score.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "faible" => Some(StressLevel::Faible),
            "modéré" | "modere" => Some(StressLevel::Modere),
            "élevé" | "eleve" => Some(StressLevel::Eleve),
            "très élevé" | "tres eleve" | "tres_eleve" => Some(StressLevel::TresEleve),
            _ => None,
        }
    }
}

impl std::fmt::Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
