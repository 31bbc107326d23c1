//! Score classification policy.
//!
//! One authoritative threshold table, shared by the live diagnostic path
//! and by historical records whose stored label cannot be parsed.

use super::StressLevel;

/// Lower bound of the Modéré band (inclusive).
pub const MODERATE_THRESHOLD: u32 = 150;

/// Lower bound of the Élevé band (inclusive).
pub const HIGH_THRESHOLD: u32 = 300;

/// Classified outcome: level plus interpretation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub level: StressLevel,
    pub interpretation: String,
}

/// Pure classification of a numeric score into a stress level.
pub struct ClassificationPolicy;

impl ClassificationPolicy {
    /// Classifies a score using half-open bands: lower bound inclusive,
    /// upper bound exclusive. A score of exactly 150 is Modéré.
    ///
    /// Total on all of `u32`; only the three documented bands are ever
    /// produced. No fourth threshold exists on this path.
    pub fn classify(score: u32) -> Classification {
        let (level, interpretation) = if score < MODERATE_THRESHOLD {
            (
                StressLevel::Faible,
                "Votre niveau de stress est faible. Continuez à maintenir vos bonnes habitudes.",
            )
        } else if score < HIGH_THRESHOLD {
            (
                StressLevel::Modere,
                "Votre niveau de stress est modéré. Prenez du temps pour vous détendre.",
            )
        } else {
            (
                StressLevel::Eleve,
                "Votre niveau de stress est élevé. Il est recommandé de consulter un professionnel.",
            )
        };

        Classification {
            level,
            interpretation: interpretation.to_string(),
        }
    }

    /// Returns just the level for a score.
    pub fn level_for(score: u32) -> StressLevel {
        Self::classify(score).level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn band_edges_are_half_open() {
        assert_eq!(ClassificationPolicy::level_for(149), StressLevel::Faible);
        assert_eq!(ClassificationPolicy::level_for(150), StressLevel::Modere);
        assert_eq!(ClassificationPolicy::level_for(299), StressLevel::Modere);
        assert_eq!(ClassificationPolicy::level_for(300), StressLevel::Eleve);
    }

    #[test]
    fn zero_is_faible() {
        assert_eq!(ClassificationPolicy::level_for(0), StressLevel::Faible);
    }

    #[test]
    fn large_scores_stay_eleve() {
        assert_eq!(ClassificationPolicy::level_for(u32::MAX), StressLevel::Eleve);
    }

    #[test]
    fn interpretation_matches_level() {
        let c = ClassificationPolicy::classify(200);
        assert_eq!(c.level, StressLevel::Modere);
        assert!(c.interpretation.contains("modéré"));
    }

    proptest! {
        // Every score maps to exactly one of the three live bands.
        #[test]
        fn classify_is_total_over_three_bands(score in any::<u32>()) {
            let level = ClassificationPolicy::level_for(score);
            prop_assert_ne!(level, StressLevel::TresEleve);
            let expected = if score < MODERATE_THRESHOLD {
                StressLevel::Faible
            } else if score < HIGH_THRESHOLD {
                StressLevel::Modere
            } else {
                StressLevel::Eleve
            };
            prop_assert_eq!(level, expected);
        }
    }
}
