//! Recommendation lookup tables per stress level.

use super::StressLevel;
use once_cell::sync::Lazy;

static FAIBLE_ADVICE: Lazy<Vec<String>> = Lazy::new(|| {
    vec![
        "Continuez vos activités habituelles et gardez un rythme de sommeil régulier.".to_string(),
        "Pratiquez une activité physique régulière pour entretenir votre équilibre.".to_string(),
        "Maintenez vos liens sociaux et vos moments de détente.".to_string(),
    ]
});

static MODERE_ADVICE: Lazy<Vec<String>> = Lazy::new(|| {
    vec![
        "Accordez-vous des pauses quotidiennes de relaxation (respiration, méditation).".to_string(),
        "Réduisez si possible les sources de tension identifiées dans vos réponses.".to_string(),
        "Parlez de votre situation à un proche de confiance.".to_string(),
        "Envisagez de consulter un professionnel si les tensions persistent.".to_string(),
    ]
});

static ELEVE_ADVICE: Lazy<Vec<String>> = Lazy::new(|| {
    vec![
        "Consultez rapidement un professionnel de santé ou un psychologue.".to_string(),
        "Réduisez immédiatement les engagements non essentiels.".to_string(),
        "Appuyez-vous sur votre entourage, ne restez pas seul face à la situation.".to_string(),
        "Pratiquez chaque jour une activité apaisante, même courte.".to_string(),
    ]
});

/// Pure lookup of ordered advice lists.
///
/// Order is significant: most important advice first, preserved verbatim
/// for display. Two calls with the same level return identical lists.
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// Returns the ordered advice list for a level.
    ///
    /// `TresEleve` (only ever seen on stored submissions) shares the
    /// Élevé list; its urgent-consultation entry is already first.
    pub fn recommend(level: StressLevel) -> Vec<String> {
        match level {
            StressLevel::Faible => FAIBLE_ADVICE.clone(),
            StressLevel::Modere => MODERE_ADVICE.clone(),
            StressLevel::Eleve | StressLevel::TresEleve => ELEVE_ADVICE.clone(),
        }
    }
}
