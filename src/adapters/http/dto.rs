//! Wire shapes for the catalog and history services.
//!
//! The three client surfaces of the product never agreed on field names
//! or envelope shapes, so every known alias is mapped to the canonical
//! domain types here, once. Nothing downstream branches on wire
//! variants.

use crate::domain::catalog::{LifeEvent, DEFAULT_CATEGORY};
use crate::domain::diagnostic::{ClassificationPolicy, StressLevel};
use crate::domain::foundation::{EventId, RecordId, Timestamp};
use crate::domain::history::HistoryRecord;
use serde::Deserialize;
use serde_json::Value;

/// Unwraps `{ "<key>": [...] }` or a bare `[...]` into the item list.
///
/// Anything else (a string, a number, an object without the key) yields
/// an empty list: malformed-but-present data is "nothing available",
/// not a failure.
pub fn unwrap_list(value: Value, key: &str) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Raw catalog record as any of the surfaces ship it.
///
/// All fields are optional; normalization applies the fixed priority
/// order and skips records that stay unusable.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub id: Option<i64>,
    pub question: Option<String>,
    pub title: Option<String>,
    pub event_text: Option<String>,
    pub weight: Option<f64>,
    pub points: Option<f64>,
    pub category: Option<String>,
}

impl RawEvent {
    /// Text priority: `question`, then `title`, then `event_text`.
    fn text(&self) -> Option<&str> {
        self.question
            .as_deref()
            .or(self.title.as_deref())
            .or(self.event_text.as_deref())
    }

    /// Weight priority: `weight`, then `points`, defaulting to 0.
    fn weight(&self) -> f64 {
        self.weight.or(self.points).unwrap_or(0.0)
    }

    /// Maps to the canonical event, or `None` when the record has no id,
    /// no usable text, or a negative weight.
    pub fn normalize(&self) -> Option<LifeEvent> {
        let id = self.id?;
        let text = self.text()?;
        let weight = self.weight();
        if !weight.is_finite() || weight < 0.0 {
            return None;
        }
        let category = self
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CATEGORY);
        LifeEvent::new(EventId::new(id), text, weight.round() as u32, category).ok()
    }
}

/// Parses a questions payload into normalized events.
///
/// Accepts `{ "events": [...] }` or a bare array; unusable records are
/// skipped, a non-list payload yields an empty list.
pub fn parse_events(payload: Value) -> Vec<LifeEvent> {
    unwrap_list(payload, "events")
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RawEvent>(item).ok())
        .filter_map(|raw| raw.normalize())
        .collect()
}

/// Raw history record as stored by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHistoryRecord {
    pub id: Option<i64>,
    pub score: Option<f64>,
    #[serde(alias = "stressLevel", alias = "result_category", alias = "level")]
    pub stress_level: Option<String>,
    #[serde(alias = "selectedEventsCount", alias = "events_count")]
    pub selected_events_count: Option<usize>,
    #[serde(alias = "createdAt", alias = "date")]
    pub created_at: Option<String>,
}

impl RawHistoryRecord {
    /// Maps to the canonical record, or `None` when id, score, or
    /// timestamp are unusable.
    ///
    /// Stored labels the engine does not recognize (or absent labels)
    /// are re-derived from the stored score through the one
    /// classification policy, so historical and live paths never
    /// diverge.
    pub fn normalize(&self) -> Option<HistoryRecord> {
        let id = self.id?;
        let score = self.score?;
        if !score.is_finite() || score < 0.0 {
            return None;
        }
        let score = score.round() as u32;
        let created_at = Timestamp::parse_rfc3339(self.created_at.as_deref()?).ok()?;

        let level = self
            .stress_level
            .as_deref()
            .and_then(StressLevel::parse_label)
            .unwrap_or_else(|| ClassificationPolicy::level_for(score));

        Some(HistoryRecord::new(
            RecordId::new(id),
            score,
            level,
            self.selected_events_count.unwrap_or(0),
            created_at,
        ))
    }
}

/// Parses a history payload into normalized records, most recent first.
///
/// Accepts `{ "diagnostics": [...] }` or a bare array; unusable entries
/// are skipped. Ordering is normalized here so the analyzer can rely on
/// a most-recent-first input regardless of what the server returned.
pub fn parse_history(payload: Value) -> Vec<HistoryRecord> {
    let mut records: Vec<HistoryRecord> = unwrap_list(payload, "diagnostics")
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RawHistoryRecord>(item).ok())
        .filter_map(|raw| raw.normalize())
        .collect();
    records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    records
}

/// Response to a diagnostic submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub score: Option<f64>,
    #[serde(alias = "stressLevel", alias = "result_category")]
    pub stress_level: Option<String>,
    #[serde(alias = "recommendation")]
    pub interpretation: Option<String>,
}

/// Request body for a diagnostic submission.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SubmitRequest {
    #[serde(rename = "selectedEventIds")]
    pub selected_event_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwrap_list_accepts_bare_array() {
        let items = unwrap_list(json!([1, 2]), "events");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn unwrap_list_accepts_wrapped_array() {
        let items = unwrap_list(json!({ "events": [1, 2, 3] }), "events");
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn unwrap_list_yields_empty_for_non_list() {
        assert!(unwrap_list(json!("oops"), "events").is_empty());
        assert!(unwrap_list(json!({ "events": "oops" }), "events").is_empty());
        assert!(unwrap_list(json!({ "other": [] }), "events").is_empty());
    }

    #[test]
    fn parse_events_prefers_question_over_title() {
        let events = parse_events(json!([
            { "id": 1, "question": "Bonne question", "title": "Mauvais titre", "weight": 10 }
        ]));
        assert_eq!(events[0].text(), "Bonne question");
    }

    #[test]
    fn parse_events_falls_back_through_aliases() {
        let events = parse_events(json!([
            { "id": 1, "title": "Depuis title", "points": 25 },
            { "id": 2, "event_text": "Depuis event_text", "weight": 30 }
        ]));
        assert_eq!(events[0].text(), "Depuis title");
        assert_eq!(events[0].weight(), 25);
        assert_eq!(events[1].text(), "Depuis event_text");
    }

    #[test]
    fn parse_events_defaults_category() {
        let events = parse_events(json!([{ "id": 1, "question": "Q", "weight": 5 }]));
        assert_eq!(events[0].category(), DEFAULT_CATEGORY);
    }

    #[test]
    fn parse_events_skips_unusable_records() {
        let events = parse_events(json!([
            { "id": 1, "weight": 10 },                          // no text
            { "question": "Sans id", "weight": 10 },            // no id
            { "id": 2, "question": "Poids négatif", "weight": -5 },
            { "id": 3, "question": "Valide", "weight": 10 }
        ]));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id(), EventId::new(3));
    }

    #[test]
    fn parse_events_missing_weight_defaults_to_zero() {
        let events = parse_events(json!([{ "id": 1, "question": "Q" }]));
        assert_eq!(events[0].weight(), 0);
    }

    #[test]
    fn parse_events_non_list_payload_is_empty() {
        assert!(parse_events(json!({ "error": "maintenance" })).is_empty());
        assert!(parse_events(json!(42)).is_empty());
    }

    #[test]
    fn parse_history_accepts_both_envelopes_and_name_styles() {
        let wrapped = parse_history(json!({ "diagnostics": [
            { "id": 1, "score": 120, "stressLevel": "Faible",
              "selectedEventsCount": 3, "createdAt": "2025-06-02T10:00:00Z" }
        ]}));
        let bare = parse_history(json!([
            { "id": 1, "score": 120, "result_category": "Faible",
              "events_count": 3, "date": "2025-06-02T10:00:00Z" }
        ]));
        assert_eq!(wrapped, bare);
        assert_eq!(wrapped[0].level(), StressLevel::Faible);
    }

    #[test]
    fn parse_history_sorts_most_recent_first() {
        let records = parse_history(json!([
            { "id": 1, "score": 100, "createdAt": "2025-06-01T10:00:00Z" },
            { "id": 2, "score": 200, "createdAt": "2025-06-03T10:00:00Z" },
            { "id": 3, "score": 300, "createdAt": "2025-06-02T10:00:00Z" }
        ]));
        let ids: Vec<i64> = records.iter().map(|r| r.id().value()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn parse_history_keeps_tres_eleve_label() {
        let records = parse_history(json!([
            { "id": 1, "score": 450, "stressLevel": "Très élevé",
              "createdAt": "2025-06-01T10:00:00Z" }
        ]));
        assert_eq!(records[0].level(), StressLevel::TresEleve);
    }

    #[test]
    fn parse_history_reclassifies_unknown_labels_from_score() {
        let records = parse_history(json!([
            { "id": 1, "score": 200, "stressLevel": "astronomique",
              "createdAt": "2025-06-01T10:00:00Z" }
        ]));
        assert_eq!(records[0].level(), StressLevel::Modere);
    }

    #[test]
    fn parse_history_skips_entries_without_timestamp() {
        let records = parse_history(json!([
            { "id": 1, "score": 200 },
            { "id": 2, "score": 100, "createdAt": "2025-06-01T10:00:00Z" }
        ]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), RecordId::new(2));
    }

    #[test]
    fn submit_request_serializes_with_camel_case_key() {
        let body = SubmitRequest {
            selected_event_ids: vec![1, 2],
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"selectedEventIds":[1,2]}"#);
    }

    #[test]
    fn submit_response_accepts_alias_fields() {
        let resp: SubmitResponse = serde_json::from_value(json!({
            "score": 180, "result_category": "Modéré", "recommendation": "Reposez-vous"
        }))
        .unwrap();
        assert_eq!(resp.score, Some(180.0));
        assert_eq!(resp.stress_level.as_deref(), Some("Modéré"));
        assert_eq!(resp.interpretation.as_deref(), Some("Reposez-vous"));
    }
}
