use super::{coordinate::GeoCoordinate, visibility::Visibility};
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single visit record. Append-only: never deleted, only flagged
/// inactive when the visit ends or a newer check-in supersedes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub id: String,
    pub user_id: String,
    pub venue_id: String,
    pub venue_name: String,
    pub created_at_ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoCoordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<EventRef>,
    pub active: bool,
}

impl CheckIn {
    pub fn created_at_str(&self) -> String {
        match Utc.timestamp_millis_opt(self.created_at_ms).single() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => self.created_at_ms.to_string(),
        }
    }

    pub fn location_str(&self) -> String {
        match &self.location {
            Some(loc) => format!("{:.4},{:.4}", loc.latitude, loc.longitude),
            None => "-".to_string(),
        }
    }

    pub fn status_str(&self) -> &str {
        if self.active { "active" } else { "ended" }
    }
}

/// An event attached to a check-in. Immutable once attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRef {
    pub id: String,
    pub venue_id: String,
    pub venue_name: String,
    pub name: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_event_id: Option<String>,
}

/// Optional extras for a new check-in.
#[derive(Debug, Clone, Default)]
pub struct CheckInOptions {
    pub note: Option<String>,
    pub mood: Option<String>,
    pub visibility: Option<Visibility>,
    pub event: Option<EventRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CheckIn {
        CheckIn {
            id: "checkin-1".into(),
            user_id: "user-1".into(),
            venue_id: "v1".into(),
            venue_name: "Capitol Theatre".into(),
            created_at_ms: 1_700_000_000_000,
            location: None,
            note: Some("great show".into()),
            mood: None,
            visibility: Visibility::Friends,
            event: Some(EventRef {
                id: "e1".into(),
                venue_id: "v1".into(),
                venue_name: "Capitol Theatre".into(),
                name: "Jazz Night".into(),
                date: "2026-08-28".into(),
                time: "20:00".into(),
                image_url: None,
                ticket_id: Some("t-42".into()),
                calendar_event_id: None,
            }),
            active: true,
        }
    }

    #[test]
    fn serde_round_trip_with_nested_event() {
        let c = sample();
        let json = serde_json::to_string(&c).unwrap();
        let back: CheckIn = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn missing_location_renders_dash() {
        assert_eq!(sample().location_str(), "-");
    }
}
