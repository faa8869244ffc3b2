use serde::{Deserialize, Serialize};

/// Where a planned event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlannedSource {
    Ticket,
    Calendar,
    Manual,
}

impl PlannedSource {
    pub fn code(&self) -> &str {
        match self {
            PlannedSource::Ticket => "ticket",
            PlannedSource::Calendar => "calendar",
            PlannedSource::Manual => "manual",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "ticket" => Some(PlannedSource::Ticket),
            "calendar" => Some(PlannedSource::Calendar),
            "manual" => Some(PlannedSource::Manual),
            _ => None,
        }
    }
}

/// A future event the user intends to attend. Independent of the
/// check-in lifecycle: created on add, mutated only by toggling
/// `shared`, removed by explicit delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedEvent {
    pub id: String,
    pub event_id: String,
    pub event_name: String,
    pub venue_id: String,
    pub venue_name: String,
    pub date: String,
    pub time: String,
    pub source: PlannedSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub shared: bool,
}

/// Input for `add_planned_event`; the store assigns `id` and starts
/// `shared` at false.
#[derive(Debug, Clone)]
pub struct PlannedEventDraft {
    pub event_id: String,
    pub event_name: String,
    pub venue_id: String,
    pub venue_name: String,
    pub date: String,
    pub time: String,
    pub source: PlannedSource,
    pub source_id: Option<String>,
    pub image_url: Option<String>,
}
