//! Check-in engine core: owns the visit history and the planned-event
//! collection, enforces the single-active-check-in invariant, and
//! mirrors every mutation to the persistence adapter.

pub mod location;

use crate::errors::{AppError, AppResult};
use crate::models::{
    CheckIn, CheckInOptions, EventRef, PlannedEvent, PlannedEventDraft, SharePayload, ShareTarget,
    Visibility,
};
use crate::query::QueryEngine;
use chrono::Utc;
use location::{DEFAULT_LOCATION_TIMEOUT, LocationProvider};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use uuid::Uuid;

/// Everything the store persists, as one unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub check_ins: Vec<CheckIn>,
    pub planned: Vec<PlannedEvent>,
}

/// Durable storage boundary. `load` must tolerate missing or malformed
/// data (empty collections, never a startup failure); `save` overwrites
/// the prior snapshot.
pub trait PersistenceAdapter: Send {
    fn load(&mut self) -> AppResult<Snapshot>;
    fn save(&mut self, snapshot: &Snapshot) -> AppResult<()>;

    /// Durable operation trail. Best-effort; implementations that have
    /// nowhere to write may keep the default no-op.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) {}
}

/// Tunables injected by the caller (CLI reads them from the config file).
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub location_timeout: Duration,
    pub default_visibility: Visibility,
    pub share_host: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            location_timeout: DEFAULT_LOCATION_TIMEOUT,
            default_visibility: Visibility::default(),
            share_host: "whensthefun.com".to_string(),
        }
    }
}

struct Inner {
    history: Vec<CheckIn>,
    planned: Vec<PlannedEvent>,
    adapter: Box<dyn PersistenceAdapter>,
}

/// The engine. One instance per process, constructed explicitly and
/// passed by reference — no ambient global state.
///
/// All mutations run inside one mutex-guarded critical section, so
/// concurrent double-submits serialize and the at-most-one-active
/// invariant holds; the later completion wins. Location acquisition
/// happens outside the lock.
pub struct CheckInStore {
    inner: Mutex<Inner>,
    provider: Box<dyn LocationProvider>,
    settings: StoreSettings,
}

impl CheckInStore {
    /// Load the persisted snapshot and start the engine. A failing or
    /// corrupt adapter load degrades to an empty state: the in-memory
    /// store is the source of truth from here on.
    pub fn open(
        mut adapter: Box<dyn PersistenceAdapter>,
        provider: Box<dyn LocationProvider>,
        settings: StoreSettings,
    ) -> Self {
        let snapshot = match adapter.load() {
            Ok(s) => s,
            Err(e) => {
                adapter.audit("load", "snapshot", &format!("load failed, starting empty: {e}"));
                Snapshot::default()
            }
        };

        Self {
            inner: Mutex::new(Inner {
                history: snapshot.check_ins,
                planned: snapshot.planned,
                adapter,
            }),
            provider,
            settings,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicked writer cannot leave a half-applied transition: every
        // mutation fills in all fields before releasing the guard.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record a new visit. Closes any prior active check-in for the
    /// user, appends the new record as active, persists, returns it.
    ///
    /// Location is best-effort: an unavailable provider leaves
    /// `location` empty and never fails the check-in.
    pub fn check_in(
        &self,
        user_id: &str,
        venue_id: &str,
        venue_name: &str,
        options: CheckInOptions,
    ) -> AppResult<CheckIn> {
        require_non_blank("user id", user_id)?;
        require_non_blank("venue id", venue_id)?;
        require_non_blank("venue name", venue_name)?;

        // Outside the lock: may take up to the configured timeout.
        let location = self.provider.acquire(self.settings.location_timeout).ok();

        let mut inner = self.lock();

        if location.is_none() {
            inner
                .adapter
                .audit("location", user_id, "no fix acquired, checking in without coordinates");
        }

        // Timestamps stay non-decreasing per user even if the wall
        // clock steps backwards between calls.
        let now = Utc::now().timestamp_millis();
        let floor = inner
            .history
            .iter()
            .filter(|c| c.user_id == user_id)
            .map(|c| c.created_at_ms)
            .max()
            .unwrap_or(i64::MIN);
        let created_at_ms = now.max(floor);

        for prior in inner
            .history
            .iter_mut()
            .filter(|c| c.user_id == user_id && c.active)
        {
            prior.active = false;
        }

        let record = CheckIn {
            id: format!("checkin-{}", Uuid::new_v4()),
            user_id: user_id.to_string(),
            venue_id: venue_id.to_string(),
            venue_name: venue_name.to_string(),
            created_at_ms,
            location,
            note: options.note,
            mood: options.mood,
            visibility: options.visibility.unwrap_or(self.settings.default_visibility),
            event: options.event,
            active: true,
        };

        inner.history.push(record.clone());
        inner
            .adapter
            .audit("checkin", &record.id, &format!("{} at {}", user_id, venue_name));
        persist(&mut inner);

        Ok(record)
    }

    /// Check in to a specific event: the event's venue becomes the
    /// check-in venue and the event details ride along.
    pub fn check_in_to_event(
        &self,
        user_id: &str,
        event: EventRef,
        mut options: CheckInOptions,
    ) -> AppResult<CheckIn> {
        let venue_id = event.venue_id.clone();
        let venue_name = event.venue_name.clone();
        options.event = Some(event);
        self.check_in(user_id, &venue_id, &venue_name, options)
    }

    /// End a visit. Returns `true` when an active record was closed;
    /// an unknown or already-ended id is a no-op, not an error.
    pub fn end_check_in(&self, check_in_id: &str) -> AppResult<bool> {
        let mut inner = self.lock();

        let Some(record) = inner
            .history
            .iter_mut()
            .find(|c| c.id == check_in_id && c.active)
        else {
            return Ok(false);
        };
        record.active = false;

        inner.adapter.audit("end", check_in_id, "check-in ended");
        persist(&mut inner);
        Ok(true)
    }

    /// The user's current visit, if any.
    pub fn active_check_in(&self, user_id: &str) -> Option<CheckIn> {
        self.lock()
            .history
            .iter()
            .find(|c| c.user_id == user_id && c.active)
            .cloned()
    }

    pub fn add_planned_event(&self, draft: PlannedEventDraft) -> AppResult<PlannedEvent> {
        require_non_blank("event id", &draft.event_id)?;
        require_non_blank("venue id", &draft.venue_id)?;

        let record = PlannedEvent {
            id: format!("planned-{}", Uuid::new_v4()),
            event_id: draft.event_id,
            event_name: draft.event_name,
            venue_id: draft.venue_id,
            venue_name: draft.venue_name,
            date: draft.date,
            time: draft.time,
            source: draft.source,
            source_id: draft.source_id,
            image_url: draft.image_url,
            shared: false,
        };

        let mut inner = self.lock();
        inner.planned.push(record.clone());
        inner
            .adapter
            .audit("plan-add", &record.event_id, &record.event_name);
        persist(&mut inner);
        Ok(record)
    }

    /// Remove by the `event_id` field (not the record id).
    pub fn remove_planned_event(&self, event_id: &str) -> AppResult<()> {
        let mut inner = self.lock();

        let before = inner.planned.len();
        inner.planned.retain(|p| p.event_id != event_id);
        if inner.planned.len() == before {
            return Err(AppError::NotFound(format!("planned event '{event_id}'")));
        }

        inner.adapter.audit("plan-del", event_id, "planned event removed");
        persist(&mut inner);
        Ok(())
    }

    /// Flip the `shared` flag of a planned event, matched by `event_id`.
    pub fn toggle_sharing(&self, event_id: &str) -> AppResult<PlannedEvent> {
        let mut inner = self.lock();

        let Some(record) = inner.planned.iter_mut().find(|p| p.event_id == event_id) else {
            return Err(AppError::NotFound(format!("planned event '{event_id}'")));
        };
        record.shared = !record.shared;
        let updated = record.clone();

        inner.adapter.audit(
            "plan-share",
            event_id,
            if updated.shared { "sharing on" } else { "sharing off" },
        );
        persist(&mut inner);
        Ok(updated)
    }

    pub fn planned_events(&self) -> Vec<PlannedEvent> {
        self.lock().planned.clone()
    }

    /// Share message + canonical URL for a recorded check-in.
    pub fn share_payload(&self, check_in_id: &str) -> AppResult<SharePayload> {
        let inner = self.lock();
        let record = inner
            .history
            .iter()
            .find(|c| c.id == check_in_id)
            .ok_or_else(|| AppError::NotFound(format!("check-in '{check_in_id}'")))?;
        Ok(SharePayload::for_check_in(record, &self.settings.share_host))
    }

    /// Target-specific share output (platform URL or clipboard text).
    pub fn share(&self, check_in_id: &str, target: ShareTarget) -> AppResult<String> {
        Ok(self.share_payload(check_in_id)?.render(target))
    }

    /// Consistent copy of the full state, taken under the lock.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.lock();
        Snapshot {
            check_ins: inner.history.clone(),
            planned: inner.planned.clone(),
        }
    }

    /// Read-only query views over this store.
    pub fn queries(&self) -> QueryEngine<'_> {
        QueryEngine::new(self)
    }
}

/// Mirror the in-memory state to storage. Failure is a warning in the
/// audit trail, never an error: memory stays authoritative for the rest
/// of the process lifetime.
fn persist(inner: &mut Inner) {
    let snapshot = Snapshot {
        check_ins: inner.history.clone(),
        planned: inner.planned.clone(),
    };
    if let Err(e) = inner.adapter.save(&snapshot) {
        inner
            .adapter
            .audit("persist", "save", &format!("save failed, memory remains authoritative: {e}"));
    }
}

fn require_non_blank(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
