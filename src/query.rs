//! Read-only views over the check-in history. Holds no state of its
//! own: every call reads a fresh snapshot from the store and computes a
//! transient result set.

use crate::errors::AppResult;
use crate::models::{CheckIn, GeoCoordinate, distance_km};
use crate::store::CheckInStore;

pub struct QueryEngine<'a> {
    store: &'a CheckInStore,
}

impl<'a> QueryEngine<'a> {
    pub(crate) fn new(store: &'a CheckInStore) -> Self {
        Self { store }
    }

    /// A user's check-ins, newest first, truncated to `limit`. Equal
    /// timestamps keep insertion order: the later check-in ranks first.
    pub fn recent_by_user(&self, user_id: &str, limit: usize) -> Vec<CheckIn> {
        let mut hits: Vec<(usize, CheckIn)> = self
            .store
            .snapshot()
            .check_ins
            .into_iter()
            .enumerate()
            .filter(|(_, c)| c.user_id == user_id)
            .collect();
        sort_newest_first(&mut hits);
        hits.truncate(limit);
        hits.into_iter().map(|(_, c)| c).collect()
    }

    /// Located check-ins of any user within `radius_km` of `origin`
    /// (inclusive bound), newest first. Records without coordinates are
    /// excluded, not treated as distance zero. A malformed origin fails
    /// only this call.
    pub fn nearby(
        &self,
        origin: &GeoCoordinate,
        radius_km: f64,
        limit: Option<usize>,
    ) -> AppResult<Vec<CheckIn>> {
        origin.validate()?;

        let mut hits: Vec<(usize, CheckIn)> = Vec::new();
        for (idx, check_in) in self.store.snapshot().check_ins.into_iter().enumerate() {
            let Some(location) = &check_in.location else {
                continue;
            };
            if distance_km(origin, location)? <= radius_km {
                hits.push((idx, check_in));
            }
        }
        sort_newest_first(&mut hits);
        if let Some(limit) = limit {
            hits.truncate(limit);
        }
        Ok(hits.into_iter().map(|(_, c)| c).collect())
    }

    /// Other users' check-ins with public or friends visibility, newest
    /// first. This is the feed a friend would see.
    pub fn visible_to_others(&self, excluding_user_id: &str) -> Vec<CheckIn> {
        let mut hits: Vec<(usize, CheckIn)> = self
            .store
            .snapshot()
            .check_ins
            .into_iter()
            .enumerate()
            .filter(|(_, c)| c.user_id != excluding_user_id && c.visibility.shown_to_others())
            .collect();
        sort_newest_first(&mut hits);
        hits.into_iter().map(|(_, c)| c).collect()
    }
}

/// Descending by timestamp; among equals the higher insertion index
/// (the later check-in) comes first.
fn sort_newest_first(items: &mut [(usize, CheckIn)]) {
    items.sort_by(|(ai, a), (bi, b)| {
        (b.created_at_ms, *bi).cmp(&(a.created_at_ms, *ai))
    });
}
