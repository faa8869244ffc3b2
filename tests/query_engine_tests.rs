//! QueryEngine tests: recency ordering, radius search, and visibility
//! filtering over a scripted set of check-ins.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use venuelog::db::SqliteAdapter;
use venuelog::errors::{AppError, AppResult};
use venuelog::models::{CheckInOptions, GeoCoordinate, Visibility};
use venuelog::store::location::LocationProvider;
use venuelog::store::{CheckInStore, StoreSettings};

/// Hands out a scripted sequence of fixes; `None` entries simulate an
/// unavailable device.
struct Scripted {
    fixes: Mutex<VecDeque<Option<(f64, f64)>>>,
}

impl Scripted {
    fn new(fixes: Vec<Option<(f64, f64)>>) -> Self {
        Self {
            fixes: Mutex::new(fixes.into()),
        }
    }
}

impl LocationProvider for Scripted {
    fn acquire(&self, _timeout: Duration) -> AppResult<GeoCoordinate> {
        let next = self
            .fixes
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .pop_front()
            .flatten();
        match next {
            Some((lat, lon)) => GeoCoordinate::new(lat, lon, None, 0),
            None => Err(AppError::LocationUnavailable),
        }
    }
}

fn store_with_fixes(fixes: Vec<Option<(f64, f64)>>) -> CheckInStore {
    let adapter = SqliteAdapter::in_memory().expect("in-memory adapter");
    CheckInStore::open(
        Box::new(adapter),
        Box::new(Scripted::new(fixes)),
        StoreSettings::default(),
    )
}

fn origin() -> GeoCoordinate {
    GeoCoordinate::new(27.9659, -82.8001, None, 0).unwrap()
}

#[test]
fn recent_by_user_is_newest_first_and_limited() {
    let store = store_with_fixes(vec![None; 5]);
    for i in 1..=5 {
        store
            .check_in(
                "user-1",
                &format!("v{}", i),
                &format!("Venue {}", i),
                CheckInOptions::default(),
            )
            .unwrap();
    }
    store
        .check_in("user-2", "vx", "Other Venue", CheckInOptions::default())
        .unwrap();

    let recent = store.queries().recent_by_user("user-1", 3);
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].venue_id, "v5");
    assert_eq!(recent[1].venue_id, "v4");
    assert_eq!(recent[2].venue_id, "v3");
    let times: Vec<i64> = recent.iter().map(|c| c.created_at_ms).collect();
    assert!(times.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn nearby_keeps_only_records_inside_the_radius() {
    // One check-in at the origin, one roughly 50 km north.
    let store = store_with_fixes(vec![
        Some((27.9659, -82.8001)),
        Some((28.4159, -82.8001)),
    ]);
    store
        .check_in("user-1", "v1", "At The Origin", CheckInOptions::default())
        .unwrap();
    store
        .check_in("user-2", "v2", "Far Away", CheckInOptions::default())
        .unwrap();

    let hits = store.queries().nearby(&origin(), 5.0, None).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].venue_id, "v1");
}

#[test]
fn nearby_excludes_records_without_a_location() {
    let store = store_with_fixes(vec![None, Some((27.9659, -82.8001))]);
    store
        .check_in("user-1", "v1", "No Fix", CheckInOptions::default())
        .unwrap();
    store
        .check_in("user-2", "v2", "Located", CheckInOptions::default())
        .unwrap();

    // A record without coordinates is excluded, not treated as distance 0.
    let hits = store.queries().nearby(&origin(), 1000.0, None).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].venue_id, "v2");
}

#[test]
fn growing_the_radius_never_drops_results() {
    let store = store_with_fixes(vec![
        Some((27.9659, -82.8001)),
        Some((28.4159, -82.8001)),
        Some((29.0, -82.8001)),
    ]);
    for (i, name) in ["Origin", "Fifty Km", "Hundred Km"].iter().enumerate() {
        store
            .check_in(
                "user-1",
                &format!("v{}", i + 1),
                name,
                CheckInOptions::default(),
            )
            .unwrap();
    }

    let queries = store.queries();
    let mut previous: Vec<String> = Vec::new();
    for radius in [1.0, 10.0, 60.0, 200.0] {
        let ids: Vec<String> = queries
            .nearby(&origin(), radius, None)
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert!(previous.iter().all(|id| ids.contains(id)));
        previous = ids;
    }
    assert_eq!(previous.len(), 3);
}

#[test]
fn nearby_rejects_an_invalid_origin() {
    let store = store_with_fixes(vec![]);
    let bad = GeoCoordinate {
        latitude: f64::NAN,
        longitude: 0.0,
        accuracy_m: None,
        captured_at_ms: 0,
    };
    let err = store.queries().nearby(&bad, 5.0, None).unwrap_err();
    assert!(matches!(err, AppError::InvalidCoordinate(_)));
}

#[test]
fn nearby_respects_the_limit() {
    let store = store_with_fixes(vec![Some((27.9659, -82.8001)); 4]);
    for i in 0..4 {
        store
            .check_in(
                "user-1",
                &format!("v{}", i),
                "Origin",
                CheckInOptions::default(),
            )
            .unwrap();
    }

    let hits = store.queries().nearby(&origin(), 5.0, Some(2)).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].venue_id, "v3");
}

#[test]
fn feed_hides_private_and_own_records() {
    let store = store_with_fixes(vec![None; 4]);

    let public = CheckInOptions {
        visibility: Some(Visibility::Public),
        ..Default::default()
    };
    let private = CheckInOptions {
        visibility: Some(Visibility::Private),
        ..Default::default()
    };

    store
        .check_in("user-1", "mine", "My Spot", public.clone())
        .unwrap();
    store
        .check_in("user-2", "pub", "Public Spot", public)
        .unwrap();
    store
        .check_in("user-3", "priv", "Private Spot", private)
        .unwrap();
    // Default visibility is friends: shown to others.
    store
        .check_in("user-4", "fr", "Friends Spot", CheckInOptions::default())
        .unwrap();

    let feed = store.queries().visible_to_others("user-1");
    let venues: Vec<&str> = feed.iter().map(|c| c.venue_id.as_str()).collect();
    assert_eq!(venues, vec!["fr", "pub"]);
}
