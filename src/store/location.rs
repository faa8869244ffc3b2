//! Device-location boundary. Acquisition is best-effort: callers must
//! treat `LocationUnavailable` as "proceed without coordinates", never
//! as a fatal error.

use crate::errors::{AppError, AppResult};
use crate::models::GeoCoordinate;
use chrono::Utc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Default acquisition timeout: 5 seconds.
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_millis(5000);

/// Source of the caller's current coordinates.
///
/// Contract: `acquire` completes within `timeout` or returns
/// `LocationUnavailable`. A fresh fix is requested on every call —
/// implementations must not hand back a cached one.
pub trait LocationProvider: Send + Sync {
    fn acquire(&self, timeout: Duration) -> AppResult<GeoCoordinate>;
}

/// Provider for environments with no positioning hardware (the CLI
/// default). Always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn acquire(&self, _timeout: Duration) -> AppResult<GeoCoordinate> {
        Err(AppError::LocationUnavailable)
    }
}

/// Provider backed by caller-supplied coordinates (`--lat/--lon`, tests).
/// Stamps each fix with the current wall clock.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_m: Option<f64>,
}

impl FixedLocation {
    pub fn new(latitude: f64, longitude: f64, accuracy_m: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m,
        }
    }
}

impl LocationProvider for FixedLocation {
    fn acquire(&self, _timeout: Duration) -> AppResult<GeoCoordinate> {
        GeoCoordinate::new(
            self.latitude,
            self.longitude,
            self.accuracy_m,
            Utc::now().timestamp_millis(),
        )
    }
}

/// Wrapper that enforces the timeout contract on an arbitrary inner
/// provider: the inner `acquire` runs on a worker thread and an overrun
/// becomes `LocationUnavailable`, so a stuck device stack can never
/// hang a check-in.
#[derive(Debug, Clone)]
pub struct Deadline<P> {
    inner: P,
}

impl<P> Deadline<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P> LocationProvider for Deadline<P>
where
    P: LocationProvider + Clone + 'static,
{
    fn acquire(&self, timeout: Duration) -> AppResult<GeoCoordinate> {
        let (tx, rx) = mpsc::channel();
        let provider = self.inner.clone();
        thread::spawn(move || {
            // Receiver may be gone if we already timed out.
            let _ = tx.send(provider.acquire(timeout));
        });

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(_) => Err(AppError::LocationUnavailable),
        }
    }
}
