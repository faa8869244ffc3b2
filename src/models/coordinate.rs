//! Geographic coordinates and great-circle distance.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude fix, immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f64>,
    pub captured_at_ms: i64,
}

impl GeoCoordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(
        latitude: f64,
        longitude: f64,
        accuracy_m: Option<f64>,
        captured_at_ms: i64,
    ) -> AppResult<Self> {
        let coord = Self {
            latitude,
            longitude,
            accuracy_m,
            captured_at_ms,
        };
        coord.validate()?;
        Ok(coord)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "latitude {} out of range [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "longitude {} out of range [-180, 180]",
                self.longitude
            )));
        }
        if let Some(acc) = self.accuracy_m
            && (!acc.is_finite() || acc < 0.0)
        {
            return Err(AppError::InvalidCoordinate(format!(
                "accuracy {} must be a non-negative number of meters",
                acc
            )));
        }
        Ok(())
    }
}

/// Great-circle distance between two coordinates (haversine, km).
/// Symmetric, non-negative, zero for identical points.
pub fn distance_km(a: &GeoCoordinate, b: &GeoCoordinate) -> AppResult<f64> {
    a.validate()?;
    b.validate()?;

    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Ok(EARTH_RADIUS_KM * c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lon: f64) -> GeoCoordinate {
        GeoCoordinate::new(lat, lon, None, 0).expect("valid coordinate")
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = at(27.9659, -82.8001);
        assert_eq!(distance_km(&p, &p).unwrap(), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = at(27.9659, -82.8001);
        let b = at(28.5383, -81.3792);
        let ab = distance_km(&a, &b).unwrap();
        let ba = distance_km(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-9);
        assert!(ab > 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = at(27.0, -82.0);
        let b = at(28.0, -82.0);
        let d = distance_km(&a, &b).unwrap();
        assert!((d - 111.19).abs() < 0.5, "got {}", d);
    }

    #[test]
    fn rejects_nan_latitude() {
        let bad = GeoCoordinate {
            latitude: f64::NAN,
            longitude: 0.0,
            accuracy_m: None,
            captured_at_ms: 0,
        };
        let good = at(0.0, 0.0);
        assert!(matches!(
            distance_km(&bad, &good),
            Err(crate::errors::AppError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(GeoCoordinate::new(0.0, 181.0, None, 0).is_err());
        assert!(GeoCoordinate::new(91.0, 0.0, None, 0).is_err());
        assert!(GeoCoordinate::new(0.0, 0.0, Some(-1.0), 0).is_err());
    }

    #[test]
    fn serde_round_trip_preserves_fields() {
        let p = GeoCoordinate::new(27.9659, -82.8001, Some(12.5), 1_700_000_000_000).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: GeoCoordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
