//! Great-circle distance helpers.

use serde::{Deserialize, Serialize};

use super::entities::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const KM_PER_MILE: f64 = 1.609_344;

/// Unit used for viewer distances stored on catalog items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    pub fn from_km(&self, km: f64) -> f64 {
        match self {
            Self::Miles => km_to_miles(km),
            Self::Kilometers => km,
        }
    }
}

/// Haversine distance between two coordinates, in kilometres.
///
/// Inputs are expected to be finite and within lat/lng ranges.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

pub fn km_to_miles(km: f64) -> f64 {
    km / KM_PER_MILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let p = Coordinate::new(40.0, -74.0);
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn new_york_to_london() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let london = Coordinate::new(51.5074, -0.1278);
        let d = distance_km(nyc, london);
        assert!((d - 5570.0).abs() < 10.0, "got {d}");
        assert!((distance_km(london, nyc) - d).abs() < 1e-9);
    }

    #[test]
    fn nearby_points_are_metres_apart() {
        let a = Coordinate::new(40.0, -74.0);
        let b = Coordinate::new(40.0001, -74.0001);
        let d = distance_km(a, b);
        assert!(d > 0.01 && d < 0.02, "got {d}");
    }

    #[test]
    fn unit_conversion() {
        assert!((km_to_miles(KM_PER_MILE) - 1.0).abs() < 1e-12);
        assert_eq!(DistanceUnit::Kilometers.from_km(5.0), 5.0);
        assert!((DistanceUnit::Miles.from_km(16.09344) - 10.0).abs() < 1e-9);
    }
}
