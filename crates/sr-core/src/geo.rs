//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` stores WGS-84 longitude/latitude as `f64`.  The order matches
//! the `(x, y)` convention used by the polygon library and by route output:
//! **longitude first**.

use serde::{Deserialize, Serialize};

/// A WGS-84 geographic coordinate, longitude first.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Arithmetic midpoint: the plain average of longitudes and of latitudes.
    ///
    /// Not the geodesic midpoint.  At street scale the difference is far below
    /// the resolution of any risk polygon.
    #[inline]
    pub fn midpoint(self, other: GeoPoint) -> GeoPoint {
        GeoPoint {
            lon: (self.lon + other.lon) / 2.0,
            lat: (self.lat + other.lat) / 2.0,
        }
    }

    /// `(lon, lat)` tuple, the shape returned to route callers.
    #[inline]
    pub fn to_tuple(self) -> (f64, f64) {
        (self.lon, self.lat)
    }

    /// `true` if both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// Interprets the tuple as `(lon, lat)`.
    fn from((lon, lat): (f64, f64)) -> Self {
        GeoPoint { lon, lat }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
