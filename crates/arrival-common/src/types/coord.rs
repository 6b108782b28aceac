use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ArrivalError;

/// A `(longitude, latitude)` pair in degrees.
///
/// Serialized in GeoJSON order as a two-element array `[lng, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }

    /// Euclidean distance treating `(lng, lat)` as plane coordinates.
    ///
    /// No geodesic correction; the result is in degrees.
    pub fn planar_distance(&self, other: &LngLat) -> f64 {
        let d_lng = self.lng - other.lng;
        let d_lat = self.lat - other.lat;
        (d_lng * d_lng + d_lat * d_lat).sqrt()
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(p: LngLat) -> Self {
        [p.lng, p.lat]
    }
}

impl fmt::Display for LngLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

impl FromStr for LngLat {
    type Err = ArrivalError;

    /// Parse `"lng,lat"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lng, lat) = s
            .split_once(',')
            .ok_or_else(|| ArrivalError::Coordinate(format!("expected 'lng,lat', got '{s}'")))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|e| ArrivalError::Coordinate(format!("longitude '{lng}': {e}")))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|e| ArrivalError::Coordinate(format!("latitude '{lat}': {e}")))?;

        let point = LngLat::new(lng, lat);
        if !point.is_finite() {
            return Err(ArrivalError::Coordinate(format!("non-finite value in '{s}'")));
        }
        Ok(point)
    }
}

/// One of the two fixed destinations on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteKind {
    ParkingLot,
    Entrance,
}

impl SiteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteKind::ParkingLot => "parking_lot",
            SiteKind::Entrance => "entrance",
        }
    }
}
