//! Fixed destination sites: the parking lot and the building entrance.

use arrival_common::{LngLat, SiteKind};
use serde::{Deserialize, Serialize};

/// A fixed destination with its marker and popup content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Popup heading.
    pub title: String,
    /// Marker color (any CSS color).
    pub marker_color: String,
    /// Popup image, relative to the page (served from `map.image_dir`).
    pub image: Option<String>,
}

impl SiteConfig {
    pub fn position(&self) -> LngLat {
        LngLat::new(self.lng, self.lat)
    }
}

/// Both destination sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitesConfig {
    pub parking_lot: SiteConfig,
    pub entrance: SiteConfig,
}

impl SitesConfig {
    pub fn get(&self, kind: SiteKind) -> &SiteConfig {
        match kind {
            SiteKind::ParkingLot => &self.parking_lot,
            SiteKind::Entrance => &self.entrance,
        }
    }
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            parking_lot: SiteConfig {
                lng: -123.2487763774755,
                lat: 49.27106955540924,
                title: "Parking Lot".to_string(),
                marker_color: "blue".to_string(),
                image: Some("images/parking_lot.png".to_string()),
            },
            entrance: SiteConfig {
                lng: -123.25042484166043,
                lat: 49.270382121434956,
                title: "Building Entrance".to_string(),
                marker_color: "green".to_string(),
                image: Some("images/building_entrance.png".to_string()),
            },
        }
    }
}
