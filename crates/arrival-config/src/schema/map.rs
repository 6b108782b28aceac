//! Map view configuration.

use serde::{Deserialize, Serialize};

/// Initial map view and marker styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Mapbox style URL.
    pub style: String,
    /// Initial zoom level (valid range: 0-22).
    pub zoom: f64,
    /// Show zoom/rotate controls.
    pub navigation_control: bool,
    /// Color of the live driver marker.
    pub driver_marker_color: String,
    /// Directory served under `arrival://localhost/images/`.
    pub image_dir: Option<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style: "mapbox://styles/mapbox/light-v10".to_string(),
            zoom: 16.0,
            navigation_control: true,
            driver_marker_color: "red".to_string(),
            image_dir: None,
        }
    }
}
