//! The seam between the scene model and a real map.

use std::fmt;

use arrival_common::LngLat;
use arrival_config::schema::MapConfig;
use serde::Serialize;

use crate::layer::LineLayer;
use crate::marker::Marker;

/// Initial map view.
#[derive(Clone, Serialize)]
pub struct MapView {
    pub access_token: String,
    pub style: String,
    pub center: LngLat,
    pub zoom: f64,
    pub navigation_control: bool,
}

impl fmt::Debug for MapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapView")
            .field("access_token", &"[REDACTED]")
            .field("style", &self.style)
            .field("center", &self.center)
            .field("zoom", &self.zoom)
            .field("navigation_control", &self.navigation_control)
            .finish()
    }
}

impl MapView {
    pub fn from_config(config: &MapConfig, center: LngLat, access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            style: config.style.clone(),
            center,
            zoom: config.zoom,
            navigation_control: config.navigation_control,
        }
    }
}

/// Operations the external map must support.
///
/// Calls are fire-and-forget; [`MapScene`](crate::MapScene) guarantees
/// `remove_layer` is only called for layers that were added.
pub trait MapSurface {
    fn init_map(&mut self, view: &MapView);
    fn add_marker(&mut self, marker: &Marker);
    fn move_marker(&mut self, id: &str, position: LngLat);
    fn set_center(&mut self, center: LngLat);
    fn add_line_layer(&mut self, layer: &LineLayer);
    /// Remove a layer together with its source.
    fn remove_layer(&mut self, id: &str);
}
