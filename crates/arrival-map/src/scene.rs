//! Bookkeeping of what has been placed on the map.

use std::collections::HashSet;

use arrival_common::LngLat;
use tracing::debug;

use crate::layer::LineLayer;
use crate::marker::Marker;
use crate::surface::{MapSurface, MapView};

#[derive(Debug, Default)]
pub struct MapScene {
    initialized: bool,
    markers: HashSet<String>,
    layers: HashSet<String>,
}

impl MapScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the map. Forgets anything placed on a previous map.
    pub fn init(&mut self, view: &MapView, surface: &mut impl MapSurface) {
        self.markers.clear();
        self.layers.clear();
        self.initialized = true;
        surface.init_map(view);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Add the marker, or move it if one with the same id is already placed.
    pub fn place_marker(&mut self, marker: &Marker, surface: &mut impl MapSurface) {
        if self.markers.contains(&marker.id) {
            surface.move_marker(&marker.id, marker.position);
        } else {
            surface.add_marker(marker);
            self.markers.insert(marker.id.clone());
        }
    }

    pub fn has_marker(&self, id: &str) -> bool {
        self.markers.contains(id)
    }

    pub fn set_center(&mut self, center: LngLat, surface: &mut impl MapSurface) {
        surface.set_center(center);
    }

    /// Draw a route layer, replacing any existing layer with the same id.
    pub fn draw_route(&mut self, layer: &LineLayer, surface: &mut impl MapSurface) {
        if self.layers.remove(&layer.id) {
            debug!(layer = %layer.id, "Replacing existing route layer");
            surface.remove_layer(&layer.id);
        }
        surface.add_line_layer(layer);
        self.layers.insert(layer.id.clone());
    }

    pub fn has_layer(&self, id: &str) -> bool {
        self.layers.contains(id)
    }
}
