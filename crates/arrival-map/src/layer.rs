//! Route line layers.

use arrival_common::{LineString, Profile};
use serde_json::{json, Value};

const DRIVING_COLOR: &str = "#3b9ddd";
const OTHER_COLOR: &str = "#ff7e5f";
const LINE_WIDTH: f64 = 5.0;

/// Paint derived from the travel profile.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: &'static str,
    pub width: f64,
    pub dasharray: [f64; 2],
}

impl LineStyle {
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            color: if profile.is_driving() {
                DRIVING_COLOR
            } else {
                OTHER_COLOR
            },
            width: LINE_WIDTH,
            dasharray: if profile.is_walking() {
                [2.0, 4.0]
            } else {
                [1.0, 0.0]
            },
        }
    }
}

/// A route drawn as a line layer backed by a GeoJSON source of the same id.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayer {
    pub id: String,
    pub profile: Profile,
    pub geometry: LineString,
}

impl LineLayer {
    pub fn new(id: impl Into<String>, profile: Profile, geometry: LineString) -> Self {
        Self {
            id: id.into(),
            profile,
            geometry,
        }
    }

    pub fn style(&self) -> LineStyle {
        LineStyle::for_profile(self.profile)
    }

    /// Layer description in the form `map.addLayer` accepts.
    pub fn to_layer_spec(&self) -> Value {
        let style = self.style();
        json!({
            "id": self.id,
            "type": "line",
            "source": {
                "type": "geojson",
                "data": {
                    "type": "Feature",
                    "properties": {},
                    "geometry": self.geometry,
                }
            },
            "layout": {
                "line-join": "round",
                "line-cap": "round",
            },
            "paint": {
                "line-color": style.color,
                "line-width": style.width,
                "line-dasharray": style.dasharray,
            }
        })
    }
}
