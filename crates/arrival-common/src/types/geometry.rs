use serde::{Deserialize, Serialize};

use super::coord::LngLat;

/// A GeoJSON `LineString` geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "LineString")]
pub struct LineString {
    pub coordinates: Vec<LngLat>,
}

impl LineString {
    pub fn new(coordinates: Vec<LngLat>) -> Self {
        Self { coordinates }
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let line = LineString::new(vec![LngLat::new(1.0, 2.0), LngLat::new(3.0, 4.0)]);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["type"], "LineString");
        assert_eq!(json["coordinates"][1][0], 3.0);
    }

    #[test]
    fn deserializes_directions_geometry() {
        let raw = r#"{"coordinates":[[-123.2,49.2],[-123.3,49.3]],"type":"LineString"}"#;
        let line: LineString = serde_json::from_str(raw).unwrap();
        assert_eq!(line.len(), 2);
        assert_eq!(line.coordinates[0], LngLat::new(-123.2, 49.2));
    }

    #[test]
    fn rejects_other_geometry_types() {
        let raw = r#"{"coordinates":[-123.2,49.2],"type":"Point"}"#;
        assert!(serde_json::from_str::<LineString>(raw).is_err());
    }
}
