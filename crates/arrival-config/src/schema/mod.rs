//! Configuration schema types for Arrival.
//!
//! All sections use `serde(default)` so partial configs work correctly.

mod directions;
mod location;
mod map;
mod progress;
mod sheet;
mod sites;
mod system;
mod window;

pub use directions::*;
pub use location::*;
pub use map::*;
pub use progress::*;
pub use sheet::*;
pub use sites::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Arrival.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ArrivalConfig {
    pub sites: SitesConfig,
    pub map: MapConfig,
    pub sheet: SheetConfig,
    pub progress: ProgressConfig,
    pub directions: DirectionsSchemaConfig,
    pub location: LocationConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use arrival_common::{Profile, SiteKind};

    #[test]
    fn default_sites_match_campus_coordinates() {
        let config = ArrivalConfig::default();
        assert_eq!(config.sites.parking_lot.lng, -123.2487763774755);
        assert_eq!(config.sites.parking_lot.lat, 49.27106955540924);
        assert_eq!(config.sites.entrance.lng, -123.25042484166043);
        assert_eq!(config.sites.entrance.lat, 49.270382121434956);
        assert_eq!(config.sites.parking_lot.marker_color, "blue");
        assert_eq!(config.sites.entrance.marker_color, "green");
        assert_eq!(config.sites.get(SiteKind::Entrance).title, "Building Entrance");
    }

    #[test]
    fn default_map_view() {
        let config = ArrivalConfig::default();
        assert_eq!(config.map.style, "mapbox://styles/mapbox/light-v10");
        assert!((config.map.zoom - 16.0).abs() < f64::EPSILON);
        assert!(config.map.navigation_control);
        assert_eq!(config.map.driver_marker_color, "red");
    }

    #[test]
    fn default_sheet_bounds() {
        let config = ArrivalConfig::default();
        assert_eq!(config.sheet.collapsed, 25.0);
        assert_eq!(config.sheet.expanded, 60.0);
        assert_eq!(config.sheet.snap_threshold, 42.5);
    }

    #[test]
    fn default_progress_steps() {
        let config = ArrivalConfig::default();
        assert_eq!(config.progress.threshold, 0.0001);
        assert_eq!(config.progress.line_element, "progress-line");
        assert_eq!(config.progress.steps.len(), 2);
        assert_eq!(config.progress.steps[0].target, SiteKind::ParkingLot);
        assert_eq!(config.progress.steps[1].line_percent, 100.0);
    }

    #[test]
    fn default_directions() {
        let config = ArrivalConfig::default();
        assert_eq!(
            config.directions.base_url,
            "https://api.mapbox.com/directions/v5/mapbox"
        );
        assert!(config.directions.access_token.is_none());
        assert_eq!(config.directions.drive_profile, Profile::Driving);
        assert_eq!(config.directions.walk_profile, Profile::Walking);
    }

    #[test]
    fn default_location_is_one_shot_without_error_alert() {
        let config = ArrivalConfig::default();
        assert!(!config.location.watch);
        assert!(!config.location.alert_on_error);
    }

    #[test]
    fn access_token_is_redacted_in_debug() {
        let mut config = ArrivalConfig::default();
        config.directions.access_token = Some("pk.secret".into());
        let debug = format!("{:?}", config.directions);
        assert!(!debug.contains("pk.secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn log_level_directives() {
        assert_eq!(LogLevel::default().directive(), "arrival=info");
        assert_eq!(LogLevel::Warning.directive(), "arrival=warn");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: ArrivalConfig = toml::from_str(
            r#"
[sheet]
expanded = 70.0

[location]
watch = true
"#,
        )
        .unwrap();
        assert_eq!(config.sheet.expanded, 70.0);
        assert_eq!(config.sheet.collapsed, 25.0);
        assert!(config.location.watch);
        assert_eq!(config.progress.steps.len(), 2);
    }

    #[test]
    fn steps_parse_from_toml() {
        let config: ArrivalConfig = toml::from_str(
            r#"
[progress]
threshold = 0.0005

[[progress.steps]]
id = "lot"
target = "parking_lot"
step_element = "s1"
marker_element = "m1"
line_percent = 100.0
"#,
        )
        .unwrap();
        assert_eq!(config.progress.threshold, 0.0005);
        assert_eq!(config.progress.steps.len(), 1);
        assert_eq!(config.progress.steps[0].id, "lot");
        assert_eq!(config.progress.line_element, "progress-line");
    }
}
