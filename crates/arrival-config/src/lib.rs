//! Arrival configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use arrival_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ArrivalConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use arrival_common::ConfigError;

/// Load and validate config.
///
/// With `path`, reads that file (it must exist). Without, loads
/// `config.toml` from the OS config directory, creating a default if none
/// exists.
pub fn load_config(path: Option<&Path>) -> Result<ArrivalConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ArrivalConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = ArrivalConfig::default();
        let json = config_to_json(&config);
        for section in [
            "\"sites\"",
            "\"map\"",
            "\"sheet\"",
            "\"progress\"",
            "\"directions\"",
            "\"location\"",
            "\"window\"",
            "\"logging\"",
        ] {
            assert!(json.contains(section), "missing {section}");
        }
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = ArrivalConfig::default();
        let json = config_to_json(&config);
        let parsed: ArrivalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sites.parking_lot.title, "Parking Lot");
        assert_eq!(parsed.sheet.expanded, 60.0);
        assert_eq!(parsed.progress.steps.len(), 2);
    }

    #[test]
    fn load_config_with_explicit_path_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sheet]\ncollapsed = 90.0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_with_missing_explicit_path_fails() {
        let err = load_config(Some(Path::new("/tmp/arrival_missing_override.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
