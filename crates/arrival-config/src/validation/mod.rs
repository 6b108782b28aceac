//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod progress;
mod sheet;
mod sites;


use crate::schema::ArrivalConfig;
use arrival_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ArrivalConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sites::validate_sites(&mut errors, config);
    sheet::validate_sheet(&mut errors, config);
    progress::validate_progress(&mut errors, config);
    misc::validate_map(&mut errors, config);
    misc::validate_directions(&mut errors, config);
    misc::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
