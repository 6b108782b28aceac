//! Validation for smaller config sections: map, directions, and window.

use crate::schema::ArrivalConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

pub(crate) fn validate_map(errors: &mut Vec<String>, config: &ArrivalConfig) {
    validate_range_f64(errors, "map.zoom", config.map.zoom, 0.0, 22.0);
    validate_non_empty(errors, "map.style", &config.map.style);
}

pub(crate) fn validate_directions(errors: &mut Vec<String>, config: &ArrivalConfig) {
    let base_url = &config.directions.base_url;
    if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        errors.push(format!(
            "directions.base_url = '{base_url}' must be an http(s) URL"
        ));
    }
    validate_range(
        errors,
        "directions.timeout_secs",
        config.directions.timeout_secs,
        1,
        300,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &ArrivalConfig) {
    validate_range(
        errors,
        "window.width",
        u64::from(config.window.width),
        240,
        7680,
    );
    validate_range(
        errors,
        "window.height",
        u64::from(config.window.height),
        320,
        4320,
    );
}
