//! Progress step validation.

use std::collections::HashSet;

use crate::schema::ArrivalConfig;

use super::helpers::{validate_non_empty, validate_range_f64};

pub(crate) fn validate_progress(errors: &mut Vec<String>, config: &ArrivalConfig) {
    let progress = &config.progress;

    if !progress.threshold.is_finite() || progress.threshold <= 0.0 {
        errors.push(format!(
            "progress.threshold = {} must be a positive number",
            progress.threshold
        ));
    }
    validate_non_empty(errors, "progress.line_element", &progress.line_element);

    let mut seen = HashSet::new();
    for (i, step) in progress.steps.iter().enumerate() {
        let prefix = format!("progress.steps[{i}]");
        validate_non_empty(errors, &format!("{prefix}.id"), &step.id);
        validate_non_empty(errors, &format!("{prefix}.step_element"), &step.step_element);
        validate_non_empty(
            errors,
            &format!("{prefix}.marker_element"),
            &step.marker_element,
        );
        validate_range_f64(
            errors,
            &format!("{prefix}.line_percent"),
            step.line_percent,
            0.0,
            100.0,
        );
        if !seen.insert(step.id.as_str()) {
            errors.push(format!("duplicate progress step id '{}'", step.id));
        }
    }
}
