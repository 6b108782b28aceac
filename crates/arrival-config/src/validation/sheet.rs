//! Bottom sheet bounds validation.

use crate::schema::ArrivalConfig;

use super::helpers::validate_range_f64;

/// Heights must satisfy `0 < collapsed < snap_threshold < expanded <= 100`.
pub(crate) fn validate_sheet(errors: &mut Vec<String>, config: &ArrivalConfig) {
    let sheet = &config.sheet;
    validate_range_f64(errors, "sheet.collapsed", sheet.collapsed, 0.0, 100.0);
    validate_range_f64(errors, "sheet.expanded", sheet.expanded, 0.0, 100.0);
    validate_range_f64(
        errors,
        "sheet.snap_threshold",
        sheet.snap_threshold,
        0.0,
        100.0,
    );

    if sheet.collapsed >= sheet.expanded {
        errors.push(format!(
            "sheet.collapsed = {} must be below sheet.expanded = {}",
            sheet.collapsed, sheet.expanded
        ));
    } else if sheet.snap_threshold < sheet.collapsed || sheet.snap_threshold > sheet.expanded {
        errors.push(format!(
            "sheet.snap_threshold = {} must lie within [{}, {}]",
            sheet.snap_threshold, sheet.collapsed, sheet.expanded
        ));
    }
}
