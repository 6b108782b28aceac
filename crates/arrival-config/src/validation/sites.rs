//! Site coordinate validation.

use crate::schema::{ArrivalConfig, SiteConfig};

use super::helpers::{validate_non_empty, validate_range_f64};

pub(crate) fn validate_sites(errors: &mut Vec<String>, config: &ArrivalConfig) {
    validate_site(errors, "sites.parking_lot", &config.sites.parking_lot);
    validate_site(errors, "sites.entrance", &config.sites.entrance);
}

fn validate_site(errors: &mut Vec<String>, prefix: &str, site: &SiteConfig) {
    validate_range_f64(errors, &format!("{prefix}.lng"), site.lng, -180.0, 180.0);
    validate_range_f64(errors, &format!("{prefix}.lat"), site.lat, -90.0, 90.0);
    validate_non_empty(errors, &format!("{prefix}.title"), &site.title);
    validate_non_empty(errors, &format!("{prefix}.marker_color"), &site.marker_color);
}
