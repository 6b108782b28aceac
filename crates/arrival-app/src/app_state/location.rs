//! Driver position updates from geolocation.

use arrival_common::LngLat;
use arrival_map::driver_marker;
use arrival_webview::LocationErrorPayload;

use super::core::ArrivalApp;
use super::types::{DRIVE_LAYER, GEOLOCATION_UNSUPPORTED, WALK_LAYER};

impl ArrivalApp {
    /// A new driver position.
    ///
    /// The first fix on a page adds the driver marker, centers the map and
    /// requests the walking route. Every fix moves the marker, updates
    /// progress and requests a fresh driving route.
    pub(super) fn handle_location_fix(&mut self, position: LngLat) {
        if !position.is_finite() {
            tracing::warn!(?position, "Ignoring non-finite location fix");
            return;
        }

        let first_fix = self.driver.is_none();
        self.driver = Some(position);
        tracing::debug!(%position, first_fix, "Driver location");

        let marker = driver_marker(position, &self.config.map.driver_marker_color);
        self.scene.place_marker(&marker, &mut self.batch);
        if first_fix {
            self.scene.set_center(position, &mut self.batch);
        }

        for update in self.progress.observe(position) {
            tracing::info!(step = %update.step_id, "Arrival step completed");
            self.progress.apply(&update, &mut self.batch);
        }

        let parking = self.config.sites.parking_lot.position();
        let entrance = self.config.sites.entrance.position();
        let directions = &self.config.directions;
        let (drive, walk) = (directions.drive_profile, directions.walk_profile);

        self.request_route(DRIVE_LAYER, position, parking, drive);
        if first_fix {
            self.request_route(WALK_LAYER, parking, entrance, walk);
        }
    }

    pub(super) fn handle_location_unsupported(&mut self) {
        tracing::warn!("Geolocation unsupported by the webview");
        self.batch.alert(GEOLOCATION_UNSUPPORTED);
    }

    /// Denied or failed position request. Logged; alerts only when configured.
    pub(super) fn handle_location_error(&mut self, error: LocationErrorPayload) {
        tracing::warn!(code = error.code, message = %error.message, "Geolocation failed");
        if self.config.location.alert_on_error {
            let message = if error.message.is_empty() {
                "Unable to determine your location.".to_string()
            } else {
                format!("Unable to determine your location: {}", error.message)
            };
            self.batch.alert(&message);
        }
    }
}
