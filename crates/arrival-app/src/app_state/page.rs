//! Map page boot sequence.

use arrival_map::{site_markers, MapView};

use super::core::ArrivalApp;

impl ArrivalApp {
    /// The page (re)loaded: rebuild the map and restore sheet and progress.
    ///
    /// Sends, in order: `init_map`, the site markers, the sheet height and
    /// any completed progress, then starts geolocation (or feeds the
    /// simulated driver position).
    pub(super) fn handle_page_ready(&mut self) {
        tracing::info!("Map page ready");

        if self.access_token.is_empty() {
            tracing::warn!("No Mapbox access token; the map will not load tiles");
        }

        // A new page has no driver marker and no routes yet.
        self.driver = None;

        let parking = self.config.sites.parking_lot.position();
        let view = MapView::from_config(&self.config.map, parking, self.access_token.clone());
        self.scene.init(&view, &mut self.batch);

        for marker in site_markers(&self.config.sites) {
            self.scene.place_marker(&marker, &mut self.batch);
        }

        self.batch.configure_sheet(self.config.sheet.snap_transition_ms);
        self.sheet.render(&mut self.batch);
        self.progress.render(&mut self.batch);

        match self.simulated_driver {
            Some(position) => self.handle_location_fix(position),
            None => {
                let location = &self.config.location;
                self.batch
                    .request_location(location.watch, location.high_accuracy);
            }
        }
    }
}
