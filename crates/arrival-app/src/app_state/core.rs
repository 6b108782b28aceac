//! ArrivalApp struct definition and constructor.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use arrival_common::LngLat;
use arrival_config::schema::ArrivalConfig;
use arrival_directions::{
    DirectionsClient, DirectionsConfig, DirectionsError, DirectionsProvider, RouteSequencer,
};
use arrival_map::MapScene;
use arrival_panel::{ProgressTracker, SheetBounds, SheetController};
use arrival_webview::{ScriptBatch, WebViewHandle, WebViewManager};

use super::types::{PendingRoute, RouteOutcome};

/// Top-level application state.
pub struct ArrivalApp {
    pub(super) config: ArrivalConfig,
    /// Fixed driver position from the command line; replaces geolocation.
    pub(super) simulated_driver: Option<LngLat>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) webviews: Option<WebViewManager>,
    pub(super) page: Option<WebViewHandle>,

    /// Commands for the page, flushed once per poll.
    pub(super) batch: ScriptBatch,

    // Page state
    pub(super) sheet: SheetController,
    pub(super) progress: ProgressTracker,
    pub(super) scene: MapScene,
    /// Last known driver position on the current page.
    pub(super) driver: Option<LngLat>,

    // Directions
    pub(super) directions: Option<Arc<dyn DirectionsProvider>>,
    pub(super) access_token: String,
    pub(super) sequencer: RouteSequencer,
    pub(super) pending_routes: Vec<PendingRoute>,
    pub(super) route_tx: Sender<RouteOutcome>,
    pub(super) route_rx: Receiver<RouteOutcome>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl ArrivalApp {
    pub fn new(config: ArrivalConfig, simulated_driver: Option<LngLat>) -> Self {
        let (access_token, directions) = match build_directions(&config) {
            Ok((token, client)) => (token, Some(client)),
            Err(e) => {
                tracing::warn!("Directions disabled: {e}");
                (String::new(), None)
            }
        };

        let (route_tx, route_rx) = mpsc::channel();
        Self {
            sheet: SheetController::new(SheetBounds::from_config(&config.sheet)),
            progress: ProgressTracker::from_config(&config.progress, &config.sites),
            config,
            simulated_driver,
            window: None,
            webviews: None,
            page: None,
            batch: ScriptBatch::new(),
            scene: MapScene::new(),
            driver: None,
            directions,
            access_token,
            sequencer: RouteSequencer::new(),
            pending_routes: Vec::new(),
            route_tx,
            route_rx,
            tokio_runtime: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// Replace the directions provider and the map access token.
    #[cfg(test)]
    pub(super) fn with_directions(
        mut self,
        provider: Option<Arc<dyn DirectionsProvider>>,
        access_token: &str,
    ) -> Self {
        self.directions = provider;
        self.access_token = access_token.to_string();
        self
    }
}

/// The map and the directions API share one Mapbox token.
fn build_directions(
    config: &ArrivalConfig,
) -> Result<(String, Arc<dyn DirectionsProvider>), DirectionsError> {
    let directions_config = DirectionsConfig::from_schema(&config.directions)?;
    let token = directions_config.access_token.clone();
    let client = DirectionsClient::new(directions_config)?;
    Ok((token, Arc::new(client)))
}
