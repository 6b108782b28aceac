//! Internal types and constants for the app state module.

use std::time::Duration;

use arrival_directions::{DirectionsError, DirectionsRequest, Route, RouteTicket};

/// How often to poll webview events and route results (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Layer showing the drive from the driver to the parking lot.
pub(super) const DRIVE_LAYER: &str = "route";

/// Layer showing the walk from the parking lot to the entrance.
pub(super) const WALK_LAYER: &str = "walk-route";

pub(super) const GEOLOCATION_UNSUPPORTED: &str = "Geolocation is not supported by your browser.";

/// A route request waiting to be spawned on the runtime.
#[derive(Debug, Clone)]
pub(super) struct PendingRoute {
    pub ticket: RouteTicket,
    pub request: DirectionsRequest,
}

/// A finished route fetch, sent back from the runtime.
#[derive(Debug)]
pub(super) struct RouteOutcome {
    pub ticket: RouteTicket,
    pub request: DirectionsRequest,
    pub result: Result<Route, DirectionsError>,
}
