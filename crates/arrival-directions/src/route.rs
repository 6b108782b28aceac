//! Route results and the Directions API response shape.

use arrival_common::LineString;
use serde::Deserialize;

use crate::DirectionsError;

/// The first route returned for a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub geometry: LineString,
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    pub steps: Vec<RouteStep>,
}

/// One maneuver along the route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep {
    pub instruction: String,
    /// Meters until the next maneuver.
    pub distance: f64,
}

impl Route {
    /// Short human summary, e.g. `"1.2 km, 4 min"`.
    pub fn summary(&self) -> String {
        let distance = if self.distance >= 1000.0 {
            format!("{:.1} km", self.distance / 1000.0)
        } else {
            format!("{:.0} m", self.distance)
        };
        let minutes = (self.duration / 60.0).round().max(1.0);
        format!("{distance}, {minutes:.0} min")
    }
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRoute {
    pub geometry: LineString,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLeg {
    #[serde(default)]
    pub steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStep {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub maneuver: RawManeuver,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawManeuver {
    #[serde(default)]
    pub instruction: String,
}

/// Extract the first route from a response body.
pub(crate) fn parse_first_route(body: &str) -> Result<Route, DirectionsError> {
    let response: DirectionsResponse =
        serde_json::from_str(body).map_err(|e| DirectionsError::ParseError(e.to_string()))?;

    let code = response.code.unwrap_or_else(|| "Ok".to_string());
    let Some(raw) = response.routes.into_iter().next() else {
        let reason = match response.message {
            Some(message) => format!("{code}: {message}"),
            None => code,
        };
        return Err(DirectionsError::NoRoute(reason));
    };

    let steps = raw
        .legs
        .into_iter()
        .flat_map(|leg| leg.steps)
        .map(|s| RouteStep {
            instruction: s.maneuver.instruction,
            distance: s.distance,
        })
        .collect();

    Ok(Route {
        geometry: raw.geometry,
        distance: raw.distance,
        duration: raw.duration,
        steps,
    })
}
