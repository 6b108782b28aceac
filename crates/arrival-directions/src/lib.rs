//! Directions client for Arrival.
//!
//! Provides:
//! - A [`DirectionsProvider`] trait for fetching a route between two points
//! - The Mapbox Directions API implementation ([`DirectionsClient`])
//! - Typed route results (geometry, distance, duration, step instructions)
//! - [`RouteSequencer`], which tags requests so that late responses never
//!   overwrite newer routes

pub mod mapbox;
pub mod route;
pub mod sequence;

use arrival_common::{LngLat, Profile};
use async_trait::async_trait;

pub use mapbox::{DirectionsClient, DirectionsConfig};
pub use route::{Route, RouteStep};
pub use sequence::{RouteSequencer, RouteTicket};

/// Fetches a single route.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn route(&self, request: &DirectionsRequest) -> Result<Route, DirectionsError>;
}

/// A route query: from `start` to `end` using `profile`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionsRequest {
    pub start: LngLat,
    pub end: LngLat,
    pub profile: Profile,
}

impl DirectionsRequest {
    pub fn new(start: LngLat, end: LngLat, profile: Profile) -> Self {
        Self {
            start,
            end,
            profile,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    #[error("Directions not configured: {0}")]
    NotConfigured(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("No route found ({0})")]
    NoRoute(String),
}

impl From<DirectionsError> for arrival_common::ArrivalError {
    fn from(e: DirectionsError) -> Self {
        arrival_common::ArrivalError::Directions(e.to_string())
    }
}
