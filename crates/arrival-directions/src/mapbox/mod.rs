//! Mapbox Directions API client.
//!
//! Implements [`DirectionsProvider`](crate::DirectionsProvider) against
//! `https://api.mapbox.com/directions/v5/mapbox/{profile}/{coordinates}`,
//! authenticating with a public access token passed as a query parameter.

mod api;
mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::DirectionsClient;
pub use config::{DirectionsConfig, DEFAULT_BASE_URL};
