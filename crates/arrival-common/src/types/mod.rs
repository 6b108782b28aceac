//! Shared geographic and routing types.

mod coord;
mod geometry;
mod profile;

pub use coord::{LngLat, SiteKind};
pub use geometry::LineString;
pub use profile::Profile;
