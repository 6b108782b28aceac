pub mod errors;
pub mod types;

pub use errors::{ArrivalError, ConfigError};
pub use types::{LineString, LngLat, Profile, SiteKind};

pub type Result<T> = std::result::Result<T, ArrivalError>;
