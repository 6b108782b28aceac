//! Remote directions endpoint configuration.

use arrival_common::Profile;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionsSchemaConfig {
    pub base_url: String,
    /// Falls back to the `MAPBOX_ACCESS_TOKEN` environment variable.
    pub access_token: Option<String>,
    /// Profile for the driver -> parking lot leg.
    pub drive_profile: Profile,
    /// Profile for the parking lot -> entrance leg.
    pub walk_profile: Profile,
    /// Request timeout in seconds (valid range: 1-300).
    pub timeout_secs: u64,
}

impl std::fmt::Debug for DirectionsSchemaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsSchemaConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("drive_profile", &self.drive_profile)
            .field("walk_profile", &self.walk_profile)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for DirectionsSchemaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mapbox.com/directions/v5/mapbox".to_string(),
            access_token: None,
            drive_profile: Profile::Driving,
            walk_profile: Profile::Walking,
            timeout_secs: 30,
        }
    }
}
