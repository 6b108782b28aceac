//! Geolocation behaviour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LocationConfig {
    /// Keep sampling the position instead of a single fix.
    pub watch: bool,
    pub high_accuracy: bool,
    /// Alert the user when the position request is denied or fails.
    pub alert_on_error: bool,
}
