//! Native window configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width (valid range: 240-7680).
    pub width: u32,
    /// Logical height (valid range: 320-4320).
    pub height: u32,
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Arrival".to_string(),
            width: 430,
            height: 860,
            devtools: cfg!(debug_assertions),
        }
    }
}
