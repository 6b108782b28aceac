//! Bottom sheet configuration.

use serde::{Deserialize, Serialize};

/// Heights are percentages of the viewport height.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub collapsed: f64,
    pub expanded: f64,
    /// Released heights strictly above this snap to `expanded`.
    pub snap_threshold: f64,
    /// CSS transition duration for snaps, in milliseconds. 0 disables it.
    pub snap_transition_ms: u32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            collapsed: 25.0,
            expanded: 60.0,
            snap_threshold: 42.5,
            snap_transition_ms: 0,
        }
    }
}
