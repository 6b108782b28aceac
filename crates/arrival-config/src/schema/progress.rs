//! Arrival progress steps.

use arrival_common::SiteKind;
use serde::{Deserialize, Serialize};

/// One progress step, completed when the driver reaches `target`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepConfig {
    pub id: String,
    pub target: SiteKind,
    /// Element id of the step row in the sheet.
    pub step_element: String,
    /// Element id of the step's timeline marker.
    pub marker_element: String,
    /// Connector length once this step completes (0-100).
    pub line_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Planar distance in degrees below which the driver counts as arrived.
    pub threshold: f64,
    /// Element id of the connector line.
    pub line_element: String,
    pub steps: Vec<StepConfig>,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0001,
            line_element: "progress-line".to_string(),
            steps: vec![
                StepConfig {
                    id: "parking".to_string(),
                    target: SiteKind::ParkingLot,
                    step_element: "step-parking".to_string(),
                    marker_element: "marker-parking".to_string(),
                    line_percent: 50.0,
                },
                StepConfig {
                    id: "entrance".to_string(),
                    target: SiteKind::Entrance,
                    step_element: "step-entrance".to_string(),
                    marker_element: "marker-entrance".to_string(),
                    line_percent: 100.0,
                },
            ],
        }
    }
}
