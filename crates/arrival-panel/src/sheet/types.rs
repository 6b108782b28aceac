use arrival_config::schema::SheetConfig;
use serde::{Deserialize, Serialize};

/// Height limits and snap point, as percentages of the viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetBounds {
    pub collapsed: f64,
    pub expanded: f64,
    pub snap_threshold: f64,
}

impl Default for SheetBounds {
    fn default() -> Self {
        Self {
            collapsed: 25.0,
            expanded: 60.0,
            snap_threshold: 42.5,
        }
    }
}

impl SheetBounds {
    pub fn from_config(config: &SheetConfig) -> Self {
        Self {
            collapsed: config.collapsed,
            expanded: config.expanded,
            snap_threshold: config.snap_threshold,
        }
    }

    /// Inclusive range check.
    pub fn contains(&self, height: f64) -> bool {
        height >= self.collapsed && height <= self.expanded
    }

    /// Resting height for a released sheet.
    pub fn snap(&self, height: f64) -> f64 {
        if height > self.snap_threshold {
            self.expanded
        } else {
            self.collapsed
        }
    }
}

/// An in-progress drag, discarded on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer y (client pixels) at press time.
    pub origin_y: f64,
}

/// Sheet height state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetState {
    /// Baseline that drags are measured from; always a snap point.
    pub committed: f64,
    /// Height currently shown.
    pub applied: f64,
    pub drag: Option<DragSession>,
}

impl SheetState {
    /// Collapsed and idle.
    pub fn new(bounds: &SheetBounds) -> Self {
        Self {
            committed: bounds.collapsed,
            applied: bounds.collapsed,
            drag: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

/// A pointer position from either a mouse or a touch event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum PointerSample {
    Mouse { client_y: f64 },
    /// Client y of each active touch point.
    Touch { touches: Vec<f64> },
}

impl PointerSample {
    /// The vertical position, using the first touch point for touch input.
    pub fn client_y(&self) -> Option<f64> {
        match self {
            PointerSample::Mouse { client_y } => Some(*client_y),
            PointerSample::Touch { touches } => touches.first().copied(),
        }
    }
}
