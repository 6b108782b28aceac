//! Arrival progress tracking.
//!
//! A step completes the first time the driver is observed within
//! `threshold` of the step's target. Completion is monotonic.

mod proximity;
mod tracker;

pub use proximity::{is_close_to, DEFAULT_THRESHOLD};
pub use tracker::{ProgressStep, ProgressTracker, ProgressUpdate};

/// Something that can display step completion and the connector line.
pub trait ProgressSurface {
    /// Add the completed style to an element. Repeating it is harmless.
    fn mark_completed(&mut self, element: &str);
    /// Set the connector length as a percentage.
    fn set_progress_line(&mut self, element: &str, percent: f64);
}
