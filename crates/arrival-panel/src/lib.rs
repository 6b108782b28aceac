//! Bottom sheet logic for Arrival.
//!
//! Two independent, UI-free state machines:
//! - [`sheet`]: translates drag gestures into a bounded sheet height and
//!   snaps it on release.
//! - [`progress`]: marks arrival steps complete when the driver comes
//!   within a threshold of a target.
//!
//! Each exposes a small surface trait so a renderer (the webview) can
//! apply the computed state.

pub mod progress;
pub mod sheet;

pub use progress::{is_close_to, ProgressSurface, ProgressTracker, ProgressUpdate};
pub use sheet::{PointerSample, SheetBounds, SheetController, SheetState, SheetSurface};
