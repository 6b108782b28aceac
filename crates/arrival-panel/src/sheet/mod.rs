//! Gesture-to-height controller for the bottom sheet.
//!
//! The pure functions in [`gesture`] take a [`SheetState`] by value and
//! return the next one, so the height, bounds and snap rules are testable
//! without a live page. [`SheetController`] owns the state and pushes the
//! resulting heights to a [`SheetSurface`].

mod gesture;
mod types;

#[cfg(test)]
mod tests;

pub use gesture::{candidate_height, drag_to, release, start};
pub use types::{DragSession, PointerSample, SheetBounds, SheetState};

use tracing::{debug, trace};

/// Something that can display the sheet at a given height.
pub trait SheetSurface {
    /// Apply a height as a percentage of the viewport.
    fn set_sheet_height(&mut self, percent: f64);
}

/// Owns the sheet state and applies height changes to a surface.
#[derive(Debug, Clone)]
pub struct SheetController {
    bounds: SheetBounds,
    state: SheetState,
}

impl SheetController {
    pub fn new(bounds: SheetBounds) -> Self {
        Self {
            state: SheetState::new(&bounds),
            bounds,
        }
    }

    pub fn bounds(&self) -> &SheetBounds {
        &self.bounds
    }

    pub fn state(&self) -> &SheetState {
        &self.state
    }

    /// Apply the committed baseline, e.g. when the page (re)loads.
    pub fn render(&self, surface: &mut impl SheetSurface) {
        surface.set_sheet_height(self.state.committed);
    }

    /// Press on the drag handle.
    pub fn pointer_down(&mut self, sample: &PointerSample) {
        let Some(y) = sample.client_y() else {
            return;
        };
        self.state = start(self.state, y);
        debug!(origin_y = y, committed = self.state.committed, "sheet drag started");
    }

    /// Pointer moved anywhere on the page.
    pub fn pointer_move(
        &mut self,
        sample: &PointerSample,
        viewport_height: f64,
        surface: &mut impl SheetSurface,
    ) {
        let Some(y) = sample.client_y() else {
            return;
        };
        let (next, applied) = drag_to(self.state, &self.bounds, y, viewport_height);
        self.state = next;
        if let Some(height) = applied {
            trace!(height, "sheet drag");
            surface.set_sheet_height(height);
        }
    }

    /// Pointer released anywhere on the page.
    pub fn pointer_up(&mut self, surface: &mut impl SheetSurface) {
        let (next, committed) = release(self.state, &self.bounds);
        self.state = next;
        if let Some(height) = committed {
            debug!(height, "sheet snapped");
            surface.set_sheet_height(height);
        }
    }
}
