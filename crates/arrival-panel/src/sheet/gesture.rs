//! Pure drag transitions.

use super::types::{DragSession, SheetBounds, SheetState};

/// Begin a drag at pointer `y`. Nothing is applied yet.
pub fn start(state: SheetState, y: f64) -> SheetState {
    SheetState {
        drag: Some(DragSession { origin_y: y }),
        ..state
    }
}

/// Height implied by moving the pointer from `origin_y` to `y`.
///
/// Dragging up (smaller `y`) grows the sheet. Returns `None` for a
/// degenerate viewport.
pub fn candidate_height(committed: f64, origin_y: f64, y: f64, viewport_height: f64) -> Option<f64> {
    if !viewport_height.is_finite() || viewport_height <= 0.0 {
        return None;
    }
    let delta = origin_y - y;
    Some(committed + (delta / viewport_height) * 100.0)
}

/// Track the pointer during a drag.
///
/// Returns the height to apply when the candidate lies within the bounds.
/// Out-of-range candidates are rejected outright and leave the applied
/// height where it was. Ignored entirely when no drag is active.
pub fn drag_to(
    state: SheetState,
    bounds: &SheetBounds,
    y: f64,
    viewport_height: f64,
) -> (SheetState, Option<f64>) {
    let Some(drag) = state.drag else {
        return (state, None);
    };
    match candidate_height(state.committed, drag.origin_y, y, viewport_height) {
        Some(height) if bounds.contains(height) => (
            SheetState {
                applied: height,
                ..state
            },
            Some(height),
        ),
        _ => (state, None),
    }
}

/// End a drag and snap to the nearest resting height.
///
/// Returns the committed height, or `None` if no drag was active.
pub fn release(state: SheetState, bounds: &SheetBounds) -> (SheetState, Option<f64>) {
    if state.drag.is_none() {
        return (state, None);
    }
    let committed = bounds.snap(state.applied);
    (
        SheetState {
            committed,
            applied: committed,
            drag: None,
        },
        Some(committed),
    )
}
