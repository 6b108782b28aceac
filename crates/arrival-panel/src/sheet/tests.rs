//! Tests for the sheet gesture state machine.

use super::*;

/// Records every height pushed to it.
#[derive(Default)]
struct RecordingSurface {
    heights: Vec<f64>,
}

impl SheetSurface for RecordingSurface {
    fn set_sheet_height(&mut self, percent: f64) {
        self.heights.push(percent);
    }
}

fn mouse(y: f64) -> PointerSample {
    PointerSample::Mouse { client_y: y }
}

const VIEWPORT: f64 = 800.0;

// -- Pure transitions --

#[test]
fn new_state_is_collapsed_and_idle() {
    let state = SheetState::new(&SheetBounds::default());
    assert_eq!(state.committed, 25.0);
    assert_eq!(state.applied, 25.0);
    assert!(!state.is_dragging());
}

#[test]
fn start_records_origin_without_changing_height() {
    let bounds = SheetBounds::default();
    let state = start(SheetState::new(&bounds), 500.0);
    assert_eq!(state.drag, Some(DragSession { origin_y: 500.0 }));
    assert_eq!(state.applied, 25.0);
}

#[test]
fn in_range_candidate_is_baseline_plus_scaled_delta() {
    let bounds = SheetBounds::default();
    let state = start(SheetState::new(&bounds), 500.0);

    for y in [500.0, 450.0, 380.0, 300.0, 221.0] {
        let expected = 25.0 + ((500.0 - y) / VIEWPORT) * 100.0;
        let (next, applied) = drag_to(state, &bounds, y, VIEWPORT);
        assert!(bounds.contains(expected));
        assert_eq!(applied, Some(expected));
        assert_eq!(next.applied, expected);
    }
}

#[test]
fn out_of_range_candidate_is_rejected_not_clamped() {
    let bounds = SheetBounds::default();
    let state = start(SheetState::new(&bounds), 500.0);

    // Halfway to the top: +10 points.
    let (state, applied) = drag_to(state, &bounds, 420.0, VIEWPORT);
    assert_eq!(applied, Some(35.0));

    // Far past the top: 25 + 62.5, rejected.
    let (state, applied) = drag_to(state, &bounds, 0.0, VIEWPORT);
    assert_eq!(applied, None);
    assert_eq!(state.applied, 35.0);

    // Below the bottom: 25 - 12.5, rejected.
    let (state, applied) = drag_to(state, &bounds, 600.0, VIEWPORT);
    assert_eq!(applied, None);
    assert_eq!(state.applied, 35.0);
}

#[test]
fn boundaries_are_inclusive() {
    let bounds = SheetBounds::default();
    let state = start(SheetState::new(&bounds), 500.0);

    let (_, applied) = drag_to(state, &bounds, 500.0, VIEWPORT);
    assert_eq!(applied, Some(25.0));

    // +35 points lands exactly on 60.
    let (_, applied) = drag_to(state, &bounds, 220.0, VIEWPORT);
    assert_eq!(applied, Some(60.0));
}

#[test]
fn move_without_active_drag_is_ignored() {
    let bounds = SheetBounds::default();
    let state = SheetState::new(&bounds);
    let (next, applied) = drag_to(state, &bounds, 100.0, VIEWPORT);
    assert_eq!(applied, None);
    assert_eq!(next, state);
}

#[test]
fn degenerate_viewport_is_ignored() {
    let bounds = SheetBounds::default();
    let state = start(SheetState::new(&bounds), 500.0);
    assert_eq!(drag_to(state, &bounds, 400.0, 0.0).1, None);
    assert_eq!(drag_to(state, &bounds, 400.0, -10.0).1, None);
    assert_eq!(drag_to(state, &bounds, 400.0, f64::NAN).1, None);
}

#[test]
fn release_snaps_above_threshold_to_expanded() {
    let bounds = SheetBounds::default();
    let state = SheetState {
        committed: 25.0,
        applied: 42.6,
        drag: Some(DragSession { origin_y: 0.0 }),
    };
    let (next, committed) = release(state, &bounds);
    assert_eq!(committed, Some(60.0));
    assert_eq!(next.committed, 60.0);
    assert_eq!(next.applied, 60.0);
    assert!(!next.is_dragging());
}

#[test]
fn release_at_exact_threshold_collapses() {
    let bounds = SheetBounds::default();
    let state = SheetState {
        committed: 60.0,
        applied: 42.5,
        drag: Some(DragSession { origin_y: 0.0 }),
    };
    assert_eq!(release(state, &bounds).1, Some(25.0));
}

#[test]
fn release_snap_rule_holds_across_range() {
    let bounds = SheetBounds::default();
    let mut h = 25.0;
    while h <= 60.0 {
        let state = SheetState {
            committed: 25.0,
            applied: h,
            drag: Some(DragSession { origin_y: 0.0 }),
        };
        let expected = if h > 42.5 { 60.0 } else { 25.0 };
        assert_eq!(release(state, &bounds).1, Some(expected), "applied {h}");
        h += 0.25;
    }
}

#[test]
fn release_without_drag_is_noop() {
    let bounds = SheetBounds::default();
    let state = SheetState::new(&bounds);
    let (next, committed) = release(state, &bounds);
    assert_eq!(committed, None);
    assert_eq!(next, state);
}

#[test]
fn release_without_move_reapplies_baseline() {
    let bounds = SheetBounds::default();
    for baseline in [25.0, 60.0] {
        let state = SheetState {
            committed: baseline,
            applied: baseline,
            drag: None,
        };
        let (_, committed) = release(start(state, 300.0), &bounds);
        assert_eq!(committed, Some(baseline));
    }
}

#[test]
fn custom_bounds_snap_to_their_own_points() {
    let bounds = SheetBounds {
        collapsed: 10.0,
        expanded: 90.0,
        snap_threshold: 30.0,
    };
    let state = SheetState {
        committed: 10.0,
        applied: 31.0,
        drag: Some(DragSession { origin_y: 0.0 }),
    };
    assert_eq!(release(state, &bounds).1, Some(90.0));
}

// -- Pointer samples --

#[test]
fn pointer_sample_unifies_mouse_and_touch() {
    assert_eq!(mouse(12.5).client_y(), Some(12.5));
    let touch = PointerSample::Touch {
        touches: vec![40.0, 90.0],
    };
    assert_eq!(touch.client_y(), Some(40.0));
    let lifted = PointerSample::Touch { touches: vec![] };
    assert_eq!(lifted.client_y(), None);
}

#[test]
fn pointer_sample_deserializes_from_ipc_payload() {
    let m: PointerSample = serde_json::from_str(r#"{"source":"mouse","client_y":310.0}"#).unwrap();
    assert_eq!(m, mouse(310.0));
    let t: PointerSample =
        serde_json::from_str(r#"{"source":"touch","touches":[120.5]}"#).unwrap();
    assert_eq!(t.client_y(), Some(120.5));
}

// -- Controller scenarios --

#[test]
fn scenario_drag_up_twenty_points_then_release_expands() {
    let mut sheet = SheetController::new(SheetBounds::default());
    let mut surface = RecordingSurface::default();

    sheet.pointer_down(&mouse(600.0));
    // 160px of an 800px viewport is +20 points.
    sheet.pointer_move(&mouse(440.0), VIEWPORT, &mut surface);
    assert_eq!(surface.heights, vec![45.0]);

    sheet.pointer_up(&mut surface);
    assert_eq!(surface.heights, vec![45.0, 60.0]);
    assert_eq!(sheet.state().committed, 60.0);
}

#[test]
fn scenario_overshoot_from_expanded_stays_expanded() {
    let mut sheet = SheetController::new(SheetBounds::default());
    let mut surface = RecordingSurface::default();

    // Expand first.
    sheet.pointer_down(&mouse(600.0));
    sheet.pointer_move(&mouse(440.0), VIEWPORT, &mut surface);
    sheet.pointer_up(&mut surface);
    surface.heights.clear();

    // -40 points would be 20: rejected.
    sheet.pointer_down(&mouse(100.0));
    sheet.pointer_move(&mouse(420.0), VIEWPORT, &mut surface);
    assert!(surface.heights.is_empty());
    assert_eq!(sheet.state().applied, 60.0);

    sheet.pointer_up(&mut surface);
    assert_eq!(surface.heights, vec![60.0]);
}

#[test]
fn controller_ignores_moves_before_press_and_after_release() {
    let mut sheet = SheetController::new(SheetBounds::default());
    let mut surface = RecordingSurface::default();

    sheet.pointer_move(&mouse(100.0), VIEWPORT, &mut surface);
    sheet.pointer_up(&mut surface);
    assert!(surface.heights.is_empty());

    sheet.pointer_down(&mouse(500.0));
    sheet.pointer_up(&mut surface);
    sheet.pointer_move(&mouse(300.0), VIEWPORT, &mut surface);
    assert_eq!(surface.heights, vec![25.0]);
}

#[test]
fn controller_ignores_touch_without_points() {
    let mut sheet = SheetController::new(SheetBounds::default());
    sheet.pointer_down(&PointerSample::Touch { touches: vec![] });
    assert!(!sheet.state().is_dragging());
}

#[test]
fn render_applies_committed_baseline() {
    let sheet = SheetController::new(SheetBounds::default());
    let mut surface = RecordingSurface::default();
    sheet.render(&mut surface);
    assert_eq!(surface.heights, vec![25.0]);
}

#[test]
fn bounds_from_config() {
    let config = arrival_config::schema::SheetConfig::default();
    assert_eq!(SheetBounds::from_config(&config), SheetBounds::default());
}
