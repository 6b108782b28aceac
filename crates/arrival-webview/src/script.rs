//! Rendering scene, sheet and progress changes as page commands.
//!
//! [`ScriptBatch`] implements every surface trait by queueing
//! `window.arrival.ipc._dispatch(...)` snippets. The host flushes a batch
//! into the WebView once per handled event.

use arrival_common::LngLat;
use arrival_map::{LineLayer, MapSurface, MapView, Marker};
use arrival_panel::{ProgressSurface, SheetSurface};
use serde_json::{json, Value};

use crate::ipc::js_dispatch_message;

/// Queue of JavaScript dispatches waiting to be evaluated.
#[derive(Debug, Default, Clone)]
pub struct ScriptBatch {
    commands: Vec<(String, Value)>,
}

impl ScriptBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw command.
    pub fn push(&mut self, kind: &str, payload: Value) {
        self.commands.push((kind.to_string(), payload));
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Queued command kinds, in order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|(kind, _)| kind.as_str())
    }

    /// Queued commands, in order.
    pub fn commands(&self) -> &[(String, Value)] {
        &self.commands
    }

    /// Join every queued command into one script and clear the queue.
    pub fn take_script(&mut self) -> Option<String> {
        if self.commands.is_empty() {
            return None;
        }
        let script = self
            .commands
            .drain(..)
            .map(|(kind, payload)| js_dispatch_message(&kind, &payload))
            .collect::<Vec<_>>()
            .join("\n");
        Some(script)
    }

    /// Ask the page to start geolocation.
    pub fn request_location(&mut self, watch: bool, high_accuracy: bool) {
        self.push(
            "request_location",
            json!({ "watch": watch, "high_accuracy": high_accuracy }),
        );
    }

    /// Set the CSS transition used when the sheet snaps; 0 disables it.
    pub fn configure_sheet(&mut self, transition_ms: u32) {
        self.push("configure_sheet", json!({ "transition_ms": transition_ms }));
    }

    pub fn alert(&mut self, message: &str) {
        self.push("alert", json!({ "message": message }));
    }

    pub fn pong(&mut self) {
        self.push("pong", Value::Null);
    }
}

impl MapSurface for ScriptBatch {
    fn init_map(&mut self, view: &MapView) {
        self.push(
            "init_map",
            json!({
                "access_token": view.access_token,
                "style": view.style,
                "center": view.center,
                "zoom": view.zoom,
                "navigation_control": view.navigation_control,
            }),
        );
    }

    fn add_marker(&mut self, marker: &Marker) {
        self.push(
            "add_marker",
            json!({
                "id": marker.id,
                "lng_lat": marker.position,
                "color": marker.color,
                "popup_html": marker.popup.as_ref().map(|p| p.html()),
            }),
        );
    }

    fn move_marker(&mut self, id: &str, position: LngLat) {
        self.push("move_marker", json!({ "id": id, "lng_lat": position }));
    }

    fn set_center(&mut self, center: LngLat) {
        self.push("set_center", json!({ "center": center }));
    }

    fn add_line_layer(&mut self, layer: &LineLayer) {
        self.push("add_line_layer", json!({ "layer": layer.to_layer_spec() }));
    }

    fn remove_layer(&mut self, id: &str) {
        self.push("remove_layer", json!({ "id": id }));
    }
}

impl SheetSurface for ScriptBatch {
    fn set_sheet_height(&mut self, percent: f64) {
        self.push("set_sheet_height", json!({ "percent": percent }));
    }
}

impl ProgressSurface for ScriptBatch {
    fn mark_completed(&mut self, element: &str) {
        self.push("mark_completed", json!({ "element": element }));
    }

    fn set_progress_line(&mut self, element: &str, percent: f64) {
        self.push(
            "set_progress_line",
            json!({ "element": element, "percent": percent }),
        );
    }
}
