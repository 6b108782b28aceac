//! IPC protocol between Rust and the map page.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the page calls `window.arrival.ipc.send(kind, payload)`,
//!   which posts `{ kind, payload }` to the `ipc_handler` on the WebView.
//! - **Rust -> JS**: Rust evaluates `window.arrival.ipc._dispatch(kind, payload)`
//!   (see [`js_dispatch_message`]) and the page runs the registered handler.

use arrival_common::LngLat;
use arrival_panel::PointerSample;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type.
    pub kind: String,
    /// Arbitrary JSON; `null` when the page sends none.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Deserialize the payload into a typed value.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.payload)
    }
}

/// Payload of `sheet_pointer_*` messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerPayload {
    /// Absent on `sheet_pointer_up`.
    #[serde(default)]
    pub pointer: Option<PointerSample>,
    /// `window.innerHeight` at the time of the event.
    #[serde(default)]
    pub viewport_height: f64,
}

/// Payload of a `location` message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub lng: f64,
    pub lat: f64,
    /// Accuracy radius in meters, when the platform reports one.
    #[serde(default)]
    pub accuracy: Option<f64>,
}

impl LocationFix {
    pub fn position(&self) -> LngLat {
        LngLat::new(self.lng, self.lat)
    }
}

/// Payload of a `location_error` message (a `GeolocationPositionError`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationErrorPayload {
    /// 1 = permission denied, 2 = position unavailable, 3 = timeout.
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub message: String,
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// Injected as an initialization script before the page loads.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.arrival = window.arrival || {};
    window.arrival.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.arrival.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
