//! IPC message validation and dispatch from the map page to Rust handlers.

use arrival_webview::{IpcMessage, LocationErrorPayload, LocationFix, PointerPayload};

use crate::app_state::core::ArrivalApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from JavaScript.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "page_ready",
    "sheet_pointer_down",
    "sheet_pointer_move",
    "sheet_pointer_up",
    "location",
    "location_unsupported",
    "location_error",
    "ping",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl ArrivalApp {
    /// Handle a single IPC message from the page.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
                return;
            }
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }

        tracing::trace!(kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "page_ready" => self.handle_page_ready(),
            "sheet_pointer_down" => {
                if let Some(p) = pointer_payload(&msg) {
                    if let Some(sample) = &p.pointer {
                        self.sheet.pointer_down(sample);
                    }
                }
            }
            "sheet_pointer_move" => {
                if let Some(p) = pointer_payload(&msg) {
                    if let Some(sample) = &p.pointer {
                        self.sheet
                            .pointer_move(sample, p.viewport_height, &mut self.batch);
                    }
                }
            }
            "sheet_pointer_up" => self.sheet.pointer_up(&mut self.batch),
            "location" => match msg.payload_as::<LocationFix>() {
                Ok(fix) => self.handle_location_fix(fix.position()),
                Err(e) => tracing::warn!(error = %e, "Malformed location payload"),
            },
            "location_unsupported" => self.handle_location_unsupported(),
            "location_error" => {
                let error = msg
                    .payload_as::<LocationErrorPayload>()
                    .unwrap_or_else(|_| LocationErrorPayload {
                        code: 0,
                        message: String::new(),
                    });
                self.handle_location_error(error);
            }
            "ping" => self.batch.pong(),
            _ => {
                // Shouldn't happen; allowlist checked above
                tracing::warn!(kind = %msg.kind, "Unhandled IPC kind");
            }
        }
    }
}

fn pointer_payload(msg: &IpcMessage) -> Option<PointerPayload> {
    match msg.payload_as::<PointerPayload>() {
        Ok(p) => Some(p),
        Err(e) => {
            tracing::warn!(kind = %msg.kind, error = %e, "Malformed pointer payload");
            None
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
