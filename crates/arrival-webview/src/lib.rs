//! WebView host for the Arrival map page.
//!
//! Wraps the `wry` crate to provide:
//! - The bundled map page served over the `arrival://` custom protocol
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - A [`ScriptBatch`] that renders map, sheet and progress changes as
//!   JavaScript dispatches
//! - Navigation control and event collection

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod script;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, LocationErrorPayload, LocationFix, PointerPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use script::ScriptBatch;
