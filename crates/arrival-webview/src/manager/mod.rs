//! WebView lifecycle management.
//!
//! `WebViewManager` builds the single `wry::WebView` hosting the map page
//! and collects its events for the main loop.

use std::sync::{Arc, Mutex, PoisonError};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Builds the map WebView and buffers its events.
pub struct WebViewManager {
    /// Event sink; the main event loop drains it.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Optional content provider for the `arrival://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *events)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_queue() {
        let manager = WebViewManager::new();
        manager
            .events
            .lock()
            .unwrap()
            .push(WebViewEvent::IpcMessage {
                body: r#"{"kind":"ping"}"#.into(),
            });
        assert_eq!(manager.drain_events().len(), 1);
        assert!(manager.drain_events().is_empty());
    }
}
