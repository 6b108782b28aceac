//! Graceful shutdown: drop the webview, stop route fetches.

use std::time::Duration;

use super::core::ArrivalApp;

impl ArrivalApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// The webview goes first so no more IPC arrives, then the runtime is
    /// stopped, cancelling in-flight route fetches.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.page = None;
        self.webviews = None;

        self.pending_routes.clear();
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }
}
