//! Polling of webview events and route results.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use arrival_webview::{PageLoadState, WebViewEvent};

use super::core::ArrivalApp;
use super::types::POLL_INTERVAL;

impl ArrivalApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.start_pending_routes();
            self.poll_routes();
            self.flush_page();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        let events = match &self.webviews {
            Some(manager) => manager.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { body } => self.handle_ipc_message(&body),
                WebViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "Page load");
                    if state == PageLoadState::Finished {
                        if let Some(page) = self.page.as_mut() {
                            page.set_url(url);
                        }
                    }
                }
                WebViewEvent::TitleChanged { title } => {
                    if let Some(page) = self.page.as_mut() {
                        page.set_title(title);
                    }
                }
                WebViewEvent::NavigationRequested { url } => {
                    tracing::debug!(url = %url, "Navigation");
                }
            }
        }
    }

    /// Send queued commands to the page.
    pub(super) fn flush_page(&mut self) {
        let Some(page) = &self.page else {
            return;
        };
        if let Err(e) = page.flush(&mut self.batch) {
            tracing::warn!(error = %e, "Failed to send commands to page");
        }
    }
}
