//! Window creation and webview setup.

use std::path::Path;
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use arrival_webview::{ContentProvider, WebViewConfig, WebViewManager};

use super::bounds::window_bounds;
use super::core::ArrivalApp;

impl ArrivalApp {
    /// Create the window and the map webview inside it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let mut manager = WebViewManager::new();
        manager.set_content_provider(self.content_provider());

        let webview_config = WebViewConfig::default().with_devtools(window_config.devtools);
        match manager.create(window.as_ref(), window_bounds(&window), webview_config) {
            Ok(handle) => {
                tracing::info!(url = %handle.current_url(), "Map page created");
                self.page = Some(handle);
            }
            Err(e) => {
                tracing::error!("Failed to create webview: {e}");
                return false;
            }
        }

        self.webviews = Some(manager);
        self.window = Some(window);
        tracing::info!("Window created");
        true
    }

    /// Bundled page plus the optional popup image directory.
    pub(super) fn content_provider(&self) -> ContentProvider {
        let provider = ContentProvider::bundled();
        match &self.config.map.image_dir {
            Some(dir) => {
                if !Path::new(dir).is_dir() {
                    tracing::warn!(path = %dir, "Image directory not found; popups will show no images");
                }
                provider.with_image_dir(dir)
            }
            None => provider,
        }
    }

    /// Keep the webview covering the whole window.
    pub(super) fn sync_webview_bounds(&self) {
        if let (Some(window), Some(page)) = (&self.window, &self.page) {
            if let Err(e) = page.set_bounds(window_bounds(window)) {
                tracing::warn!(error = %e, "Failed to resize webview");
            }
        }
    }
}
