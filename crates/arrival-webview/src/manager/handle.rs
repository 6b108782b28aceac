use wry::WebView;

/// Handle to the map WebView.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    pub(super) current_title: String,
}

impl WebViewHandle {
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    /// Reload the page. The page announces itself again with `page_ready`.
    pub fn reload(&mut self) -> Result<(), wry::Error> {
        self.webview.load_url(&self.current_url)
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a single command to the page.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Evaluate every queued command. Does nothing for an empty batch.
    pub fn flush(&self, batch: &mut crate::script::ScriptBatch) -> Result<(), wry::Error> {
        match batch.take_script() {
            Some(script) => self.webview.evaluate_script(&script),
            None => Ok(()),
        }
    }

    /// Set the WebView bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// Update the tracked title.
    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }

    /// Update the tracked URL after a navigation.
    pub fn set_url(&mut self, url: String) {
        self.current_url = url;
    }
}
