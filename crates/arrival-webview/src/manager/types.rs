/// URL of the bundled map page.
pub const PAGE_URL: &str = "arrival://localhost/index.html";

/// Configuration for creating the map WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: PAGE_URL.to_string(),
            devtools: cfg!(debug_assertions),
            user_agent: Some(concat!("Arrival/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl WebViewConfig {
    /// Load a URL instead of the bundled page.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_devtools(mut self, devtools: bool) -> Self {
        self.devtools = devtools;
        self
    }
}
