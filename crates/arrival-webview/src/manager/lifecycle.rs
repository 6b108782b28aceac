use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use wry::http::{Response, StatusCode};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::ContentProvider;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Custom protocol scheme serving the bundled page.
pub const PROTOCOL: &str = "arrival";

impl WebViewManager {
    /// Create the WebView as a child of the given window.
    ///
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));
        builder = Self::attach_title_handler(builder, Arc::clone(&events));
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events));
        builder = self.attach_custom_protocol(builder);

        let webview = builder.with_url(&config.url).build_as_child(window)?;

        debug!(url = %config.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            current_url: config.url,
            current_title: String::new(),
        })
    }

    /// Set the content provider for the `arrival://` protocol.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol(PROTOCOL.to_string(), move |_wv_id, request| {
                let uri = request.uri();
                let path = uri.path();

                match cp.resolve(path) {
                    Some((mime, data)) => {
                        respond(StatusCode::OK, Some(mime.as_ref()), data.into_owned())
                    }
                    None => {
                        warn!(path = %path, "custom protocol: asset not found");
                        respond(StatusCode::NOT_FOUND, None, b"Not Found".to_vec())
                    }
                }
            });
        }
        builder
    }
}

fn respond(status: StatusCode, mime: Option<&str>, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::from(body));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    if let Some(value) = mime.and_then(|m| HeaderValue::from_str(m).ok()) {
        headers.insert(CONTENT_TYPE, value);
    }
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("arrival://localhost"),
    );
    response
}
