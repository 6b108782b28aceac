//! Local content serving via custom protocol.
//!
//! The map page (`index.html`, `arrival.js`, `arrival.css`) is compiled
//! into the binary and served from the `arrival://` custom protocol, so no
//! local HTTP server is needed. Popup images come from an optional
//! directory mounted under `images/`.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Entry page of the bundled map client.
pub const INDEX_PATH: &str = "index.html";

const IMAGE_PREFIX: &str = "images/";

const BUNDLED: &[(&str, &str, &str)] = &[
    ("index.html", "text/html", include_str!("../assets/index.html")),
    (
        "arrival.js",
        "application/javascript",
        include_str!("../assets/arrival.js"),
    ),
    ("arrival.css", "text/css", include_str!("../assets/arrival.css")),
];

/// Serves the bundled page and popup images.
pub struct ContentProvider {
    /// Directory backing `images/...` requests.
    image_dir: Option<PathBuf>,
    /// In-memory assets, keyed by path.
    overrides: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    /// A provider with no assets at all.
    pub fn empty() -> Self {
        Self {
            image_dir: None,
            overrides: HashMap::new(),
        }
    }

    /// A provider serving the bundled map page.
    pub fn bundled() -> Self {
        let mut provider = Self::empty();
        for (path, mime, data) in BUNDLED {
            provider.add_override(*path, *mime, data.as_bytes());
        }
        provider
    }

    /// Serve `images/<name>` from `dir`.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }

    /// Register an in-memory asset.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');
        let clean = clean.split(['?', '#']).next().unwrap_or_default();

        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        let name = clean.strip_prefix(IMAGE_PREFIX)?;
        let base = self.image_dir.as_ref()?;
        let file_path = base.join(name);

        // Canonicalize both sides so `..` and symlinks cannot escape the base.
        let canonical_base = std::fs::canonicalize(base).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }

    pub fn image_dir(&self) -> Option<&Path> {
        self.image_dir.as_deref()
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
