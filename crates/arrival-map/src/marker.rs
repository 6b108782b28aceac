//! Map markers and their popups.

use arrival_common::LngLat;
use arrival_config::schema::{SiteConfig, SitesConfig};

/// Marker id used for the live driver position.
pub const DRIVER_MARKER_ID: &str = "driver";

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub position: LngLat,
    /// Any CSS color.
    pub color: String,
    pub popup: Option<Popup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub title: String,
    pub image: Option<PopupImage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupImage {
    pub src: String,
    pub alt: String,
}

impl Popup {
    /// Popup body: a heading and an optional 100px-wide image.
    pub fn html(&self) -> String {
        let mut html = format!("<h4>{}</h4>", escape_html(&self.title));
        if let Some(image) = &self.image {
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" style=\"width:100px;height:auto;\">",
                escape_html(&image.src),
                escape_html(&image.alt)
            ));
        }
        html
    }
}

fn site_marker(id: &str, site: &SiteConfig) -> Marker {
    Marker {
        id: id.to_string(),
        position: site.position(),
        color: site.marker_color.clone(),
        popup: Some(Popup {
            title: site.title.clone(),
            image: site.image.as_ref().map(|src| PopupImage {
                src: src.clone(),
                alt: site.title.clone(),
            }),
        }),
    }
}

/// Markers for the parking lot and the entrance, in that order.
pub fn site_markers(sites: &SitesConfig) -> Vec<Marker> {
    vec![
        site_marker("parking_lot", &sites.parking_lot),
        site_marker("entrance", &sites.entrance),
    ]
}

/// The driver's marker has no popup.
pub fn driver_marker(position: LngLat, color: &str) -> Marker {
    Marker {
        id: DRIVER_MARKER_ID.to_string(),
        position,
        color: color.to_string(),
        popup: None,
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
