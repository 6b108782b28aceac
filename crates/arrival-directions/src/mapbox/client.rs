//! Directions client struct and request building.

use reqwest::Url;

use crate::{DirectionsError, DirectionsRequest};

use super::config::DirectionsConfig;

/// Mapbox Directions API client.
pub struct DirectionsClient {
    pub(crate) config: DirectionsConfig,
    pub(crate) http: reqwest::Client,
}

impl DirectionsClient {
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| DirectionsError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &DirectionsConfig {
        &self.config
    }

    /// Build the request URL:
    /// `{base}/{profile}/{lng},{lat};{lng},{lat}?steps=true&geometries=geojson&access_token=…`
    pub(crate) fn request_url(&self, request: &DirectionsRequest) -> Result<Url, DirectionsError> {
        if !request.start.is_finite() || !request.end.is_finite() {
            return Err(DirectionsError::InvalidRequest(
                "coordinates must be finite".into(),
            ));
        }

        let base = self.config.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!(
            "{base}/{}/{};{}",
            request.profile.as_str(),
            request.start,
            request.end
        ))
        .map_err(|e| DirectionsError::InvalidRequest(format!("bad directions URL: {e}")))?;

        url.query_pairs_mut()
            .append_pair("steps", "true")
            .append_pair("geometries", "geojson")
            .append_pair("access_token", &self.config.access_token);

        Ok(url)
    }
}
