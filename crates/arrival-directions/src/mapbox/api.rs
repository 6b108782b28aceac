//! DirectionsProvider trait implementation for DirectionsClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::route::parse_first_route;
use crate::{DirectionsError, DirectionsProvider, DirectionsRequest, Route};

use super::client::DirectionsClient;

#[async_trait]
impl DirectionsProvider for DirectionsClient {
    async fn route(&self, request: &DirectionsRequest) -> Result<Route, DirectionsError> {
        let url = self.request_url(request)?;

        // The URL carries the access token; log the parts instead.
        debug!(profile = %request.profile, start = %request.start, end = %request.end, "Directions request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| DirectionsError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!(profile = %request.profile, "Directions rate limited");
            return Err(DirectionsError::RateLimited);
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectionsError::NetworkError(e.without_url().to_string()))?;

        if !status.is_success() {
            let text = body.chars().take(200).collect::<String>();
            return Err(DirectionsError::ApiError(format!("HTTP {status}: {text}")));
        }

        let route = parse_first_route(&body)?;
        debug!(
            profile = %request.profile,
            points = route.geometry.len(),
            summary = %route.summary(),
            "Directions response"
        );
        Ok(route)
    }
}
