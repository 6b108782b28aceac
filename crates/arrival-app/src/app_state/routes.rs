//! Route fetching on the tokio runtime and drawing of the results.
//!
//! Requests are queued on the UI thread, spawned on a lazily created
//! runtime, and their outcomes come back over a std channel that the
//! poll loop drains. Each request carries a ticket from the sequencer so a
//! slow, older response never replaces a newer route.

use std::sync::Arc;

use arrival_common::{LngLat, Profile};
use arrival_directions::DirectionsRequest;
use arrival_map::LineLayer;

use super::core::ArrivalApp;
use super::types::{PendingRoute, RouteOutcome};

impl ArrivalApp {
    /// Queue a route fetch for `layer_id`.
    pub(super) fn request_route(
        &mut self,
        layer_id: &str,
        start: LngLat,
        end: LngLat,
        profile: Profile,
    ) {
        if self.directions.is_none() {
            tracing::debug!(layer = layer_id, "Directions disabled, route not requested");
            return;
        }

        let ticket = self.sequencer.issue(layer_id);
        tracing::debug!(layer = layer_id, seq = ticket.seq, %profile, "Route requested");
        self.pending_routes.push(PendingRoute {
            ticket,
            request: DirectionsRequest::new(start, end, profile),
        });
    }

    /// Spawn every queued route fetch.
    pub(super) fn start_pending_routes(&mut self) {
        if self.pending_routes.is_empty() {
            return;
        }

        let pending = std::mem::take(&mut self.pending_routes);
        let Some(provider) = self.directions.clone() else {
            return;
        };
        let tx = self.route_tx.clone();

        let Some(rt) = self.ensure_runtime() else {
            tracing::warn!(dropped = pending.len(), "No runtime, route requests dropped");
            return;
        };

        for PendingRoute { ticket, request } in pending {
            let provider = Arc::clone(&provider);
            let tx = tx.clone();
            rt.spawn(async move {
                let result = provider.route(&request).await;
                // The receiver is gone only during shutdown.
                let _ = tx.send(RouteOutcome {
                    ticket,
                    request,
                    result,
                });
            });
        }
    }

    /// Drain finished fetches (non-blocking).
    pub(super) fn poll_routes(&mut self) {
        while let Ok(outcome) = self.route_rx.try_recv() {
            self.apply_route_outcome(outcome);
        }
    }

    /// Draw a fetched route unless a newer one for the same layer is
    /// already on the map. Failures only end this attempt.
    pub(super) fn apply_route_outcome(&mut self, outcome: RouteOutcome) {
        let RouteOutcome {
            ticket,
            request,
            result,
        } = outcome;

        let route = match result {
            Ok(route) => route,
            Err(e) => {
                tracing::warn!(
                    layer = %ticket.layer_id,
                    seq = ticket.seq,
                    error = %e,
                    "Route request failed"
                );
                return;
            }
        };

        if !self.sequencer.accept(&ticket) {
            return;
        }

        tracing::info!(
            layer = %ticket.layer_id,
            profile = %request.profile,
            summary = %route.summary(),
            "Route updated"
        );
        let layer = LineLayer::new(ticket.layer_id, request.profile, route.geometry);
        self.scene.draw_route(&layer, &mut self.batch);
    }

    fn ensure_runtime(&mut self) -> Option<&tokio::runtime::Runtime> {
        if self.tokio_runtime.is_none() {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("arrival-directions")
                .enable_all()
                .build();
            match rt {
                Ok(rt) => self.tokio_runtime = Some(rt),
                Err(e) => {
                    tracing::warn!("Failed to start tokio runtime for directions: {e}");
                    return None;
                }
            }
        }
        self.tokio_runtime.as_ref()
    }
}
