//! Ordering for concurrent route requests.
//!
//! Route fetches for the same layer may resolve out of order. Each request
//! takes a [`RouteTicket`]; a response is applied only if its ticket is
//! newer than the last one applied to that layer.

use std::collections::HashMap;

use tracing::debug;

/// Identifies one route request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTicket {
    pub layer_id: String,
    pub seq: u64,
}

#[derive(Debug, Default)]
pub struct RouteSequencer {
    next_seq: u64,
    last_applied: HashMap<String, u64>,
}

impl RouteSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new request for `layer_id`.
    pub fn issue(&mut self, layer_id: impl Into<String>) -> RouteTicket {
        self.next_seq += 1;
        RouteTicket {
            layer_id: layer_id.into(),
            seq: self.next_seq,
        }
    }

    /// Whether a response for `ticket` may be drawn. Records it if so.
    pub fn accept(&mut self, ticket: &RouteTicket) -> bool {
        match self.last_applied.get(&ticket.layer_id) {
            Some(&last) if ticket.seq <= last => {
                debug!(
                    layer = %ticket.layer_id,
                    seq = ticket.seq,
                    last_applied = last,
                    "discarding stale route response"
                );
                false
            }
            _ => {
                self.last_applied.insert(ticket.layer_id.clone(), ticket.seq);
                true
            }
        }
    }

    pub fn last_applied(&self, layer_id: &str) -> Option<u64> {
        self.last_applied.get(layer_id).copied()
    }
}
