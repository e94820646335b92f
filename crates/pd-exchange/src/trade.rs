//! Cleared trades and the material sent to honor them.

use pd_core::{AgentId, TradeId};
use pd_material::Material;

use crate::Request;

/// A match between one request and one bidder.
#[derive(Clone, Debug, PartialEq)]
pub struct Trade {
    pub id:      TradeId,
    /// The request being filled, as published this tick.
    pub request: Request,
    pub bidder:  AgentId,
    /// Quantity the bidder is obliged to ship.
    pub amount:  f64,
}

impl Trade {
    #[inline]
    pub fn requester(&self) -> AgentId {
        self.request.requester
    }
}

/// The material a bidder ships for a trade.  A `Vec<TradeResponse>` plays the
/// role of a trade → material mapping; each trade appears at most once.
#[derive(Clone, Debug, PartialEq)]
pub struct TradeResponse {
    pub trade:    Trade,
    pub material: Material,
}
