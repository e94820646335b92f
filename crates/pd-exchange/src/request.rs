//! Request and bid shapes.

use pd_core::{AgentId, RequestId};
use pd_material::Material;

/// A trader's declared demand for one commodity.
///
/// Produced by [`Trader::request_material`][crate::Trader::request_material];
/// the host turns it into a [`Request`] by stamping an id and the requester.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestPort {
    pub commodity: String,
    /// Desired quantity and composition.
    pub target:    Material,
    /// The most the requester can accept this tick.
    pub capacity:  f64,
}

impl RequestPort {
    pub fn new(commodity: impl Into<String>, target: Material, capacity: f64) -> Self {
        Self { commodity: commodity.into(), target, capacity }
    }
}

/// A request as published in the [`RequestBook`][crate::RequestBook].
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub id:        RequestId,
    pub requester: AgentId,
    pub commodity: String,
    pub target:    Material,
    pub capacity:  f64,
}

/// A trader's offer to fill some of the published requests.
///
/// `capacity` bounds the total amount the host may match across all of
/// `bids`.
#[derive(Clone, Debug, PartialEq)]
pub struct BidPort {
    pub bids:     Vec<Request>,
    pub capacity: f64,
}

impl BidPort {
    pub fn new(bids: Vec<Request>, capacity: f64) -> Self {
        Self { bids, capacity }
    }
}
