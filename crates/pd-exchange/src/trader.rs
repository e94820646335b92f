//! The `Trader` trait — the hooks the driver and host call every tick.

use pd_core::{AgentId, Tick};

use crate::{BidPort, ExchangeResult, RequestBook, RequestPort, Trade, TradeResponse};

/// A participant in the exchange.
///
/// Per tick the driver calls, in order:
///
/// 1. [`advance`][Self::advance] on every trader,
/// 2. [`request_material`][Self::request_material] on every trader,
/// 3. [`bid_on_requests`][Self::bid_on_requests] with the assembled book,
/// 4. [`commit_trades`][Self::commit_trades] on each bidder that won trades,
/// 5. [`receive_material`][Self::receive_material] on each requester that
///    got responses.
///
/// Steps 2 and 3 take `&self` and may run in parallel across traders.  No two
/// hooks of the same trader ever overlap.
///
/// The commit and receive hooks are fallible only for invariant violations
/// (overfilling or over-drawing a buffer).  An ordinary "nothing happened" is
/// `Ok` with an empty result.
pub trait Trader: Send + Sync {
    fn id(&self) -> AgentId;

    /// Advance internal timers by one tick.
    fn advance(&mut self, _tick: Tick) {}

    /// Requests this trader wants to post this tick.
    fn request_material(&self, _tick: Tick) -> Vec<RequestPort> {
        vec![]
    }

    /// Bids on requests posted this tick.
    fn bid_on_requests(&self, _tick: Tick, _requests: &RequestBook) -> Vec<BidPort> {
        vec![]
    }

    /// Honour trades this trader won as bidder, returning the shipped
    /// material per trade.
    fn commit_trades(&mut self, _tick: Tick, _trades: &[Trade]) -> ExchangeResult<Vec<TradeResponse>> {
        Ok(vec![])
    }

    /// Accept material shipped for this trader's own requests.
    fn receive_material(&mut self, _tick: Tick, _responses: Vec<TradeResponse>) -> ExchangeResult<()> {
        Ok(())
    }

    /// A short description of the trader's state for output.
    fn snapshot(&self) -> TraderSnapshot {
        TraderSnapshot { agent: self.id(), phase: "idle", inventory: 0.0 }
    }
}

/// A point-in-time summary of one trader, written by output observers.
#[derive(Clone, Debug, PartialEq)]
pub struct TraderSnapshot {
    pub agent:     AgentId,
    /// Short lowercase label, e.g. `"transporting"`.
    pub phase:     &'static str,
    /// Quantity held in inventory.
    pub inventory: f64,
}
