//! `ExchangeHost` — greedy request/bid matching.
//!
//! # Clearing rule
//!
//! Requests are visited in ascending `RequestId`.  For each one, the bid
//! ports that named it are shuffled with the host's `SimRng` and the first
//! port with remaining capacity wins.  The traded amount is
//!
//!   min(request quantity, request capacity, port's remaining capacity)
//!
//! and is deducted from the port.  A request clears at most once per tick, so
//! a fan-out bid (one port naming many requests) can win several requests
//! only while its capacity lasts, and a request named by many ports goes to
//! exactly one of them.
//!
//! Traders never trade with themselves: a port naming its owner's own
//! request is ignored for that request.

use std::collections::BTreeMap;

use pd_core::{AgentId, SimRng, TradeId};
use pd_material::EPS_RSRC;
use tracing::trace;

use crate::{BidPort, ExchangeError, ExchangeResult, RequestBook, Trade, TradeResponse};

/// Matches bids to requests once per tick.
pub struct ExchangeHost {
    rng: SimRng,
}

impl ExchangeHost {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SimRng::new(seed))
    }

    pub fn with_rng(rng: SimRng) -> Self {
        Self { rng }
    }

    /// Clear one tick's book against the collected bid ports.
    ///
    /// `bids` pairs each bidder with the ports it returned from
    /// `bid_on_requests`.  Fails if a bid names a request that is not in
    /// `book`.
    pub fn clear(
        &mut self,
        book: &RequestBook,
        bids: &[(AgentId, Vec<BidPort>)],
    ) -> ExchangeResult<Vec<Trade>> {
        // One slot per bid port: its owner and unspent capacity.
        let mut owners:    Vec<AgentId> = Vec::new();
        let mut remaining: Vec<f64>     = Vec::new();
        // For each request id, the slots that bid on it.
        let mut candidates: Vec<Vec<usize>> = vec![Vec::new(); book.len()];

        for (bidder, ports) in bids {
            for port in ports {
                let slot = owners.len();
                owners.push(*bidder);
                remaining.push(port.capacity.max(0.0));

                for bid in &port.bids {
                    let request = book
                        .get_by_id(bid.id)
                        .ok_or(ExchangeError::UnknownRequest(bid.id))?;
                    if request.requester == *bidder {
                        continue;
                    }
                    let slots = &mut candidates[bid.id.index()];
                    if !slots.contains(&slot) {
                        slots.push(slot);
                    }
                }
            }
        }

        let mut trades = Vec::new();
        let mut next_id = TradeId(0);

        for request in book.requests() {
            let slots = &mut candidates[request.id.index()];
            if slots.is_empty() {
                continue;
            }
            let wanted = request.target.quantity.min(request.capacity);
            if wanted <= EPS_RSRC {
                continue;
            }

            self.rng.shuffle(slots);
            let Some(&slot) = slots.iter().find(|&&s| remaining[s] > EPS_RSRC) else {
                trace!(request = %request.id, "all bidders exhausted");
                continue;
            };

            let amount = wanted.min(remaining[slot]);
            remaining[slot] -= amount;
            trades.push(Trade {
                id:      next_id,
                request: request.clone(),
                bidder:  owners[slot],
                amount,
            });
            next_id = next_id.next();
        }

        Ok(trades)
    }
}

/// Group cleared trades by the bidder that must honour them.
pub fn trades_by_bidder(trades: Vec<Trade>) -> BTreeMap<AgentId, Vec<Trade>> {
    let mut grouped: BTreeMap<AgentId, Vec<Trade>> = BTreeMap::new();
    for trade in trades {
        grouped.entry(trade.bidder).or_default().push(trade);
    }
    grouped
}

/// File `bidder`'s responses under the requester each one is addressed to.
///
/// Fails if `bidder` answered a trade that was matched to someone else.
pub fn route_responses(
    bidder:    AgentId,
    responses: Vec<TradeResponse>,
    inbox:     &mut BTreeMap<AgentId, Vec<TradeResponse>>,
) -> ExchangeResult<()> {
    for response in responses {
        if response.trade.bidder != bidder {
            return Err(ExchangeError::ForeignResponse {
                trader: bidder,
                trade:  response.trade.id,
            });
        }
        inbox.entry(response.trade.requester()).or_default().push(response);
    }
    Ok(())
}
