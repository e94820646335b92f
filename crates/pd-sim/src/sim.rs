//! The `Sim` struct and its tick loop.

use std::collections::BTreeMap;

use pd_core::{AgentId, SimClock, SimConfig, Tick};
use pd_exchange::{
    BidPort, ExchangeHost, RequestBook, RequestPort, Trader, TraderSnapshot, route_responses,
    trades_by_bidder,
};
use tracing::{debug, info};

use crate::{SimError, SimObserver, SimResult, TickSummary};

/// The simulation runner.
///
/// Holds every trader and drives the six-step exchange round described in
/// the [crate docs][crate].  Create via [`SimBuilder`][crate::SimBuilder],
/// which sorts `traders` by id and rejects duplicates.
pub struct Sim {
    /// Run configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Tracks the current tick and maps it to wall time.
    pub clock: SimClock,

    /// Matches bids to requests.  Seeded from `config.seed`.
    pub host: ExchangeHost,

    /// All participants, in ascending `AgentId` order.
    pub traders: Vec<Box<dyn Trader>>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        info!(ticks = self.clock.current_tick.0, traders = self.traders.len(), "simulation finished");
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Snapshots of every trader, in ascending `AgentId` order.
    pub fn snapshots(&self) -> Vec<TraderSnapshot> {
        self.traders.iter().map(|t| t.snapshot()).collect()
    }

    /// Look up a trader by id.
    pub fn trader(&self, id: AgentId) -> Option<&dyn Trader> {
        self.traders
            .binary_search_by_key(&id, |t| t.id())
            .ok()
            .map(|i| self.traders[i].as_ref())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let summary = self.process_tick(now).map_err(|source| SimError::Exchange { tick: now, source })?;
        observer.on_tick_end(&summary);

        if self.config.output_interval_ticks > 0
            && now.0 % self.config.output_interval_ticks == 0
        {
            observer.on_snapshot(now, &self.snapshots());
        }

        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> pd_exchange::ExchangeResult<TickSummary> {
        // ── ① Advance timers ──────────────────────────────────────────────
        for trader in &mut self.traders {
            trader.advance(now);
        }

        // ── ② Requests → book ─────────────────────────────────────────────
        let book = RequestBook::from_ports(self.collect_requests(now));

        // ── ③ Bids against the book ───────────────────────────────────────
        let bids = self.collect_bids(now, &book);

        // ── ④ Clear ───────────────────────────────────────────────────────
        let trades = self.host.clear(&book, &bids)?;

        let mut summary = TickSummary {
            tick:     now,
            requests: book.len(),
            bids:     bids.iter().flat_map(|(_, ports)| ports).map(|p| p.bids.len()).sum(),
            trades:   trades.len(),
            shipped:  0.0,
            receipts: Vec::new(),
        };

        // ── ⑤ Commit: bidders ship ────────────────────────────────────────
        //
        // Responses are filed under their requester and delivered only after
        // every bidder has committed, so no trader sees material mid-commit.
        let mut won = trades_by_bidder(trades);
        let mut inbox = BTreeMap::new();
        for trader in &mut self.traders {
            let id = trader.id();
            let Some(trades) = won.remove(&id) else { continue };
            let responses = trader.commit_trades(now, &trades)?;
            summary.shipped += responses.iter().map(|r| r.material.quantity).sum::<f64>();
            route_responses(id, responses, &mut inbox)?;
        }

        // ── ⑥ Receive: requesters accept ──────────────────────────────────
        for trader in &mut self.traders {
            if let Some(responses) = inbox.remove(&trader.id()) {
                summary.receipts.push((trader.id(), responses.len()));
                trader.receive_material(now, responses)?;
            }
        }

        debug!(
            %now,
            requests = summary.requests,
            bids = summary.bids,
            trades = summary.trades,
            shipped = summary.shipped,
            "tick cleared"
        );
        Ok(summary)
    }

    /// Every trader's request ports, tagged with the requester.
    fn collect_requests(&self, now: Tick) -> Vec<(AgentId, RequestPort)> {
        #[cfg(not(feature = "parallel"))]
        let per_trader: Vec<(AgentId, Vec<RequestPort>)> = self
            .traders
            .iter()
            .map(|t| (t.id(), t.request_material(now)))
            .collect();

        #[cfg(feature = "parallel")]
        let per_trader: Vec<(AgentId, Vec<RequestPort>)> = {
            use rayon::prelude::*;
            self.traders
                .par_iter()
                .map(|t| (t.id(), t.request_material(now)))
                .collect()
        };

        per_trader
            .into_iter()
            .flat_map(|(id, ports)| ports.into_iter().map(move |p| (id, p)))
            .collect()
    }

    /// Every trader's non-empty bid port list, in ascending `AgentId` order.
    fn collect_bids(&self, now: Tick, book: &RequestBook) -> Vec<(AgentId, Vec<BidPort>)> {
        if book.is_empty() {
            return vec![];
        }

        #[cfg(not(feature = "parallel"))]
        let per_trader: Vec<(AgentId, Vec<BidPort>)> = self
            .traders
            .iter()
            .map(|t| (t.id(), t.bid_on_requests(now, book)))
            .collect();

        #[cfg(feature = "parallel")]
        let per_trader: Vec<(AgentId, Vec<BidPort>)> = {
            use rayon::prelude::*;
            self.traders
                .par_iter()
                .map(|t| (t.id(), t.bid_on_requests(now, book)))
                .collect()
        };

        per_trader.into_iter().filter(|(_, ports)| !ports.is_empty()).collect()
    }
}
