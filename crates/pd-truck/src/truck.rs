//! `Truck` — the exchange hooks for one transport agent.

use pd_core::{AgentId, Tick};
use pd_exchange::{
    BidPort, ExchangeResult, Request, RequestBook, RequestPort, Trade, TradeResponse, Trader,
    TraderSnapshot, contract_commodity,
};
use pd_material::{Material, ResBuf};
use tracing::{debug, trace, warn};

use crate::{Contract, TruckConfig, TruckPhase, TruckResult, TruckState};

/// A transport agent moving one contract's material per round trip.
///
/// The truck owns its inventory outright; only its own hooks touch it.  See
/// the [crate docs][crate] for the phase diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct Truck {
    id:                  AgentId,
    source_commodity:    String,
    dest_commodity:      String,
    /// `"<dest_commodity>-contract"`, cached for the per-tick book lookup.
    offer_commodity:     String,
    capacity:            f64,
    total_trip_duration: u32,
    state:               TruckState,
    inventory:           ResBuf,
}

impl Truck {
    /// Build a truck from a validated config.
    pub fn new(id: AgentId, config: TruckConfig) -> TruckResult<Self> {
        let state = config.initial_state()?;
        let mut inventory = ResBuf::new(config.capacity)?;

        if matches!(state, TruckState::Transporting { .. } | TruckState::Arrived { .. }) {
            if let Some(contract) = state.contract() {
                inventory.push(contract.target())?;
            }
        }

        Ok(Self {
            id,
            offer_commodity:     contract_commodity(&config.dest_commodity),
            source_commodity:    config.source_commodity,
            dest_commodity:      config.dest_commodity,
            capacity:            config.capacity,
            total_trip_duration: config.total_trip_duration,
            state,
            inventory,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> &TruckState {
        &self.state
    }

    pub fn phase(&self) -> TruckPhase {
        self.state.phase()
    }

    pub fn contract(&self) -> Option<&Contract> {
        self.state.contract()
    }

    pub fn contractee(&self) -> Option<AgentId> {
        self.state.contractee()
    }

    pub fn trip_time(&self) -> Option<u32> {
        self.state.trip_time(self.total_trip_duration)
    }

    pub fn return_trip_time(&self) -> Option<u32> {
        self.state.return_trip_time()
    }

    pub fn inventory(&self) -> &ResBuf {
        &self.inventory
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn total_trip_duration(&self) -> u32 {
        self.total_trip_duration
    }

    pub fn source_commodity(&self) -> &str {
        &self.source_commodity
    }

    pub fn dest_commodity(&self) -> &str {
        &self.dest_commodity
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn transition(&mut self, tick: Tick, f: impl FnOnce(TruckState) -> TruckState) {
        let from = self.state.phase();
        self.state = f(std::mem::take(&mut self.state));
        let to = self.state.phase();
        if from != to {
            debug!(truck = %self.id, %tick, %from, %to, "phase change");
        }
    }

    /// One port bidding on every contract offer for our destination.
    fn bid_on_offers(&self, requests: &RequestBook) -> Vec<BidPort> {
        let offers: Vec<Request> = requests.get(&self.offer_commodity).cloned().collect();
        if offers.is_empty() {
            return vec![];
        }
        trace!(truck = %self.id, offers = offers.len(), "bidding on contract offers");
        vec![BidPort::new(offers, self.capacity)]
    }

    /// One port offering `cargo` on the contractee's delivery request, if
    /// posted.
    fn bid_on_delivery(
        &self,
        contractee: AgentId,
        cargo:      &Material,
        requests:   &RequestBook,
    ) -> Vec<BidPort> {
        match requests.get(&self.dest_commodity).find(|r| r.requester == contractee) {
            Some(request) => vec![BidPort::new(vec![request.clone()], cargo.quantity)],
            None => {
                trace!(truck = %self.id, %contractee, "contractee posted no delivery request");
                vec![]
            }
        }
    }
}

impl Trader for Truck {
    fn id(&self) -> AgentId {
        self.id
    }

    fn advance(&mut self, tick: Tick) {
        let total = self.total_trip_duration;
        self.transition(tick, |state| state.advanced(total));
    }

    fn request_material(&self, _tick: Tick) -> Vec<RequestPort> {
        match &self.state {
            TruckState::AwaitingPickup { contract } if self.inventory.is_empty() => {
                vec![RequestPort::new(&self.source_commodity, contract.target(), self.capacity)]
            }
            _ => vec![],
        }
    }

    fn bid_on_requests(&self, _tick: Tick, requests: &RequestBook) -> Vec<BidPort> {
        if matches!(self.state, TruckState::Returning { .. }) {
            return vec![];
        }
        if !requests.contains(&self.dest_commodity) && !requests.contains(&self.offer_commodity) {
            return vec![];
        }
        match &self.state {
            TruckState::Seeking if self.inventory.is_empty() => self.bid_on_offers(requests),
            TruckState::Arrived { contract } => match self.inventory.peek() {
                Some(cargo) => self.bid_on_delivery(contract.contractee, cargo, requests),
                None => vec![],
            },
            _ => vec![],
        }
    }

    fn commit_trades(&mut self, tick: Tick, trades: &[Trade]) -> ExchangeResult<Vec<TradeResponse>> {
        let Some(last) = trades.last() else {
            return Ok(vec![]);
        };

        match self.state {
            TruckState::Seeking if self.inventory.is_empty() => {
                if trades.len() > 1 {
                    warn!(
                        truck = %self.id,
                        %tick,
                        offers = trades.len(),
                        kept = %last.requester(),
                        "several contracts cleared in one tick; keeping the last"
                    );
                }
                let contract = Contract::from_trade(last);
                debug!(
                    truck = %self.id,
                    %tick,
                    contractee = %contract.contractee,
                    quantity = contract.quantity,
                    "accepted contract"
                );
                self.transition(tick, |state| state.with_contract(contract));
                Ok(vec![])
            }
            TruckState::Arrived { .. } => {
                // One batch per trade; the cargo stays aboard if it cannot cover them all.
                let batches = self.inventory.pop_n(trades.len())?;
                let responses = trades
                    .iter()
                    .zip(batches)
                    .map(|(trade, material)| {
                        debug!(
                            truck = %self.id,
                            %tick,
                            to = %trade.requester(),
                            quantity = material.quantity,
                            "delivered"
                        );
                        TradeResponse { trade: trade.clone(), material }
                    })
                    .collect();
                self.transition(tick, TruckState::unloaded);
                Ok(responses)
            }
            _ => Ok(vec![]),
        }
    }

    fn receive_material(&mut self, tick: Tick, responses: Vec<TradeResponse>) -> ExchangeResult<()> {
        if responses.is_empty() {
            return Ok(());
        }
        if !matches!(self.state, TruckState::AwaitingPickup { .. }) {
            trace!(
                truck = %self.id,
                phase = %self.state.phase(),
                dropped = responses.len(),
                "ignoring material outside pickup"
            );
            return Ok(());
        }

        let batches = responses.len();
        self.inventory.push_all(responses.into_iter().map(|r| r.material).collect())?;
        debug!(
            truck = %self.id,
            %tick,
            batches,
            quantity = self.inventory.quantity(),
            "picked up"
        );
        self.transition(tick, TruckState::loaded);
        Ok(())
    }

    fn snapshot(&self) -> TraderSnapshot {
        TraderSnapshot {
            agent:     self.id,
            phase:     self.state.phase().as_str(),
            inventory: self.inventory.quantity(),
        }
    }
}
