//! Minimal counterparties for driving trucks: an unlimited `Source` and a
//! `Sink` with a standing order.
//!
//! These are harness traders, not facility models.  They hold no
//! inventory and have no internal timing.

use serde::{Deserialize, Serialize};

use pd_core::{AgentId, Tick};
use pd_exchange::{
    BidPort, ExchangeResult, RequestBook, RequestPort, Trade, TradeResponse, Trader,
    TraderSnapshot, contract_commodity,
};
use pd_material::{Composition, Material};

// ── Source ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Commodity this source supplies.
    pub commodity:  String,
    /// Most it can ship per tick across all trades.
    pub throughput: f64,
}

/// Bids on every request for its commodity and ships exactly the requested
/// composition.
#[derive(Clone, Debug)]
pub struct Source {
    id:     AgentId,
    config: SourceConfig,
}

impl Source {
    pub fn new(id: AgentId, config: SourceConfig) -> Self {
        Self { id, config }
    }
}

impl Trader for Source {
    fn id(&self) -> AgentId {
        self.id
    }

    fn bid_on_requests(&self, _tick: Tick, requests: &RequestBook) -> Vec<BidPort> {
        let bids: Vec<_> = requests.get(&self.config.commodity).cloned().collect();
        if bids.is_empty() {
            return vec![];
        }
        vec![BidPort::new(bids, self.config.throughput)]
    }

    fn commit_trades(&mut self, _tick: Tick, trades: &[Trade]) -> ExchangeResult<Vec<TradeResponse>> {
        Ok(trades
            .iter()
            .map(|trade| {
                let material = Material::new(trade.amount, trade.request.target.composition.clone());
                TradeResponse { trade: trade.clone(), material }
            })
            .collect())
    }

    fn snapshot(&self) -> TraderSnapshot {
        TraderSnapshot { agent: self.id, phase: "source", inventory: 0.0 }
    }
}

// ── Sink ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Commodity this sink consumes.
    pub commodity:   String,
    /// Quantity asked for in each contract offer and delivery request.
    pub batch:       f64,
    #[serde(default)]
    pub composition: Composition,
}

/// Posts a contract offer (`"<commodity>-contract"`) and a delivery request
/// (`"<commodity>"`) every tick, and tallies what arrives.
#[derive(Clone, Debug)]
pub struct Sink {
    id:       AgentId,
    config:   SinkConfig,
    offer:    String,
    received: f64,
}

impl Sink {
    /// The requested composition is normalized to unit sum.
    pub fn new(id: AgentId, mut config: SinkConfig) -> Self {
        config.composition = config.composition.normalized();
        Self {
            id,
            offer: contract_commodity(&config.commodity),
            config,
            received: 0.0,
        }
    }

    fn target(&self) -> Material {
        Material::new(self.config.batch, self.config.composition.clone())
    }
}

impl Trader for Sink {
    fn id(&self) -> AgentId {
        self.id
    }

    fn request_material(&self, _tick: Tick) -> Vec<RequestPort> {
        vec![
            RequestPort::new(&self.offer, self.target(), self.config.batch),
            RequestPort::new(&self.config.commodity, self.target(), self.config.batch),
        ]
    }

    fn receive_material(&mut self, _tick: Tick, responses: Vec<TradeResponse>) -> ExchangeResult<()> {
        for response in responses {
            self.received += response.material.quantity;
        }
        Ok(())
    }

    fn snapshot(&self) -> TraderSnapshot {
        TraderSnapshot { agent: self.id, phase: "sink", inventory: self.received }
    }
}
