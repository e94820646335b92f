//! The truck's phase machine.
//!
//! Each variant carries exactly the data that phase needs, so a contract can
//! never exist without its contractee and the two trip timers can never run
//! at the same time.  Transitions consume the current state and return the
//! next one; a transition that does not apply to the current phase returns
//! the state unchanged.

use std::fmt;

use pd_core::AgentId;
use pd_exchange::Trade;
use pd_material::{Composition, Material};
use serde::{Deserialize, Serialize};

// ── Contract ──────────────────────────────────────────────────────────────────

/// What the truck has agreed to carry, and for whom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub quantity:    f64,
    #[serde(default)]
    pub composition: Composition,
    /// The trader that offered the contract and will receive the delivery.
    pub contractee:  AgentId,
}

impl Contract {
    pub fn new(quantity: f64, composition: Composition, contractee: AgentId) -> Self {
        Self { quantity, composition, contractee }
    }

    /// The contract accepted by winning `trade`: the traded amount of the
    /// requested composition, owed to the requester.
    pub fn from_trade(trade: &Trade) -> Self {
        Self {
            quantity:    trade.amount,
            composition: trade.request.target.composition.clone(),
            contractee:  trade.requester(),
        }
    }

    /// The material to request at pickup.
    pub fn target(&self) -> Material {
        Material::new(self.quantity, self.composition.clone())
    }
}

// ── TruckPhase ────────────────────────────────────────────────────────────────

/// Payload-free view of [`TruckState`], for logging and output.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TruckPhase {
    Seeking,
    AwaitingPickup,
    Transporting,
    Arrived,
    Returning,
}

impl TruckPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            TruckPhase::Seeking        => "seeking",
            TruckPhase::AwaitingPickup => "awaiting_pickup",
            TruckPhase::Transporting   => "transporting",
            TruckPhase::Arrived        => "arrived",
            TruckPhase::Returning      => "returning",
        }
    }
}

impl fmt::Display for TruckPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TruckState ────────────────────────────────────────────────────────────────

/// Where the truck is in its round trip.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TruckState {
    /// Empty, no contract, bidding on contract offers.
    #[default]
    Seeking,
    /// Contract held, requesting the material to pick up.
    AwaitingPickup { contract: Contract },
    /// Loaded and en route; `elapsed < total_trip_duration`.
    Transporting { contract: Contract, elapsed: u32 },
    /// Loaded and at the destination, bidding to deliver to the contractee.
    Arrived { contract: Contract },
    /// Empty and heading back; `elapsed < total_trip_duration`.
    Returning { elapsed: u32 },
}

impl TruckState {
    pub fn phase(&self) -> TruckPhase {
        match self {
            TruckState::Seeking                => TruckPhase::Seeking,
            TruckState::AwaitingPickup { .. }  => TruckPhase::AwaitingPickup,
            TruckState::Transporting { .. }    => TruckPhase::Transporting,
            TruckState::Arrived { .. }         => TruckPhase::Arrived,
            TruckState::Returning { .. }       => TruckPhase::Returning,
        }
    }

    pub fn contract(&self) -> Option<&Contract> {
        match self {
            TruckState::AwaitingPickup { contract }
            | TruckState::Transporting { contract, .. }
            | TruckState::Arrived { contract } => Some(contract),
            TruckState::Seeking | TruckState::Returning { .. } => None,
        }
    }

    pub fn contractee(&self) -> Option<AgentId> {
        self.contract().map(|c| c.contractee)
    }

    /// Steps since departing loaded.  An Arrived truck reports the full
    /// `total_trip_duration`.
    pub fn trip_time(&self, total_trip_duration: u32) -> Option<u32> {
        match self {
            TruckState::Transporting { elapsed, .. } => Some(*elapsed),
            TruckState::Arrived { .. }               => Some(total_trip_duration),
            _                                        => None,
        }
    }

    /// Steps since departing empty.
    pub fn return_trip_time(&self) -> Option<u32> {
        match self {
            TruckState::Returning { elapsed } => Some(*elapsed),
            _                                 => None,
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// One tick of travel.  Ends a leg when its timer reaches
    /// `total_trip_duration`.
    pub fn advanced(self, total_trip_duration: u32) -> TruckState {
        match self {
            TruckState::Returning { elapsed } => {
                let elapsed = elapsed + 1;
                if elapsed >= total_trip_duration {
                    TruckState::Seeking
                } else {
                    TruckState::Returning { elapsed }
                }
            }
            TruckState::Transporting { contract, elapsed } => {
                let elapsed = elapsed + 1;
                if elapsed >= total_trip_duration {
                    TruckState::Arrived { contract }
                } else {
                    TruckState::Transporting { contract, elapsed }
                }
            }
            other => other,
        }
    }

    /// Seeking → AwaitingPickup.
    pub fn with_contract(self, contract: Contract) -> TruckState {
        match self {
            TruckState::Seeking => TruckState::AwaitingPickup { contract },
            other => other,
        }
    }

    /// AwaitingPickup → Transporting with a fresh trip timer.
    pub fn loaded(self) -> TruckState {
        match self {
            TruckState::AwaitingPickup { contract } => TruckState::Transporting { contract, elapsed: 0 },
            other => other,
        }
    }

    /// Arrived → Returning with a fresh return timer.  The contract is
    /// dropped.
    pub fn unloaded(self) -> TruckState {
        match self {
            TruckState::Arrived { .. } => TruckState::Returning { elapsed: 0 },
            other => other,
        }
    }
}
