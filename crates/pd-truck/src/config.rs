//! Truck construction parameters.

use serde::{Deserialize, Serialize};

use pd_core::AgentId;

use crate::{Contract, TruckError, TruckResult, TruckState};

/// Everything needed to build a [`Truck`][crate::Truck].
///
/// The four required fields fix the truck's route and size for its whole
/// life.  The optional overrides start it mid-cycle, e.g. when resuming a
/// scenario:
///
/// | Overrides set                  | Starting phase                         |
/// |--------------------------------|----------------------------------------|
/// | none                           | Seeking                                |
/// | `contract`                     | AwaitingPickup                         |
/// | `contract` + `trip_time`       | Transporting (Arrived if = duration)   |
/// | `return_trip_time`             | Returning                              |
///
/// A truck started in Transporting or Arrived is loaded with the contract's
/// target material.
///
/// ```json
/// { "source_commodity": "U", "dest_commodity": "Fuel",
///   "capacity": 10.0, "total_trip_duration": 3 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TruckConfig {
    /// Commodity requested at pickup.
    pub source_commodity:    String,
    /// Commodity delivered; contract offers arrive as `"<dest>-contract"`.
    pub dest_commodity:      String,
    /// Inventory capacity.  Must be positive.
    pub capacity:            f64,
    /// One-way travel time in ticks.  Must be at least 1.
    pub total_trip_duration: u32,

    #[serde(default)]
    pub contract:            Option<Contract>,
    #[serde(default)]
    pub trip_time:           Option<u32>,
    #[serde(default)]
    pub return_trip_time:    Option<u32>,
}

impl TruckConfig {
    pub fn new(
        source_commodity:    impl Into<String>,
        dest_commodity:      impl Into<String>,
        capacity:            f64,
        total_trip_duration: u32,
    ) -> Self {
        Self {
            source_commodity: source_commodity.into(),
            dest_commodity:   dest_commodity.into(),
            capacity,
            total_trip_duration,
            contract:         None,
            trip_time:        None,
            return_trip_time: None,
        }
    }

    /// Check the required fields and the consistency of the overrides.
    pub fn validate(&self) -> TruckResult<()> {
        if !self.capacity.is_finite() || self.capacity <= 0.0 {
            return Err(config_err(format!("capacity must be positive, got {}", self.capacity)));
        }
        if self.total_trip_duration == 0 {
            return Err(config_err("total_trip_duration must be at least 1"));
        }
        if self.source_commodity.is_empty() || self.dest_commodity.is_empty() {
            return Err(config_err("commodity names must not be empty"));
        }
        if let Some(contract) = &self.contract {
            if !contract.quantity.is_finite() || contract.quantity <= 0.0 {
                return Err(config_err(format!(
                    "contract quantity must be positive, got {}",
                    contract.quantity
                )));
            }
            if contract.quantity > self.capacity {
                return Err(config_err(format!(
                    "contract quantity {} exceeds capacity {}",
                    contract.quantity, self.capacity
                )));
            }
            if contract.contractee == AgentId::INVALID {
                return Err(config_err("contract has no contractee"));
            }
        }
        match (self.trip_time, self.return_trip_time) {
            (Some(_), Some(_)) => {
                return Err(config_err("trip_time and return_trip_time are mutually exclusive"));
            }
            (Some(t), None) => {
                if self.contract.is_none() {
                    return Err(config_err("trip_time requires a contract"));
                }
                if t > self.total_trip_duration {
                    return Err(config_err(format!(
                        "trip_time {t} exceeds total_trip_duration {}",
                        self.total_trip_duration
                    )));
                }
            }
            (None, Some(t)) => {
                if self.contract.is_some() {
                    return Err(config_err("a returning truck cannot hold a contract"));
                }
                if t >= self.total_trip_duration {
                    return Err(config_err(format!(
                        "return_trip_time {t} must be below total_trip_duration {}",
                        self.total_trip_duration
                    )));
                }
            }
            (None, None) => {}
        }
        Ok(())
    }

    /// The phase a truck built from this config starts in.
    pub fn initial_state(&self) -> TruckResult<TruckState> {
        self.validate()?;
        let state = match (&self.contract, self.trip_time, self.return_trip_time) {
            (_, _, Some(elapsed)) => TruckState::Returning { elapsed },
            (Some(contract), Some(t), None) if t == self.total_trip_duration => {
                TruckState::Arrived { contract: contract.clone() }
            }
            (Some(contract), Some(elapsed), None) => {
                TruckState::Transporting { contract: contract.clone(), elapsed }
            }
            (Some(contract), None, None) => TruckState::AwaitingPickup { contract: contract.clone() },
            (None, _, None) => TruckState::Seeking,
        };
        Ok(state)
    }
}

fn config_err(msg: impl Into<String>) -> TruckError {
    TruckError::Config(msg.into())
}
