//! `pd-truck` — a transport agent that shuttles one contract's worth of
//! material between two facilities.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`state`]   | `TruckState`, `TruckPhase`, `Contract`                    |
//! | [`config`]  | `TruckConfig` — construction parameters and overrides     |
//! | [`truck`]   | `Truck` — the `Trader` implementation                     |
//! | [`error`]   | `TruckError`, `TruckResult<T>`                            |
//!
//! # Round trip
//!
//! ```text
//!            contract trade                 pickup delivered
//!  Seeking ───────────────────▶ AwaitingPickup ───────────────▶ Transporting
//!     ▲                                                              │
//!     │ return timer hits duration                  trip timer hits  │
//!     │                                                   duration   ▼
//!  Returning ◀──────────────────────────────────────────────────  Arrived
//!                       delivery trade to contractee
//! ```
//!
//! Only Seeking (contract offers) and Arrived (delivery to the contractee)
//! ever bid; only AwaitingPickup ever requests.  A Returning truck ignores
//! the exchange entirely.

pub mod config;
pub mod error;
pub mod state;
pub mod truck;

#[cfg(test)]
mod tests;

pub use config::TruckConfig;
pub use error::{TruckError, TruckResult};
pub use state::{Contract, TruckPhase, TruckState};
pub use truck::Truck;
