//! `pd-core` — foundational types for the `peddler` exchange simulation.
//!
//! Every other `pd-*` crate depends on this one.  It has no `pd-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`ids`]   | `AgentId`, `RequestId`, `TradeId`          |
//! | [`time`]  | `Tick`, `SimClock`, `SimConfig`            |
//! | [`rng`]   | `SimRng` (exchange tie-breaking)           |
//! | [`error`] | `PdError`, `PdResult`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PdError, PdResult};
pub use ids::{AgentId, RequestId, TradeId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
