//! `pd-sim` — tick loop driver for the peddler exchange.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Advance  — Trader::advance on every trader (ascending AgentId).
//!   ② Request  — collect Trader::request_material into a RequestBook.
//!   ③ Bid      — collect Trader::bid_on_requests against the book.
//!   ④ Clear    — ExchangeHost::clear matches bids to requests.
//!   ⑤ Commit   — each winning bidder ships via Trader::commit_trades.
//!   ⑥ Receive  — each requester gets its responses via
//!                Trader::receive_material.
//! ```
//!
//! Steps ② and ③ only read trader state; with the `parallel` feature they
//! run on Rayon's pool.  Everything else is sequential in `AgentId` order, so
//! a run is fully determined by its config and seed.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Collects requests and bids on Rayon's thread pool.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut sim = SimBuilder::new(config)
//!     .trader(Truck::new(AgentId(0), truck_config)?)
//!     .trader(Source::new(AgentId(1), source_config))
//!     .trader(Sink::new(AgentId(2), sink_config))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod facility;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use facility::{Sink, SinkConfig, Source, SourceConfig};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use sim::Sim;
