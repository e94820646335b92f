//! `pd-exchange` — how traders talk to each other once per tick.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`request`] | `RequestPort`, `Request`, `BidPort`                          |
//! | [`book`]    | `RequestBook` — per-tick commodity → requests snapshot       |
//! | [`trade`]   | `Trade`, `TradeResponse`                                     |
//! | [`trader`]  | `Trader` hook trait, `TraderSnapshot`                        |
//! | [`host`]    | `ExchangeHost` — greedy request/bid matching                 |
//! | [`error`]   | `ExchangeError`, `ExchangeResult<T>`                         |
//!
//! # One exchange round
//!
//! ```text
//! traders ──request_material()──▶ RequestPort ─┐
//!                                              ├─▶ RequestBook (ids assigned)
//! traders ◀──bid_on_requests(&book)────────────┘
//!         ──BidPort──▶ ExchangeHost::clear ──▶ Vec<Trade>
//! bidder  ◀──commit_trades(&trades)──  returns Vec<TradeResponse>
//! requester ◀──receive_material(responses)
//! ```
//!
//! Everything passed into a hook is either borrowed for the duration of the
//! call or moved in; traders never keep references to exchange state.

pub mod book;
pub mod error;
pub mod host;
pub mod request;
pub mod trade;
pub mod trader;


pub use book::RequestBook;
pub use error::{ExchangeError, ExchangeResult};
pub use host::{ExchangeHost, route_responses, trades_by_bidder};
pub use request::{BidPort, Request, RequestPort};
pub use trade::{Trade, TradeResponse};
pub use trader::{Trader, TraderSnapshot};

/// Suffix marking the contract-offer bucket for a commodity, e.g.
/// `"Fuel-contract"`.
pub const CONTRACT_SUFFIX: &str = "-contract";

/// Name of the contract-offer bucket for `commodity`.
pub fn contract_commodity(commodity: &str) -> String {
    format!("{commodity}{CONTRACT_SUFFIX}")
}
