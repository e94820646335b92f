//! Simulation observer trait for progress reporting and data collection.

use pd_core::{AgentId, Tick};
use pd_exchange::TraderSnapshot;

/// What happened in one tick's exchange round.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickSummary {
    pub tick:     Tick,
    /// Requests posted.
    pub requests: usize,
    /// Individual bids across all bid ports.
    pub bids:     usize,
    /// Trades cleared.
    pub trades:   usize,
    /// Total material quantity shipped in trade responses.
    pub shipped:  f64,
    /// Batches each requester received, in ascending `AgentId` order.
    pub receipts: Vec<(AgentId, usize)>,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         println!("{}: {} trades", summary.tick, summary.trades);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any trader is advanced.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's last `receive_material`.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called every `config.output_interval_ticks` ticks with one snapshot
    /// per trader, in ascending `AgentId` order.
    fn on_snapshot(&mut self, _tick: Tick, _traders: &[TraderSnapshot]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
