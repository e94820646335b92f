//! Plain data row types written by output backends.

use pd_core::Tick;
use pd_exchange::TraderSnapshot;

/// One trader's phase and inventory at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:  u32,
    pub tick:      u64,
    /// Phase label, e.g. `"transporting"` or `"sink"`.
    pub phase:     &'static str,
    pub inventory: f64,
}

impl AgentSnapshotRow {
    pub fn from_snapshot(tick: Tick, snapshot: &TraderSnapshot) -> Self {
        Self {
            agent_id:  snapshot.agent.0,
            tick:      tick.0,
            phase:     snapshot.phase,
            inventory: snapshot.inventory,
        }
    }
}

/// Exchange counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub unix_time_secs: i64,
    pub requests:       u64,
    pub bids:           u64,
    pub trades:         u64,
}
