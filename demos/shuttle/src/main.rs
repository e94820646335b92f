//! shuttle — a small fleet of trucks hauling between one source and one sink.
//!
//! Three trucks start at different points of their round trip: one idle, one
//! already loaded and on the road, one driving back empty.  The sink posts a
//! contract offer and a delivery request every tick; the source supplies
//! whatever the trucks ask for.
//!
//! Set `RUST_LOG=pd_truck=debug` to watch the phase changes.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pd_core::{AgentId, SimConfig, Tick};
use pd_exchange::TraderSnapshot;
use pd_output::{CsvWriter, OutputWriter, SimOutputObserver};
use pd_sim::{SimBuilder, SimObserver, Sink, SinkConfig, Source, SourceConfig, TickSummary};
use pd_truck::{Truck, TruckConfig};

// ── Scenario ──────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/shuttle";

// Agent ids: source = 0, trucks = 1..=n in listed order, sink = n + 1.
// The loaded truck's contractee (4) is the sink.
const SCENARIO_JSON: &str = r#"{
  "sim": {
    "start_unix_secs":       1700000000,
    "tick_duration_secs":    86400,
    "total_ticks":           60,
    "seed":                  42,
    "output_interval_ticks": 1
  },
  "source": { "commodity": "natl_u", "throughput": 1000.0 },
  "sink": {
    "commodity":   "fresh_fuel",
    "batch":       5.0,
    "composition": { "922350000": 0.045, "922380000": 0.955 }
  },
  "trucks": [
    { "source_commodity": "natl_u", "dest_commodity": "fresh_fuel",
      "capacity": 10.0, "total_trip_duration": 3 },
    { "source_commodity": "natl_u", "dest_commodity": "fresh_fuel",
      "capacity": 10.0, "total_trip_duration": 4,
      "contract": { "quantity": 5.0, "contractee": 4,
                    "composition": { "922350000": 0.045, "922380000": 0.955 } },
      "trip_time": 2 },
    { "source_commodity": "natl_u", "dest_commodity": "fresh_fuel",
      "capacity": 8.0, "total_trip_duration": 2,
      "return_trip_time": 1 }
  ]
}"#;

#[derive(Debug, Deserialize)]
struct Scenario {
    sim:    SimConfig,
    source: SourceConfig,
    sink:   SinkConfig,
    trucks: Vec<TruckConfig>,
}

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    sink:          AgentId,
    snapshot_rows: usize,
    summary_rows:  usize,
    trades:        usize,
    shipped:       f64,
    deliveries:    usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>, sink: AgentId) -> Self {
        Self {
            inner,
            sink,
            snapshot_rows: 0,
            summary_rows:  0,
            trades:        0,
            shipped:       0.0,
            deliveries:    0,
        }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.summary_rows += 1;
        self.trades += summary.trades;
        self.shipped += summary.shipped;
        let sink = self.sink;
        self.deliveries += summary
            .receipts
            .iter()
            .filter(|(agent, _)| *agent == sink)
            .map(|(_, batches)| batches)
            .sum::<usize>();
        self.inner.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, tick: Tick, traders: &[TraderSnapshot]) {
        self.snapshot_rows += traders.len();
        self.inner.on_snapshot(tick, traders);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let scenario: Scenario = serde_json::from_str(SCENARIO_JSON).context("parse scenario")?;
    let config = scenario.sim.clone();

    println!("=== shuttle — peddler truck transport ===");
    println!(
        "Trucks: {}  |  Ticks: {}  |  Seed: {}",
        scenario.trucks.len(),
        config.total_ticks,
        config.seed
    );
    println!();

    // 1. Agents.
    let source_id = AgentId(0);
    let mut trucks = Vec::with_capacity(scenario.trucks.len());
    let mut next = source_id.next();
    for truck in scenario.trucks {
        let t = Truck::new(next, truck).with_context(|| format!("truck {next}"))?;
        info!(
            truck = %next,
            phase = %t.phase(),
            from = t.source_commodity(),
            to = t.dest_commodity(),
            capacity = t.capacity(),
            "truck ready"
        );
        trucks.push(t);
        next = next.next();
    }
    let sink_id = next;
    let mut sim = SimBuilder::new(config.clone())
        .trader(Source::new(source_id, scenario.source))
        .traders(trucks)
        .trader(Sink::new(sink_id, scenario.sink))
        .build()?;

    // 2. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &config), sink_id);

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!("  trades cleared      : {}", obs.trades);
    println!("  material shipped    : {:.1}", obs.shipped);
    println!();

    println!("{:<12} {:<16} {:>10}", "Agent", "Phase", "Inventory");
    println!("{}", "-".repeat(40));
    for snap in sim.snapshots() {
        println!("{:<12} {:<16} {:>10.1}", snap.agent.to_string(), snap.phase, snap.inventory);
    }
    println!();

    if let Some(sink) = sim.trader(sink_id) {
        let received = sink.snapshot().inventory;
        println!("Sink {sink_id}: {received:.1} received in {} deliveries", obs.deliveries);
    }

    Ok(())
}
