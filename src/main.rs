/*!
 * OS Resource Simulator - Main Entry Point
 *
 * Runs every scheduling policy against every placement strategy on the same
 * seeded workload and prints the comparison.
 */

use miette::Result;
use tracing::info;

use os_resource_sim::monitoring::{render_final_report, render_sweep_table, SweepRow};
use os_resource_sim::simulation::{Stopwatch, TimeUnit};
use os_resource_sim::{init_tracing, run_sweep_parallel, SimulationConfig};

fn main() -> Result<()> {
    init_tracing();

    info!("OS resource simulator starting...");
    let config = SimulationConfig::from_env()?;

    println!("=== OS Resource Simulator ===");
    println!(
        "Processes: {}, Memory: {}MB, Duration: {}ms, Seed: {}",
        config.process_count,
        config.total_memory / (1024 * 1024),
        config.duration,
        config.seed
    );
    println!();

    let mut stopwatch = Stopwatch::new();
    stopwatch.start();
    let outcomes = run_sweep_parallel(&config)?;
    stopwatch.stop();

    let as_json = std::env::var("SIM_REPORT_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    if as_json {
        let json = serde_json::to_string_pretty(&outcomes)
            .map_err(os_resource_sim::SimError::from)?;
        println!("{}", json);
        return Ok(());
    }

    for outcome in &outcomes {
        println!(
            "Testing: {} + {}",
            outcome.policy.label(),
            outcome.strategy.label()
        );
        println!(
            "  Throughput: {:.2} processes/sec",
            outcome.metrics.throughput
        );
        println!(
            "  CPU Utilization: {:.2}%",
            outcome.metrics.cpu_utilization * 100.0
        );
        println!(
            "  Memory Fragmentation: {:.2}%",
            outcome.metrics.fragmentation * 100.0
        );
        println!(
            "  Allocation Success Rate: {:.2}% ({} deferred)",
            outcome.allocation_success_rate() * 100.0,
            outcome.allocation_failures
        );
        println!();
    }

    let rows: Vec<SweepRow> = outcomes
        .iter()
        .map(|o| (o.policy, o.strategy, &o.metrics))
        .collect();

    print!("{}", render_sweep_table(rows.iter().copied()));
    println!();
    print!("{}", render_final_report(rows));

    info!(
        runs = outcomes.len(),
        wall_ms = stopwatch.elapsed_in(TimeUnit::Milliseconds),
        "sweep completed"
    );
    Ok(())
}
