/*!
 * Single-run simulation tests
 */

use os_resource_sim::memory::PlacementStrategy;
use os_resource_sim::process::ProcessState;
use os_resource_sim::scheduler::SchedulingPolicy;
use os_resource_sim::simulation::{SimulationConfig, Simulator};
use os_resource_sim::{ConfigError, SimError};
use pretty_assertions::assert_eq;

fn config() -> SimulationConfig {
    SimulationConfig::default()
        .with_process_count(10)
        .with_total_memory(1024 * 1024)
        .with_page_size(256)
        .with_memory_range(1024, 8192)
        .with_duration(2000)
        .with_seed(7)
}

#[test]
fn test_repeated_runs_are_deterministic() {
    let mut sim = Simulator::new(config()).unwrap();
    let first = sim
        .run(SchedulingPolicy::Priority, PlacementStrategy::BestFit)
        .unwrap();
    let second = sim
        .run(SchedulingPolicy::Priority, PlacementStrategy::BestFit)
        .unwrap();

    assert_eq!(first.metrics, second.metrics);
    assert_eq!(first.scheduler, second.scheduler);
    assert_eq!(first.interrupt_overhead, second.interrupt_overhead);
    assert_ne!(first.run_id, second.run_id);
}

#[test]
fn test_separate_simulators_agree() {
    let a = Simulator::new(config())
        .unwrap()
        .run(SchedulingPolicy::ShortestJobFirst, PlacementStrategy::WorstFit)
        .unwrap();
    let b = Simulator::new(config())
        .unwrap()
        .run(SchedulingPolicy::ShortestJobFirst, PlacementStrategy::WorstFit)
        .unwrap();
    assert_eq!(a.metrics, b.metrics);
}

#[test]
fn test_metrics_do_not_mutate_state() {
    let mut sim = Simulator::new(config()).unwrap();
    sim.run(SchedulingPolicy::RoundRobin, PlacementStrategy::FirstFit)
        .unwrap();
    assert_eq!(sim.metrics(), sim.metrics());
    assert_eq!(sim.report(), sim.report());
}

#[test]
fn test_run_bookkeeping() {
    let mut sim = Simulator::new(config()).unwrap();
    let outcome = sim
        .run(SchedulingPolicy::RoundRobin, PlacementStrategy::FirstFit)
        .unwrap();

    assert_eq!(outcome.policy, SchedulingPolicy::RoundRobin);
    assert_eq!(outcome.strategy, PlacementStrategy::FirstFit);
    assert_eq!(outcome.metrics.total_processes, 10);
    assert_eq!(
        outcome.metrics.completed_processes,
        sim.processes().completed_count()
    );
    assert_eq!(outcome.metrics.context_switches, outcome.scheduler.context_switches);
    assert_eq!(sim.busy_time() + sim.idle_time(), 2000);
    assert!(outcome.metrics.cpu_utilization >= 0.0 && outcome.metrics.cpu_utilization <= 1.0);
    assert!(outcome.metrics.fragmentation >= 0.0 && outcome.metrics.fragmentation <= 1.0);

    // Memory held at the end belongs to unfinished processes only
    for block in sim.memory().blocks().iter().filter(|b| b.is_allocated()) {
        let owner = sim.processes().get(block.owner_pid).unwrap();
        assert_ne!(owner.state(), ProcessState::Terminated);
    }
}

#[test]
fn test_report_lists_sections() {
    let mut sim = Simulator::new(config()).unwrap();
    sim.run(SchedulingPolicy::Priority, PlacementStrategy::FirstFit)
        .unwrap();

    let report = sim.report();
    assert!(report.starts_with("=== Performance Report ==="));
    assert!(report.contains("Simulation Duration: 2s"));
    assert!(report.contains("  Total Processes: 10"));
    assert!(report.contains("Resource Utilization:"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let cases = [
        config().with_total_memory(0),
        config().with_quantum(20).with_time_step(10),
        config().with_burst_range(0, 10),
        config().with_io_probability(101),
        config().with_memory_range(1024, 2 * 1024 * 1024),
    ];
    for bad in cases {
        assert!(matches!(
            Simulator::new(bad),
            Err(SimError::Config(ConfigError::InvalidConfiguration(_)))
        ));
    }
}

#[test]
fn test_allocation_success_rate_under_memory_pressure() {
    let tight = config()
        .with_total_memory(8192)
        .with_memory_range(4096, 4096)
        .with_arrival_range(0, 0);
    let mut sim = Simulator::new(tight).unwrap();
    let outcome = sim
        .run(SchedulingPolicy::RoundRobin, PlacementStrategy::FirstFit)
        .unwrap();

    let admitted = sim
        .processes()
        .all()
        .iter()
        .filter(|p| p.state() != ProcessState::New)
        .count() as u64;
    assert_eq!(outcome.allocations, admitted);
    assert!(outcome.allocation_failures > 0);

    let rate = outcome.allocation_success_rate();
    assert!(rate > 0.0 && rate < 1.0);
    assert_eq!(
        rate,
        outcome.allocations as f64 / (outcome.allocations + outcome.allocation_failures) as f64
    );
}

#[test]
fn test_roomy_run_never_defers() {
    let mut sim = Simulator::new(config()).unwrap();
    let outcome = sim
        .run(SchedulingPolicy::ShortestJobFirst, PlacementStrategy::BestFit)
        .unwrap();
    assert_eq!(outcome.allocation_failures, 0);
    assert_eq!(outcome.allocation_success_rate(), 1.0);
}
