/*!
 * Policy × strategy sweep tests
 */

use os_resource_sim::memory::PlacementStrategy;
use os_resource_sim::scheduler::SchedulingPolicy;
use os_resource_sim::simulation::{combinations, run_sweep, run_sweep_parallel, SimulationConfig};
use pretty_assertions::assert_eq;

fn config() -> SimulationConfig {
    SimulationConfig::default()
        .with_process_count(10)
        .with_total_memory(1024 * 1024)
        .with_page_size(256)
        .with_memory_range(1024, 8192)
        .with_duration(2000)
}

#[test]
fn test_combinations_cover_every_pair() {
    let pairs = combinations();
    assert_eq!(pairs.len(), 9);
    assert_eq!(pairs[0], (SchedulingPolicy::RoundRobin, PlacementStrategy::FirstFit));
    assert_eq!(pairs[4], (SchedulingPolicy::Priority, PlacementStrategy::BestFit));
    assert_eq!(
        pairs[8],
        (SchedulingPolicy::ShortestJobFirst, PlacementStrategy::WorstFit)
    );
}

#[test]
fn test_sweep_follows_combination_order() {
    let outcomes = run_sweep(&config()).unwrap();
    let order: Vec<_> = outcomes.iter().map(|o| (o.policy, o.strategy)).collect();
    assert_eq!(order, combinations());
    for outcome in &outcomes {
        assert_eq!(outcome.metrics.total_processes, 10);
    }
}

#[test]
fn test_parallel_sweep_matches_sequential() {
    let sequential = run_sweep(&config()).unwrap();
    let parallel = run_sweep_parallel(&config()).unwrap();

    assert_eq!(sequential.len(), parallel.len());
    for (s, p) in sequential.iter().zip(&parallel) {
        assert_eq!((s.policy, s.strategy), (p.policy, p.strategy));
        assert_eq!(s.metrics, p.metrics);
    }
}

#[test]
fn test_invalid_config_fails_whole_sweep() {
    let bad = config().with_duration(0);
    assert!(run_sweep(&bad).is_err());
    assert!(run_sweep_parallel(&bad).is_err());
}
