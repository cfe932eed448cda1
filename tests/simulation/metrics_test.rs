/*!
 * Metrics aggregation over hand-built state
 */

use os_resource_sim::core::types::TimeWindow;
use os_resource_sim::memory::{MemoryAllocator, PlacementStrategy};
use os_resource_sim::monitoring::{render_final_report, render_sweep_table, MetricsAggregator, PerformanceMetrics};
use os_resource_sim::process::{ProcessPriority, ProcessRegistry, ProcessState};
use os_resource_sim::scheduler::{Scheduler, SchedulingPolicy};
use pretty_assertions::assert_eq;

#[test]
fn test_compute_from_finished_processes() {
    let mut registry = ProcessRegistry::new();
    let done = registry.create(0, 20, 128, ProcessPriority::High).unwrap();
    registry.create(10, 40, 128, ProcessPriority::Low).unwrap();

    let process = registry.get_mut(done).unwrap();
    process.set_state(ProcessState::Running);
    process.record_execution(5);
    assert!(process.execute(20));
    process.set_completion_time(25);

    let mut memory = MemoryAllocator::with_strategy(1000, PlacementStrategy::FirstFit).unwrap();
    memory.allocate(2, 250).unwrap();

    let metrics = MetricsAggregator::new(TimeWindow::new(0, 1000))
        .with_idle_time(250)
        .compute(&registry, &Scheduler::default(), &memory);

    assert_eq!(metrics.total_processes, 2);
    assert_eq!(metrics.completed_processes, 1);
    assert_eq!(metrics.throughput, 1.0);
    assert_eq!(metrics.average_turnaround_time, 25.0);
    assert_eq!(metrics.average_waiting_time, 5.0);
    assert_eq!(metrics.cpu_utilization, 0.75);
    assert_eq!(metrics.context_switches, 0);
}

#[test]
fn test_final_report_picks_first_best() {
    let slow = PerformanceMetrics {
        throughput: 1.0,
        ..Default::default()
    };
    let fast = PerformanceMetrics {
        throughput: 4.0,
        cpu_utilization: 0.5,
        ..Default::default()
    };
    let rows = [
        (SchedulingPolicy::RoundRobin, PlacementStrategy::FirstFit, &slow),
        (SchedulingPolicy::ShortestJobFirst, PlacementStrategy::BestFit, &fast),
        (SchedulingPolicy::Priority, PlacementStrategy::WorstFit, &fast),
    ];

    let summary = render_final_report(rows);
    assert!(summary.contains("Optimal Configuration: SJF + Best-Fit"));
    assert!(summary.contains("Highest Throughput: 4.00 processes/sec"));
    assert!(summary.contains("CPU Utilization: 50.00%"));

    let table = render_sweep_table(rows);
    assert_eq!(table.lines().count(), 2 + rows.len());
}
