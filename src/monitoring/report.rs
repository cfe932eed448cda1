/*!
 * Report Rendering
 * Plain-text performance reports and sweep tables
 */

use super::metrics::{MetricsAggregator, PerformanceMetrics};
use crate::core::types::Timestamp;
use crate::memory::{MemoryInfo, PlacementStrategy};
use crate::process::ProcessRegistry;
use crate::scheduler::{Scheduler, SchedulingPolicy};
use std::fmt::Write;

/// Format simulated milliseconds as `Hh Mm Ss`, dropping leading zero units
pub fn format_time(milliseconds: Timestamp) -> String {
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

/// Render a single run's metrics
pub fn render_report(metrics: &PerformanceMetrics, duration: Timestamp) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Performance Report ===");
    let _ = writeln!(out, "Simulation Duration: {}", format_time(duration));
    let _ = writeln!(out);
    let _ = writeln!(out, "Process Metrics:");
    let _ = writeln!(out, "  Total Processes: {}", metrics.total_processes);
    let _ = writeln!(out, "  Completed: {}", metrics.completed_processes);
    let _ = writeln!(out, "  Throughput: {:.2} processes/sec", metrics.throughput);
    let _ = writeln!(out, "  Avg Turnaround Time: {:.2} ms", metrics.average_turnaround_time);
    let _ = writeln!(out, "  Avg Waiting Time: {:.2} ms", metrics.average_waiting_time);
    let _ = writeln!(out, "  Context Switches: {}", metrics.context_switches);
    let _ = writeln!(out);
    let _ = writeln!(out, "Resource Utilization:");
    let _ = writeln!(out, "  CPU Utilization: {:.2}%", metrics.cpu_utilization * 100.0);
    let _ = writeln!(out, "  Memory Utilization: {:.2}%", metrics.memory_utilization * 100.0);
    let _ = writeln!(out, "  Memory Fragmentation: {:.2}%", metrics.fragmentation * 100.0);
    out
}

impl MetricsAggregator {
    /// Compute and render the report for the current window
    pub fn report<M: MemoryInfo + ?Sized>(
        &self,
        processes: &ProcessRegistry,
        scheduler: &Scheduler,
        memory: &M,
    ) -> String {
        let metrics = self.compute(processes, scheduler, memory);
        render_report(&metrics, self.window().len())
    }
}

/// One row of a policy × strategy sweep
pub type SweepRow<'a> = (SchedulingPolicy, PlacementStrategy, &'a PerformanceMetrics);

/// Render the sweep as an aligned table
pub fn render_sweep_table<'a>(rows: impl IntoIterator<Item = SweepRow<'a>>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<10} {:>12} {:>12} {:>12} {:>8} {:>8} {:>8} {:>9}",
        "Policy", "Strategy", "Throughput", "Turnaround", "Waiting", "CPU%", "Mem%", "Frag%", "Switches"
    );
    let _ = writeln!(out, "{}", "-".repeat(97));

    for (policy, strategy, m) in rows {
        let _ = writeln!(
            out,
            "{:<10} {:<10} {:>12.2} {:>12.2} {:>12.2} {:>8.2} {:>8.2} {:>8.2} {:>9}",
            policy.label(),
            strategy.label(),
            m.throughput,
            m.average_turnaround_time,
            m.average_waiting_time,
            m.cpu_utilization * 100.0,
            m.memory_utilization * 100.0,
            m.fragmentation * 100.0,
            m.context_switches,
        );
    }
    out
}

/// Summarize the highest-throughput configuration of a sweep
pub fn render_final_report<'a>(rows: impl IntoIterator<Item = SweepRow<'a>>) -> String {
    let mut out = String::from("=== Final Performance Analysis ===\n\n");

    let best = rows
        .into_iter()
        .fold(None::<SweepRow<'a>>, |best, row| match best {
            Some(b) if b.2.throughput >= row.2.throughput => Some(b),
            _ => Some(row),
        });

    let Some((policy, strategy, m)) = best else {
        out.push_str("No benchmark data available.\n");
        return out;
    };

    let _ = writeln!(out, "Optimal Configuration: {} + {}", policy.label(), strategy.label());
    let _ = writeln!(out, "  Highest Throughput: {:.2} processes/sec", m.throughput);
    let _ = writeln!(out, "  CPU Utilization: {:.2}%", m.cpu_utilization * 100.0);
    let _ = writeln!(out, "  Memory Efficiency: {:.2}%", m.memory_utilization * 100.0);
    let _ = writeln!(out, "  Fragmentation: {:.2}%", m.fragmentation * 100.0);
    out
}
