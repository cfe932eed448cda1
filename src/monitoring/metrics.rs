/*!
 * Metrics Aggregation
 * Derived performance snapshot over a bounded simulated window
 */

use crate::core::limits::MILLIS_PER_SECOND;
use crate::core::types::{TimeWindow, Timestamp};
use crate::memory::MemoryInfo;
use crate::process::{Process, ProcessRegistry};
use crate::scheduler::Scheduler;
use serde::{Deserialize, Serialize};

/// Performance snapshot; recomputed on demand, never stored by components
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Completed processes per simulated second
    pub throughput: f64,
    pub average_turnaround_time: f64,
    pub average_waiting_time: f64,
    pub cpu_utilization: f64,
    pub memory_utilization: f64,
    pub fragmentation: f64,
    pub context_switches: u64,
    pub total_processes: usize,
    pub completed_processes: usize,
}

/// Computes [`PerformanceMetrics`] for a time window
///
/// Holds only the window and the orchestrator's idle bookkeeping; all other
/// inputs are borrowed read-only per call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsAggregator {
    window: TimeWindow,
    idle_time: Timestamp,
}

impl MetricsAggregator {
    pub fn new(window: TimeWindow) -> Self {
        Self {
            window,
            idle_time: 0,
        }
    }

    /// CPU idle time observed inside the window
    pub fn with_idle_time(mut self, idle_time: Timestamp) -> Self {
        self.idle_time = idle_time;
        self
    }

    pub fn set_window(&mut self, window: TimeWindow) {
        self.window = window;
    }

    #[inline(always)]
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    #[inline(always)]
    pub fn idle_time(&self) -> Timestamp {
        self.idle_time
    }

    /// Build the snapshot from current component state
    pub fn compute<M: MemoryInfo + ?Sized>(
        &self,
        processes: &ProcessRegistry,
        scheduler: &Scheduler,
        memory: &M,
    ) -> PerformanceMetrics {
        let completed: Vec<&Process> = processes.all().iter().filter(|p| p.is_completed()).collect();

        PerformanceMetrics {
            throughput: self.throughput(completed.len()),
            average_turnaround_time: mean(completed.iter().map(|p| p.turnaround_time())),
            average_waiting_time: mean(completed.iter().map(|p| p.waiting_time())),
            cpu_utilization: self.cpu_utilization(),
            memory_utilization: memory.utilization(),
            fragmentation: memory.fragmentation(),
            context_switches: scheduler.context_switch_count(),
            total_processes: processes.len(),
            completed_processes: completed.len(),
        }
    }

    fn throughput(&self, completed: usize) -> f64 {
        let elapsed = self.window.len();
        if elapsed == 0 {
            return 0.0;
        }
        completed as f64 / (elapsed as f64 / MILLIS_PER_SECOND)
    }

    /// `(total - idle) / total`, idle clamped to the window
    fn cpu_utilization(&self) -> f64 {
        let total = self.window.len();
        if total == 0 {
            return 0.0;
        }
        let busy = total - self.idle_time.min(total);
        busy as f64 / total as f64
    }
}

fn mean(values: impl Iterator<Item = u64>) -> f64 {
    let (sum, count) = values.fold((0u64, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
