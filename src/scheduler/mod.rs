/*!
 * CPU Scheduler
 * Ready queue with interchangeable dispatch policies and a transition audit log
 */

use crate::core::errors::SchedulerError;
use crate::core::limits::DEFAULT_QUANTUM;
use crate::core::types::{Pid, Timestamp};
use ahash::AHashSet;
use std::collections::{BinaryHeap, VecDeque};
use tracing::info;

mod entry;
mod operations;
mod policy;
mod stats;
pub mod types;

pub use types::{ScheduleEvent, SchedulerResult, SchedulerStats, SchedulingPolicy};

use entry::{Entry, PriorityEntry, ShortestJobEntry};

/// CPU Scheduler
///
/// Holds PIDs only; process state lives in the
/// [`ProcessRegistry`](crate::process::ProcessRegistry) passed to each operation.
/// Exactly one of the three queues is populated, the one matching `policy`.
#[derive(Debug)]
pub struct Scheduler {
    policy: SchedulingPolicy,
    quantum: Timestamp,

    // Round-robin queue (FIFO)
    rr_queue: VecDeque<Entry>,

    // Priority queue (max-heap by priority)
    priority_queue: BinaryHeap<PriorityEntry>,

    // Shortest-job-first queue (max-heap by smallest remaining time)
    sjf_queue: BinaryHeap<ShortestJobEntry>,

    // Membership index to keep a PID from being queued twice
    queued: AHashSet<Pid>,

    history: Vec<ScheduleEvent>,
    next_seq: u64,

    total_dispatched: u64,
    context_switches: u64,
    preemptions: u64,
}

impl Scheduler {
    /// Create new scheduler with the default quantum
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self::build(policy, DEFAULT_QUANTUM)
    }

    /// Create scheduler with custom quantum
    pub fn with_quantum(policy: SchedulingPolicy, quantum: Timestamp) -> SchedulerResult<Self> {
        if quantum == 0 {
            return Err(SchedulerError::InvalidConfiguration(
                "time quantum must be greater than 0".into(),
            ));
        }
        Ok(Self::build(policy, quantum))
    }

    fn build(policy: SchedulingPolicy, quantum: Timestamp) -> Self {
        info!(%policy, quantum, "scheduler initialized");

        Self {
            policy,
            quantum,
            rr_queue: VecDeque::new(),
            priority_queue: BinaryHeap::new(),
            sjf_queue: BinaryHeap::new(),
            queued: AHashSet::new(),
            history: Vec::new(),
            next_seq: 0,
            total_dispatched: 0,
            context_switches: 0,
            preemptions: 0,
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulingPolicy::RoundRobin)
    }
}
