/*!
 * Scheduler Policy Management
 * Handle live policy and quantum changes
 */

use super::types::{SchedulerResult, SchedulingPolicy};
use super::Scheduler;
use crate::core::errors::SchedulerError;
use crate::core::types::Timestamp;
use tracing::info;

impl Scheduler {
    /// Change scheduling policy (preserves queued processes but requeues them)
    ///
    /// Entries are reinserted in enqueue order so that FIFO
    /// tie-breaking under the new policy matches a queue built from scratch.
    pub fn set_policy(&mut self, new_policy: SchedulingPolicy) {
        if new_policy == self.policy {
            return;
        }

        info!(
            from = %self.policy,
            to = %new_policy,
            "changing scheduler policy (requeuing all processes)"
        );

        let entries = self.drain_entries();
        self.policy = new_policy;

        for entry in entries {
            self.queued.insert(entry.pid);
            self.push_entry(entry);
        }

        info!(requeued = self.len(), "policy change complete");
    }

    /// Set time quantum dynamically
    pub fn set_quantum(&mut self, quantum: Timestamp) -> SchedulerResult<()> {
        if quantum == 0 {
            return Err(SchedulerError::InvalidConfiguration(
                "time quantum must be greater than 0".into(),
            ));
        }
        self.quantum = quantum;
        info!(quantum, "time quantum updated");
        Ok(())
    }

    #[inline(always)]
    pub fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    #[inline(always)]
    pub fn quantum(&self) -> Timestamp {
        self.quantum
    }
}
