/*!
 * Scheduler Statistics
 * Track and report scheduler counters
 */

use super::types::SchedulerStats;
use super::Scheduler;

impl Scheduler {
    /// Get scheduler statistics snapshot
    pub fn stats(&self) -> SchedulerStats {
        SchedulerStats {
            total_dispatched: self.total_dispatched,
            context_switches: self.context_switches,
            preemptions: self.preemptions,
            queued: self.len(),
            policy: self.policy,
            quantum: self.quantum,
        }
    }

    #[inline(always)]
    pub fn context_switch_count(&self) -> u64 {
        self.context_switches
    }
}
