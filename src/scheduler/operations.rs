/*!
 * Scheduler Core Operations
 * Enqueue, dispatch, remove, clear and context-switch operations
 */

use super::entry::{Entry, PriorityEntry, ShortestJobEntry};
use super::types::{ScheduleEvent, SchedulerResult, SchedulingPolicy};
use super::Scheduler;
use crate::core::errors::SchedulerError;
use crate::core::limits::CONTEXT_SWITCH_OVERHEAD;
use crate::core::types::{Pid, Timestamp};
use crate::process::{Process, ProcessRegistry, ProcessState};
use tracing::{debug, trace, warn};

impl Scheduler {
    /// Mark a process READY and insert it according to the active policy
    ///
    /// Re-enqueueing a RUNNING process counts as a preemption; under
    /// round-robin it lands at the tail, which realizes time slicing.
    pub fn enqueue(
        &mut self,
        processes: &mut ProcessRegistry,
        pid: Pid,
        now: Timestamp,
    ) -> SchedulerResult<()> {
        let process = processes
            .get_mut(pid)
            .ok_or(SchedulerError::ProcessNotFound(pid))?;

        let from = process.state();
        if from == ProcessState::Terminated {
            return Err(SchedulerError::InvalidTransition {
                pid,
                from,
                to: ProcessState::Ready,
            });
        }

        if !self.queued.insert(pid) {
            debug!(pid, "process already queued, ignoring enqueue");
            return Ok(());
        }

        if from == ProcessState::Running {
            self.preemptions += 1;
        }

        process.set_state(ProcessState::Ready);
        let entry = Entry::new(process, self.next_seq);
        self.next_seq += 1;

        self.record(now, pid, from, ProcessState::Ready);
        self.push_entry(entry);

        trace!(pid, policy = %self.policy, queued = self.len(), "process enqueued");
        Ok(())
    }

    /// Remove the head of the ready queue and mark it RUNNING
    ///
    /// Entries whose process was destroyed or terminated while queued are
    /// discarded.
    pub fn dispatch(&mut self, processes: &mut ProcessRegistry, now: Timestamp) -> Option<Pid> {
        while let Some(entry) = self.pop_entry() {
            let pid = entry.pid;
            self.queued.remove(&pid);

            let Some(process) = processes.get_mut(pid) else {
                warn!(pid, "discarding queued process missing from registry");
                continue;
            };
            let from = process.state();
            if from == ProcessState::Terminated {
                warn!(pid, "discarding terminated process from ready queue");
                continue;
            }

            process.set_state(ProcessState::Running);
            self.record(now, pid, from, ProcessState::Running);
            self.total_dispatched += 1;

            trace!(pid, policy = %self.policy, "process dispatched");
            return Some(pid);
        }
        None
    }

    /// Drop a process from the ready queue without touching its state
    pub fn remove(&mut self, pid: Pid) -> bool {
        if !self.queued.remove(&pid) {
            return false;
        }

        let removed = match self.policy {
            SchedulingPolicy::RoundRobin => {
                let before = self.rr_queue.len();
                self.rr_queue.retain(|e| e.pid != pid);
                self.rr_queue.len() < before
            }
            SchedulingPolicy::Priority => {
                let before = self.priority_queue.len();
                self.priority_queue.retain(|e| e.0.pid != pid);
                self.priority_queue.len() < before
            }
            SchedulingPolicy::ShortestJobFirst => {
                let before = self.sjf_queue.len();
                self.sjf_queue.retain(|e| e.0.pid != pid);
                self.sjf_queue.len() < before
            }
        };

        if removed {
            debug!(pid, "process removed from ready queue");
        }
        removed
    }

    /// Number of queued processes
    pub fn len(&self) -> usize {
        match self.policy {
            SchedulingPolicy::RoundRobin => self.rr_queue.len(),
            SchedulingPolicy::Priority => self.priority_queue.len(),
            SchedulingPolicy::ShortestJobFirst => self.sjf_queue.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Same as [`Scheduler::len`]
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Queued PIDs in the order they would be dispatched
    pub fn queued(&self) -> Vec<Pid> {
        match self.policy {
            SchedulingPolicy::RoundRobin => self.rr_queue.iter().map(|e| e.pid).collect(),
            SchedulingPolicy::Priority => {
                let mut sorted = self.priority_queue.clone().into_sorted_vec();
                sorted.reverse();
                sorted.into_iter().map(|e| e.0.pid).collect()
            }
            SchedulingPolicy::ShortestJobFirst => {
                let mut sorted = self.sjf_queue.clone().into_sorted_vec();
                sorted.reverse();
                sorted.into_iter().map(|e| e.0.pid).collect()
            }
        }
    }

    /// Empty the ready queue, forcing every queued process to TERMINATED
    pub fn clear(&mut self, processes: &mut ProcessRegistry, now: Timestamp) {
        let entries = self.drain_entries();
        let count = entries.len();

        for entry in entries {
            if let Some(process) = processes.get_mut(entry.pid) {
                let from = process.state();
                process.set_state(ProcessState::Terminated);
                self.record(now, entry.pid, from, ProcessState::Terminated);
            }
        }

        debug!(count, "ready queue cleared");
    }

    /// Switch the CPU from one process to another at a fixed cost
    ///
    /// `from` goes back to READY (the caller re-enqueues it if needed) and
    /// `to` becomes RUNNING; either may be absent. TERMINATED or unknown
    /// processes are left untouched. Returns the overhead.
    pub fn context_switch(
        &mut self,
        processes: &mut ProcessRegistry,
        from: Option<Pid>,
        to: Option<Pid>,
        now: Timestamp,
    ) -> Timestamp {
        let overhead = CONTEXT_SWITCH_OVERHEAD;

        let live = |p: &&mut Process| p.state() != ProcessState::Terminated;

        match from.and_then(|pid| processes.get_mut(pid)).filter(live) {
            Some(process) => {
                let old = process.state();
                process.set_state(ProcessState::Ready);
                self.record(now, process.pid(), old, ProcessState::Ready);
            }
            None if from.is_some() => debug!(?from, "context switch source not switchable"),
            None => {}
        }

        match to.and_then(|pid| processes.get_mut(pid)).filter(live) {
            Some(process) => {
                let old = process.state();
                process.set_state(ProcessState::Running);
                self.record(now + overhead, process.pid(), old, ProcessState::Running);
            }
            None if to.is_some() => debug!(?to, "context switch target not switchable"),
            None => {}
        }

        self.context_switches += 1;
        trace!(?from, ?to, switches = self.context_switches, "context switch");
        overhead
    }

    /// Apply and log a transition the orchestrator drives itself
    ///
    /// Only RUNNING→BLOCKED, RUNNING→TERMINATED and BLOCKED→READY are
    /// accepted; anything else is an `InvalidTransition`.
    pub fn transition(
        &mut self,
        processes: &mut ProcessRegistry,
        pid: Pid,
        to: ProcessState,
        now: Timestamp,
    ) -> SchedulerResult<()> {
        let process = processes
            .get_mut(pid)
            .ok_or(SchedulerError::ProcessNotFound(pid))?;

        let from = process.state();
        let allowed = matches!(
            (from, to),
            (ProcessState::Running, ProcessState::Blocked)
                | (ProcessState::Running, ProcessState::Terminated)
                | (ProcessState::Blocked, ProcessState::Ready)
        );
        if !allowed {
            return Err(SchedulerError::InvalidTransition { pid, from, to });
        }

        process.set_state(to);
        self.record(now, pid, from, to);
        Ok(())
    }

    /// Log RUNNING→TERMINATED for a process that finished its burst
    ///
    /// `Process::execute` moves the state itself; this only records it.
    pub fn complete(
        &mut self,
        processes: &ProcessRegistry,
        pid: Pid,
        now: Timestamp,
    ) -> SchedulerResult<()> {
        let process = processes
            .get(pid)
            .ok_or(SchedulerError::ProcessNotFound(pid))?;

        if !process.is_completed() {
            return Err(SchedulerError::InvalidTransition {
                pid,
                from: process.state(),
                to: ProcessState::Terminated,
            });
        }

        self.record(now, pid, ProcessState::Running, ProcessState::Terminated);
        trace!(pid, "process completed");
        Ok(())
    }

    /// Transition history in insertion order
    pub fn history(&self) -> &[ScheduleEvent] {
        &self.history
    }

    /// Drop queued entries, history and counters; policy and quantum are kept
    pub fn reset(&mut self) {
        self.rr_queue.clear();
        self.priority_queue.clear();
        self.sjf_queue.clear();
        self.queued.clear();
        self.history.clear();
        self.next_seq = 0;
        self.total_dispatched = 0;
        self.context_switches = 0;
        self.preemptions = 0;
    }

    pub(super) fn push_entry(&mut self, entry: Entry) {
        match self.policy {
            SchedulingPolicy::RoundRobin => self.rr_queue.push_back(entry),
            SchedulingPolicy::Priority => self.priority_queue.push(PriorityEntry(entry)),
            SchedulingPolicy::ShortestJobFirst => self.sjf_queue.push(ShortestJobEntry(entry)),
        }
    }

    fn pop_entry(&mut self) -> Option<Entry> {
        match self.policy {
            SchedulingPolicy::RoundRobin => self.rr_queue.pop_front(),
            SchedulingPolicy::Priority => self.priority_queue.pop().map(|e| e.0),
            SchedulingPolicy::ShortestJobFirst => self.sjf_queue.pop().map(|e| e.0),
        }
    }

    /// Take every entry out of every queue, in enqueue order
    pub(super) fn drain_entries(&mut self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.rr_queue.drain(..).collect();
        entries.extend(self.priority_queue.drain().map(|e| e.0));
        entries.extend(self.sjf_queue.drain().map(|e| e.0));
        entries.sort_by_key(|e| e.seq);
        self.queued.clear();
        entries
    }

    fn record(&mut self, timestamp: Timestamp, pid: Pid, from: ProcessState, to: ProcessState) {
        self.history.push(ScheduleEvent {
            timestamp,
            pid,
            from,
            to,
        });
    }
}
