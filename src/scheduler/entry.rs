/*!
 * Scheduler Entry Types
 * Ready-queue entries and their per-policy orderings
 */

use crate::core::types::{Pid, Timestamp};
use crate::process::{Process, ProcessPriority};
use std::cmp::Ordering;

/// Ready-queue entry
///
/// Carries a copy of the ordering keys taken at enqueue time. A queued
/// process does not execute, so the copy stays accurate until dispatch.
#[derive(Debug, Clone)]
pub(super) struct Entry {
    pub pid: Pid,
    pub priority: ProcessPriority,
    pub arrival_time: Timestamp,
    pub remaining_time: u64,
    /// Enqueue sequence number, the final FIFO tie-breaker
    pub seq: u64,
}

impl Entry {
    pub fn new(process: &Process, seq: u64) -> Self {
        Self {
            pid: process.pid(),
            priority: process.priority(),
            arrival_time: process.arrival_time(),
            remaining_time: process.remaining_time(),
            seq,
        }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.pid == other.pid && self.seq == other.seq
    }
}

impl Eq for Entry {}

/// Max-heap wrapper: highest priority, then earliest arrival, then FIFO
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PriorityEntry(pub Entry);

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .priority
            .cmp(&other.0.priority)
            .then_with(|| other.0.arrival_time.cmp(&self.0.arrival_time))
            .then_with(|| other.0.seq.cmp(&self.0.seq))
    }
}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-heap wrapper: smallest remaining time, then earliest arrival, then FIFO
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ShortestJobEntry(pub Entry);

impl Ord for ShortestJobEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .remaining_time
            .cmp(&self.0.remaining_time)
            .then_with(|| other.0.arrival_time.cmp(&self.0.arrival_time))
            .then_with(|| other.0.seq.cmp(&self.0.seq))
    }
}

impl PartialOrd for ShortestJobEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
