/*!
 * Process Registry
 * Owns every simulated process; other components refer to them by PID
 */

use super::types::{Process, ProcessPriority, ProcessResult, ProcessState};
use crate::core::types::{Pid, Size, Timestamp};
use ahash::AHashMap;
use tracing::{debug, info};

/// Arena of processes in insertion order plus a PID index
#[derive(Debug)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
    index: AHashMap<Pid, usize>,
    next_pid: Pid,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self {
            processes: Vec::new(),
            index: AHashMap::new(),
            next_pid: 1,
        }
    }

    /// Create a process; on invalid parameters nothing is registered and no PID is consumed
    pub fn create(
        &mut self,
        arrival_time: Timestamp,
        burst_time: u64,
        memory_required: Size,
        priority: ProcessPriority,
    ) -> ProcessResult<Pid> {
        let pid = self.next_pid;
        let process = Process::new(pid, arrival_time, burst_time, memory_required, priority)?;

        self.next_pid += 1;
        self.index.insert(pid, self.processes.len());
        self.processes.push(process);

        debug!(
            pid,
            arrival_time, burst_time, memory_required, %priority, "process created"
        );
        Ok(pid)
    }

    pub fn get(&self, pid: Pid) -> Option<&Process> {
        self.index.get(&pid).map(|&slot| &self.processes[slot])
    }

    pub fn get_mut(&mut self, pid: Pid) -> Option<&mut Process> {
        self.index.get(&pid).map(|&slot| &mut self.processes[slot])
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.index.contains_key(&pid)
    }

    /// Remove a process by PID
    pub fn destroy(&mut self, pid: Pid) -> bool {
        let Some(slot) = self.index.remove(&pid) else {
            return false;
        };

        self.processes.remove(slot);
        self.reindex_from(slot);
        debug!(pid, "process destroyed");
        true
    }

    /// All processes in insertion order
    pub fn all(&self) -> &[Process] {
        &self.processes
    }

    pub fn by_state(&self, state: ProcessState) -> Vec<&Process> {
        self.processes
            .iter()
            .filter(|p| p.state() == state)
            .collect()
    }

    pub fn pids_by_state(&self, state: ProcessState) -> Vec<Pid> {
        self.processes
            .iter()
            .filter(|p| p.state() == state)
            .map(Process::pid)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Number of processes that finished through execution
    pub fn completed_count(&self) -> usize {
        self.processes.iter().filter(|p| p.is_completed()).count()
    }

    /// Drop every TERMINATED process; returns how many were removed
    pub fn cleanup_terminated(&mut self) -> usize {
        let before = self.processes.len();
        self.processes
            .retain(|p| p.state() != ProcessState::Terminated);
        let removed = before - self.processes.len();

        if removed > 0 {
            self.index.clear();
            self.reindex_from(0);
            info!(removed, remaining = self.processes.len(), "terminated processes cleaned up");
        }
        removed
    }

    /// Clear all processes and restart PID assignment at 1
    pub fn reset(&mut self) {
        self.processes.clear();
        self.index.clear();
        self.next_pid = 1;
    }

    fn reindex_from(&mut self, start: usize) {
        for (slot, process) in self.processes.iter().enumerate().skip(start) {
            self.index.insert(process.pid(), slot);
        }
    }
}

impl Default for ProcessRegistry {
    fn default() -> Self {
        Self::new()
    }
}
