/*!
 * Process Types
 * Simulated task entity and its lifecycle state machine
 */

use crate::core::errors::ProcessError;
use crate::core::types::{Pid, Size, Timestamp};
use serde::{Deserialize, Serialize};

/// Process operation result
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Process state
///
/// Valid transitions are enforced by the registry and scheduler, not here:
/// NEW→READY, READY→RUNNING, RUNNING→{READY, BLOCKED, TERMINATED},
/// BLOCKED→READY. TERMINATED is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Created but not yet admitted
    New,
    /// Waiting in the ready queue
    Ready,
    /// Currently holding the simulated CPU
    Running,
    /// Waiting for an I/O completion interrupt
    Blocked,
    /// Finished (or forcibly removed)
    Terminated,
}

impl ProcessState {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Blocked => "BLOCKED",
            Self::Terminated => "TERMINATED",
        }
    }
}

impl std::fmt::Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process priority, ordered LOW < MEDIUM < HIGH < CRITICAL
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProcessPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl ProcessPriority {
    pub const ALL: [ProcessPriority; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Numeric weight of the priority level
    #[inline(always)]
    pub const fn weight(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 5,
            Self::High => 10,
            Self::Critical => 15,
        }
    }
}


impl std::fmt::Display for ProcessPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// One simulated task
///
/// Invariants: `remaining_time <= burst_time`, and `remaining_time == 0`
/// exactly when the process finished through [`Process::execute`].
#[derive(Debug, Clone, Serialize)]
pub struct Process {
    pid: Pid,
    name: String,
    arrival_time: Timestamp,
    burst_time: u64,
    remaining_time: u64,
    memory_required: Size,
    priority: ProcessPriority,
    state: ProcessState,
    completion_time: Timestamp,
    execution_history: Vec<Timestamp>,
}

impl Process {
    /// Validates and builds a process in the NEW state
    pub(crate) fn new(
        pid: Pid,
        arrival_time: Timestamp,
        burst_time: u64,
        memory_required: Size,
        priority: ProcessPriority,
    ) -> ProcessResult<Self> {
        if burst_time == 0 || memory_required == 0 {
            return Err(ProcessError::InvalidParameters {
                burst_time,
                memory_required: memory_required as u64,
            });
        }

        Ok(Self {
            pid,
            name: format!("Process_{}", pid),
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            memory_required,
            priority,
            state: ProcessState::New,
            completion_time: 0,
            execution_history: Vec::new(),
        })
    }

    #[inline(always)]
    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn arrival_time(&self) -> Timestamp {
        self.arrival_time
    }

    #[inline(always)]
    pub fn burst_time(&self) -> u64 {
        self.burst_time
    }

    #[inline(always)]
    pub fn remaining_time(&self) -> u64 {
        self.remaining_time
    }

    #[inline(always)]
    pub fn memory_required(&self) -> Size {
        self.memory_required
    }

    #[inline(always)]
    pub fn priority(&self) -> ProcessPriority {
        self.priority
    }

    #[inline(always)]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Completion time, 0 while the process has not completed
    #[inline(always)]
    pub fn completion_time(&self) -> Timestamp {
        self.completion_time
    }

    pub fn execution_history(&self) -> &[Timestamp] {
        &self.execution_history
    }

    pub fn set_state(&mut self, state: ProcessState) {
        self.state = state;
    }

    pub fn set_completion_time(&mut self, time: Timestamp) {
        self.completion_time = time;
    }

    /// Append a timestamp to the execution log
    pub fn record_execution(&mut self, timestamp: Timestamp) {
        self.execution_history.push(timestamp);
    }

    /// Run for up to `quantum` time units; returns true when the process completed
    ///
    /// # Panics
    /// Panics if the process is not RUNNING. Executing a process the
    /// scheduler has not dispatched is an orchestrator bug.
    pub fn execute(&mut self, quantum: u64) -> bool {
        if self.state != ProcessState::Running {
            panic!(
                "invalid state transition: process {} executed while {} (must be RUNNING)",
                self.pid, self.state
            );
        }

        if self.remaining_time <= quantum {
            self.remaining_time = 0;
            self.state = ProcessState::Terminated;
            true
        } else {
            self.remaining_time -= quantum;
            false
        }
    }

    /// Finished through execution (forced terminations do not count)
    #[inline(always)]
    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Terminated && self.remaining_time == 0
    }

    /// Completion time minus arrival time, 0 until completed
    pub fn turnaround_time(&self) -> u64 {
        if !self.is_completed() || self.completion_time == 0 {
            return 0;
        }
        self.completion_time.saturating_sub(self.arrival_time)
    }

    /// Turnaround time minus burst time, 0 until completed
    pub fn waiting_time(&self) -> u64 {
        if !self.is_completed() || self.completion_time == 0 {
            return 0;
        }
        self.turnaround_time().saturating_sub(self.burst_time)
    }
}
