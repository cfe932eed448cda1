/*!
 * Scheduler Types
 * Domain types for scheduling policy, audit history and statistics
 */

use crate::core::serde::{is_zero_u64, is_zero_usize};
use crate::core::types::{Pid, Timestamp};
use crate::process::ProcessState;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Scheduler operation result
pub type SchedulerResult<T> = Result<T, crate::core::errors::SchedulerError>;

/// Ready-queue ordering policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// FIFO; re-enqueueing an unfinished process realizes time slicing
    RoundRobin,
    /// Highest priority first, earlier arrival breaks ties
    Priority,
    /// Smallest remaining time first, earlier arrival breaks ties
    ShortestJobFirst,
}

impl SchedulingPolicy {
    pub const ALL: [SchedulingPolicy; 3] =
        [Self::RoundRobin, Self::Priority, Self::ShortestJobFirst];

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "round_robin",
            Self::Priority => "priority",
            Self::ShortestJobFirst => "shortest_job_first",
        }
    }

    /// Short label used in report tables
    pub const fn label(&self) -> &'static str {
        match self {
            Self::RoundRobin => "RR",
            Self::Priority => "Priority",
            Self::ShortestJobFirst => "SJF",
        }
    }
}

impl FromStr for SchedulingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "priority" | "prio" => Ok(Self::Priority),
            "shortest_job_first" | "sjf" => Ok(Self::ShortestJobFirst),
            _ => Err(format!(
                "Invalid policy '{}'. Valid: round_robin, priority, shortest_job_first",
                s
            )),
        }
    }
}

impl std::fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Immutable record of one state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub timestamp: Timestamp,
    pub pid: Pid,
    pub from: ProcessState,
    pub to: ProcessState,
}

/// Scheduler statistics snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub total_dispatched: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub context_switches: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub preemptions: u64,
    #[serde(skip_serializing_if = "is_zero_usize", default)]
    pub queued: usize,
    pub policy: SchedulingPolicy,
    pub quantum: Timestamp,
}
