/*!
 * Hardware Types
 * Interrupt records and their fixed handling costs
 */

use crate::core::limits::{
    FAULT_INTERRUPT_OVERHEAD, IO_INTERRUPT_OVERHEAD, SYSCALL_INTERRUPT_OVERHEAD,
    TIMER_INTERRUPT_OVERHEAD,
};
use crate::core::types::{Pid, Timestamp};
use serde::{Deserialize, Serialize};

/// Interrupt source category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterruptType {
    Timer,
    Io,
    Syscall,
    Fault,
}

impl InterruptType {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Timer => "TIMER",
            Self::Io => "IO",
            Self::Syscall => "SYSCALL",
            Self::Fault => "FAULT",
        }
    }

    /// Handling cost charged when the interrupt is drained
    #[inline(always)]
    pub const fn overhead(&self) -> Timestamp {
        match self {
            Self::Timer => TIMER_INTERRUPT_OVERHEAD,
            Self::Io => IO_INTERRUPT_OVERHEAD,
            Self::Syscall => SYSCALL_INTERRUPT_OVERHEAD,
            Self::Fault => FAULT_INTERRUPT_OVERHEAD,
        }
    }
}

impl std::fmt::Display for InterruptType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled interrupt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interrupt {
    pub timestamp: Timestamp,
    pub kind: InterruptType,
    /// Originating process, 0 for hardware-wide events
    pub source: Pid,
    pub description: String,
}

impl Interrupt {
    pub fn new(
        timestamp: Timestamp,
        kind: InterruptType,
        source: Pid,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            kind,
            source,
            description: description.into(),
        }
    }
}
