/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (assigned from 1, never reused within a run)
pub type Pid = u32;

/// Address type for simulated memory operations
pub type Address = usize;

/// Size type for simulated memory operations
pub type Size = usize;

/// Simulated clock value (time units, interpreted as milliseconds)
pub type Timestamp = u64;

/// Half-open simulated time window `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct TimeWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TimeWindow {
    #[inline]
    #[must_use]
    pub const fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Window length, zero for an empty or inverted window
    #[inline(always)]
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
