/*!
 * Simulation Limits and Constants
 *
 * Centralized location for the fixed costs, defaults and thresholds used by
 * the simulated hardware. Grouped by domain.
 */

use crate::core::types::{Size, Timestamp};

// =============================================================================
// MEMORY
// =============================================================================

/// Default page size; also the minimum remainder worth splitting off a block
pub const DEFAULT_PAGE_SIZE: Size = 4096;

/// Default simulated memory pool (512MB)
pub const DEFAULT_MEMORY_POOL: Size = 512 * 1024 * 1024;

/// Utilisation ratio at which the allocator starts warning
pub const MEMORY_WARNING_THRESHOLD: f64 = 0.80;

/// Utilisation ratio considered critical
pub const MEMORY_CRITICAL_THRESHOLD: f64 = 0.95;

// =============================================================================
// SCHEDULING
// =============================================================================

/// Default scheduler time slice
pub const DEFAULT_QUANTUM: Timestamp = 10;

/// Fixed cost of a scheduler-level context switch
pub const CONTEXT_SWITCH_OVERHEAD: Timestamp = 1;

/// Fixed cost of a hardware-level context switch (TLB flush, page table load)
pub const HARDWARE_CONTEXT_SWITCH_OVERHEAD: Timestamp = 2;

// =============================================================================
// INTERRUPT HANDLING COSTS
// =============================================================================

pub const TIMER_INTERRUPT_OVERHEAD: Timestamp = 1;
pub const IO_INTERRUPT_OVERHEAD: Timestamp = 3;
pub const SYSCALL_INTERRUPT_OVERHEAD: Timestamp = 5;
pub const FAULT_INTERRUPT_OVERHEAD: Timestamp = 10;

// =============================================================================
// SIMULATION DEFAULTS
// =============================================================================

pub const DEFAULT_PROCESS_COUNT: usize = 100;
pub const DEFAULT_DURATION: Timestamp = 10_000;
pub const DEFAULT_TIME_STEP: Timestamp = 10;
pub const DEFAULT_SEED: u64 = 42;

/// Percent chance that a preempted process blocks for I/O instead of requeueing
pub const DEFAULT_IO_PROBABILITY: u64 = 10;

/// Delay between blocking on I/O and the completion interrupt
pub const DEFAULT_IO_LATENCY: Timestamp = 30;

/// Defragment whenever the clock is a multiple of this interval
pub const DEFAULT_GC_INTERVAL: Timestamp = 1000;

/// Simulated milliseconds per second, used for throughput
pub const MILLIS_PER_SECOND: f64 = 1000.0;
