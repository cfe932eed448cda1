/*!
 * Memory Traits
 * Memory management abstractions
 */

use super::types::*;
use crate::core::types::{Address, Pid, Size};

/// Memory allocator interface
pub trait Allocator {
    /// Allocate memory for a process; `None` means no block fits
    fn allocate(&mut self, pid: Pid, size: Size) -> Option<Address>;

    /// Free the allocated block starting exactly at `address`
    fn deallocate(&mut self, pid: Pid, address: Address) -> bool;

    /// Check if an address is the start of an allocated block
    fn is_allocated(&self, address: Address) -> bool;

    /// Get the size of an allocated block
    fn block_size(&self, address: Address) -> Option<Size>;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Allocated bytes over total bytes
    fn utilization(&self) -> f64;

    /// Share of free memory outside the largest free block
    fn fragmentation(&self) -> f64;

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}

/// Process memory cleanup
pub trait ProcessMemoryCleanup {
    /// Free all memory allocated to a process, returning the bytes released
    fn free_process_memory(&mut self, pid: Pid) -> Size;

    /// Get list of allocations for a process
    fn process_allocations(&self, pid: Pid) -> Vec<MemoryBlock>;
}
