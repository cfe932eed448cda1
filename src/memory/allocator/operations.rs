/*!
 * Allocator Operations
 * Allocation, deallocation, coalescing and statistics
 */

use super::placement;
use super::MemoryAllocator;
use crate::core::types::{Address, Pid, Size};
use crate::memory::traits::{Allocator, MemoryInfo, ProcessMemoryCleanup};
use crate::memory::types::{MemoryBlock, MemoryPressure, MemoryStats};
use tracing::{debug, info, trace, warn};

impl MemoryAllocator {
    /// Place `size` bytes for `pid` under the active strategy
    ///
    /// Returns `None` when the request is zero, larger than the pool, or no
    /// free block fits. None of those cases touch the block list.
    pub fn allocate(&mut self, pid: Pid, size: Size) -> Option<Address> {
        if size == 0 || size > self.total_memory {
            trace!(pid, size, "allocation request rejected");
            return None;
        }

        let Some(index) = placement::select(self.strategy, &self.blocks, size) else {
            debug!(
                pid,
                size,
                free = self.free_memory(),
                largest = self.largest_free_block(),
                "no free block fits request"
            );
            return None;
        };

        let block = self.blocks[index];
        let remainder = block.size - size;

        if remainder >= self.page_size {
            self.blocks[index] = MemoryBlock::allocated(block.address, size, pid);
            self.blocks
                .insert(index + 1, MemoryBlock::free(block.address + size, remainder));
        } else {
            // Internal fragmentation below one page is accepted
            self.blocks[index] = MemoryBlock::allocated(block.address, block.size, pid);
        }

        trace!(
            pid,
            size,
            address = block.address,
            strategy = %self.strategy,
            "memory allocated"
        );
        self.check_pressure();
        Some(block.address)
    }

    /// Free the allocated block starting exactly at `address`
    ///
    /// Ownership is not enforced; `pid` is only reported.
    pub fn deallocate(&mut self, pid: Pid, address: Address) -> bool {
        let Some(index) = self
            .blocks
            .iter()
            .position(|b| b.address == address && b.is_allocated())
        else {
            warn!(pid, address, "deallocation miss: no allocated block at address");
            return false;
        };

        let owner = self.blocks[index].owner_pid;
        if owner != pid {
            debug!(pid, owner, address, "block freed by non-owner");
        }

        let size = self.blocks[index].size;
        self.blocks[index].release();
        self.coalesce();
        self.check_pressure();

        trace!(pid, address, size, "memory deallocated");
        true
    }

    /// Merge adjacent free blocks until no free pair is adjacent
    fn coalesce(&mut self) {
        let mut merged: Vec<MemoryBlock> = Vec::with_capacity(self.blocks.len());
        for block in self.blocks.drain(..) {
            match merged.last_mut() {
                Some(prev) if prev.is_free() && block.is_free() => prev.size += block.size,
                _ => merged.push(block),
            }
        }
        self.blocks = merged;
    }

    pub fn is_allocated(&self, address: Address) -> bool {
        self.blocks
            .iter()
            .any(|b| b.address == address && b.is_allocated())
    }

    pub fn block_size(&self, address: Address) -> Option<Size> {
        self.blocks
            .iter()
            .find(|b| b.address == address && b.is_allocated())
            .map(|b| b.size)
    }

    /// Allocated bytes over total bytes
    pub fn utilization(&self) -> f64 {
        self.allocated_memory() as f64 / self.total_memory as f64
    }

    /// `1 - largest_free / total_free`; 0 with no free memory
    pub fn fragmentation(&self) -> f64 {
        let total_free = self.free_memory();
        if total_free == 0 {
            return 0.0;
        }

        let largest = self.largest_free_block();
        if largest == 0 {
            return 1.0;
        }

        1.0 - largest as f64 / total_free as f64
    }

    pub fn stats(&self) -> MemoryStats {
        let used = self.allocated_memory();
        let allocated_blocks = self.blocks.iter().filter(|b| b.is_allocated()).count();

        MemoryStats {
            total_memory: self.total_memory,
            used_memory: used,
            available_memory: self.total_memory - used,
            usage_percentage: self.utilization() * 100.0,
            allocated_blocks,
            free_blocks: self.blocks.len() - allocated_blocks,
            largest_free_block: self.largest_free_block(),
            fragmentation: self.fragmentation(),
        }
    }

    /// Blocks currently owned by `pid`, in address order
    pub fn process_allocations(&self, pid: Pid) -> Vec<MemoryBlock> {
        self.blocks
            .iter()
            .filter(|b| b.is_allocated() && b.owner_pid == pid)
            .copied()
            .collect()
    }

    /// Deallocate every block owned by `pid`, returning the bytes released
    pub fn free_process_memory(&mut self, pid: Pid) -> Size {
        let mut freed = 0;
        let mut count = 0;
        for block in self
            .blocks
            .iter_mut()
            .filter(|b| b.is_allocated() && b.owner_pid == pid)
        {
            freed += block.size;
            count += 1;
            block.release();
        }

        if count > 0 {
            self.coalesce();
            self.check_pressure();
            debug!(pid, freed, blocks = count, "process memory released");
        }
        freed
    }

    // Log only when the pressure level changes
    fn check_pressure(&mut self) {
        let level = MemoryPressure::from_ratio(self.utilization());
        if level == self.pressure {
            return;
        }

        let previous = self.pressure;
        self.pressure = level;
        match level {
            MemoryPressure::Critical => warn!(
                usage = self.utilization() * 100.0,
                "critical memory pressure"
            ),
            MemoryPressure::High if previous < MemoryPressure::High => warn!(
                usage = self.utilization() * 100.0,
                "high memory pressure"
            ),
            _ => info!(from = %previous, to = %level, "memory pressure changed"),
        }
    }
}

impl Allocator for MemoryAllocator {
    fn allocate(&mut self, pid: Pid, size: Size) -> Option<Address> {
        MemoryAllocator::allocate(self, pid, size)
    }

    fn deallocate(&mut self, pid: Pid, address: Address) -> bool {
        MemoryAllocator::deallocate(self, pid, address)
    }

    fn is_allocated(&self, address: Address) -> bool {
        MemoryAllocator::is_allocated(self, address)
    }

    fn block_size(&self, address: Address) -> Option<Size> {
        MemoryAllocator::block_size(self, address)
    }
}

impl MemoryInfo for MemoryAllocator {
    fn stats(&self) -> MemoryStats {
        MemoryAllocator::stats(self)
    }

    fn utilization(&self) -> f64 {
        MemoryAllocator::utilization(self)
    }

    fn fragmentation(&self) -> f64 {
        MemoryAllocator::fragmentation(self)
    }
}

impl ProcessMemoryCleanup for MemoryAllocator {
    fn free_process_memory(&mut self, pid: Pid) -> Size {
        MemoryAllocator::free_process_memory(self, pid)
    }

    fn process_allocations(&self, pid: Pid) -> Vec<MemoryBlock> {
        MemoryAllocator::process_allocations(self, pid)
    }
}
