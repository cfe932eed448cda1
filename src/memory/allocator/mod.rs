/*!
 * Memory Allocator
 *
 * Simulated linear address space managed as an ordered block list.
 *
 * ## Layout
 *
 * Blocks are kept sorted by address, never overlap and leave no gaps, so
 * together they always cover exactly `[0, total_memory)`.
 *
 * ## Features
 *
 * - **Placement**: first, best or worst fit, switchable at runtime
 * - **Splitting**: a block is split only when the remainder is at least one page
 * - **Coalescing**: adjacent free blocks merge until no free pair is adjacent
 * - **Compaction**: allocated blocks slide to the lowest addresses
 * - **Memory pressure tracking**: Warns at 80%, critical at 95%
 */

mod compaction;
mod operations;
mod placement;

use super::types::{MemoryBlock, MemoryPressure, MemoryResult, PlacementStrategy};
use crate::core::errors::ConfigError;
use crate::core::limits::DEFAULT_PAGE_SIZE;
use crate::core::types::Size;
use tracing::info;

/// Block-list memory allocator
#[derive(Debug, Clone)]
pub struct MemoryAllocator {
    total_memory: Size,
    page_size: Size,
    strategy: PlacementStrategy,
    blocks: Vec<MemoryBlock>,

    // Last observed pressure level, for edge-triggered warnings
    pressure: MemoryPressure,
}

impl MemoryAllocator {
    /// Create an allocator with one free block spanning all memory
    pub fn new(
        total_memory: Size,
        page_size: Size,
        strategy: PlacementStrategy,
    ) -> MemoryResult<Self> {
        if total_memory == 0 {
            return Err(ConfigError::invalid("total_memory must be greater than 0"));
        }
        if page_size == 0 {
            return Err(ConfigError::invalid("page_size must be greater than 0"));
        }

        info!(
            total_memory,
            page_size,
            %strategy,
            "memory allocator initialized"
        );

        Ok(Self {
            total_memory,
            page_size,
            strategy,
            blocks: vec![MemoryBlock::free(0, total_memory)],
            pressure: MemoryPressure::Low,
        })
    }

    /// Create an allocator with the default page size
    pub fn with_strategy(total_memory: Size, strategy: PlacementStrategy) -> MemoryResult<Self> {
        Self::new(total_memory, DEFAULT_PAGE_SIZE, strategy)
    }

    /// Restore a single free block spanning all memory
    pub fn reset(&mut self) {
        self.blocks.clear();
        self.blocks.push(MemoryBlock::free(0, self.total_memory));
        self.pressure = MemoryPressure::Low;
        info!("memory allocator reset");
    }

    pub fn set_strategy(&mut self, strategy: PlacementStrategy) {
        if strategy != self.strategy {
            info!(from = %self.strategy, to = %strategy, "placement strategy changed");
            self.strategy = strategy;
        }
    }

    #[inline(always)]
    pub fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }

    #[inline(always)]
    pub fn page_size(&self) -> Size {
        self.page_size
    }

    #[inline(always)]
    pub fn total_memory(&self) -> Size {
        self.total_memory
    }

    /// Snapshot of the block list in address order
    pub fn memory_map(&self) -> Vec<MemoryBlock> {
        self.blocks.clone()
    }

    /// Borrowed view of the block list in address order
    pub fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    pub fn free_memory(&self) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.is_free())
            .map(|b| b.size)
            .sum()
    }

    pub fn allocated_memory(&self) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.is_allocated())
            .map(|b| b.size)
            .sum()
    }

    pub fn largest_free_block(&self) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.is_free())
            .map(|b| b.size)
            .max()
            .unwrap_or(0)
    }
}
