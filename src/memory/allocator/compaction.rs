/*!
 * Compaction
 * Defragmentation by sliding allocated blocks to low addresses
 */

use super::MemoryAllocator;
use crate::core::types::Size;
use crate::memory::types::MemoryBlock;
use tracing::{debug, info};

impl MemoryAllocator {
    /// Relocate every allocated block to the lowest addresses
    ///
    /// Relative order and owners are preserved and all free space ends up in
    /// one trailing block. Returns the number of bytes that changed address.
    pub fn garbage_collect(&mut self) -> Size {
        let mut compacted = Vec::with_capacity(self.blocks.len());
        let mut cursor = 0;
        let mut moved = 0;

        for block in self.blocks.iter().filter(|b| b.is_allocated()) {
            if block.address != cursor {
                moved += block.size;
            }
            compacted.push(MemoryBlock::allocated(cursor, block.size, block.owner_pid));
            cursor += block.size;
        }

        if cursor < self.total_memory {
            compacted.push(MemoryBlock::free(cursor, self.total_memory - cursor));
        }

        let before = self.blocks.len();
        self.blocks = compacted;

        if moved > 0 {
            info!(
                bytes_moved = moved,
                blocks_before = before,
                blocks_after = self.blocks.len(),
                "memory compacted"
            );
        } else {
            debug!("compaction found nothing to move");
        }
        moved
    }
}
