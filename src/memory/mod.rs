/*!
 * Memory Module
 * Simulated memory pool with strategy-selectable placement
 */

pub mod allocator;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use allocator::MemoryAllocator;
pub use traits::*;
pub use types::*;
