/*!
 * Allocator Tests
 * Placement, splitting, coalescing and compaction through the public API
 */

use os_resource_sim::memory::{
    Allocator, MemoryAllocator, MemoryBlock, MemoryInfo, PlacementStrategy, ProcessMemoryCleanup,
};
use pretty_assertions::assert_eq;

fn allocator(strategy: PlacementStrategy) -> MemoryAllocator {
    MemoryAllocator::new(1024, 128, strategy).unwrap()
}

/// Free holes of 300 @100, 150 @500 and 200 @750; everything else allocated
fn holed(strategy: PlacementStrategy) -> MemoryAllocator {
    let mut alloc = MemoryAllocator::new(1024, 16, strategy).unwrap();
    alloc.allocate(1, 100).unwrap();
    let a = alloc.allocate(2, 300).unwrap();
    alloc.allocate(3, 100).unwrap();
    let b = alloc.allocate(4, 150).unwrap();
    alloc.allocate(5, 100).unwrap();
    let c = alloc.allocate(6, 200).unwrap();
    alloc.allocate(7, 74).unwrap();
    assert!(alloc.deallocate(2, a));
    assert!(alloc.deallocate(4, b));
    assert!(alloc.deallocate(6, c));
    alloc
}

#[test]
fn test_split_boundary_is_request_size() {
    let mut alloc = allocator(PlacementStrategy::FirstFit);
    assert_eq!(alloc.allocate(1, 100), Some(0));
    assert_eq!(alloc.allocate(2, 100), Some(100));
    assert_eq!(
        alloc.memory_map(),
        vec![
            MemoryBlock::allocated(0, 100, 1),
            MemoryBlock::allocated(100, 100, 2),
            MemoryBlock::free(200, 824),
        ]
    );
}

#[test]
fn test_placement_strategies_pick_different_holes() {
    let mut first = holed(PlacementStrategy::FirstFit);
    let mut best = holed(PlacementStrategy::BestFit);
    let mut worst = holed(PlacementStrategy::WorstFit);

    assert_eq!(first.allocate(10, 140), Some(100));
    assert_eq!(best.allocate(10, 140), Some(500));
    assert_eq!(worst.allocate(10, 140), Some(100));

    assert_eq!(best.allocate(11, 180), Some(750));
}

#[test]
fn test_strategy_switch_keeps_allocations() {
    let mut alloc = holed(PlacementStrategy::FirstFit);
    let before = alloc.allocated_memory();
    alloc.set_strategy(PlacementStrategy::BestFit);
    assert_eq!(alloc.strategy(), PlacementStrategy::BestFit);
    assert_eq!(alloc.allocated_memory(), before);
    assert_eq!(alloc.allocate(10, 150), Some(500));
}

#[test]
fn test_zero_size_never_mutates() {
    let mut alloc = holed(PlacementStrategy::WorstFit);
    let before = alloc.memory_map();
    assert_eq!(alloc.allocate(1, 0), None);
    assert_eq!(alloc.memory_map(), before);
}

#[test]
fn test_exhaustion_returns_none() {
    let mut alloc = allocator(PlacementStrategy::FirstFit);
    assert_eq!(alloc.allocate(1, 1024), Some(0));
    assert_eq!(alloc.allocate(2, 1), None);
    assert_eq!(alloc.utilization(), 1.0);
    assert_eq!(alloc.fragmentation(), 0.0);
}

#[test]
fn test_garbage_collect_scenario() {
    let mut alloc = MemoryAllocator::new(1024, 16, PlacementStrategy::FirstFit).unwrap();
    alloc.allocate(1, 100).unwrap();
    let hole = alloc.allocate(2, 50).unwrap();
    alloc.allocate(3, 200).unwrap();
    alloc.deallocate(2, hole);
    assert_eq!(
        alloc.memory_map(),
        vec![
            MemoryBlock::allocated(0, 100, 1),
            MemoryBlock::free(100, 50),
            MemoryBlock::allocated(150, 200, 3),
            MemoryBlock::free(350, 674),
        ]
    );

    assert_eq!(alloc.garbage_collect(), 200);
    assert_eq!(
        alloc.memory_map(),
        vec![
            MemoryBlock::allocated(0, 100, 1),
            MemoryBlock::allocated(100, 200, 3),
            MemoryBlock::free(300, 724),
        ]
    );
    // Owners survive relocation
    assert_eq!(alloc.process_allocations(3)[0].address, 100);
}

#[test]
fn test_trait_objects() {
    let mut alloc = allocator(PlacementStrategy::FirstFit);
    {
        let allocator: &mut dyn Allocator = &mut alloc;
        let address = allocator.allocate(4, 256).unwrap();
        assert!(allocator.is_allocated(address));
        assert_eq!(allocator.block_size(address), Some(256));
    }

    let info: &dyn MemoryInfo = &alloc;
    assert_eq!(info.stats().used_memory, 256);
    assert_eq!(info.utilization(), 0.25);

    let cleanup: &mut dyn ProcessMemoryCleanup = &mut alloc;
    assert_eq!(cleanup.free_process_memory(4), 256);
    assert!(cleanup.process_allocations(4).is_empty());
}
