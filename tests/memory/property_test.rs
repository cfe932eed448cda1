/*!
 * Allocator Property Tests
 * Layout invariants under arbitrary allocate/deallocate sequences
 */

use os_resource_sim::memory::{MemoryAllocator, PlacementStrategy};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Allocate { pid: u32, size: usize },
    Free { slot: usize },
    Compact,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (1u32..8, 0usize..600).prop_map(|(pid, size)| Op::Allocate { pid, size }),
        3 => (0usize..32).prop_map(|slot| Op::Free { slot }),
        1 => Just(Op::Compact),
    ]
}

fn placement() -> impl Strategy<Value = PlacementStrategy> {
    prop_oneof![
        Just(PlacementStrategy::FirstFit),
        Just(PlacementStrategy::BestFit),
        Just(PlacementStrategy::WorstFit),
    ]
}

fn assert_layout(alloc: &MemoryAllocator) {
    let blocks = alloc.blocks();
    let mut cursor = 0;
    for pair in blocks.windows(2) {
        assert!(!(pair[0].is_free() && pair[1].is_free()), "adjacent free blocks");
    }
    for block in blocks {
        assert_eq!(block.address, cursor, "gap or overlap at {}", cursor);
        cursor += block.size;
    }
    assert_eq!(cursor, alloc.total_memory());
    assert_eq!(alloc.free_memory() + alloc.allocated_memory(), alloc.total_memory());
}

proptest! {
    #[test]
    fn prop_blocks_cover_address_space(
        strategy in placement(),
        page_size in 1usize..256,
        ops in prop::collection::vec(op(), 1..80),
    ) {
        let mut alloc = MemoryAllocator::new(4096, page_size, strategy).unwrap();
        let mut live: Vec<(u32, usize)> = Vec::new();

        for op in ops {
            match op {
                Op::Allocate { pid, size } => {
                    if let Some(address) = alloc.allocate(pid, size) {
                        live.push((pid, address));
                    }
                }
                Op::Free { slot } => {
                    if !live.is_empty() {
                        let (pid, address) = live.remove(slot % live.len());
                        prop_assert!(alloc.deallocate(pid, address));
                    }
                }
                Op::Compact => {
                    alloc.garbage_collect();
                    live = alloc
                        .blocks()
                        .iter()
                        .filter(|b| b.is_allocated())
                        .map(|b| (b.owner_pid, b.address))
                        .collect();
                }
            }
            assert_layout(&alloc);
            prop_assert!(alloc.fragmentation() >= 0.0 && alloc.fragmentation() < 1.0);
        }
    }

    #[test]
    fn prop_allocate_then_free_restores_utilization(
        strategy in placement(),
        prefix in prop::collection::vec(1usize..400, 0..6),
        size in 1usize..1024,
    ) {
        let mut alloc = MemoryAllocator::new(4096, 64, strategy).unwrap();
        for (i, s) in prefix.iter().enumerate() {
            alloc.allocate(i as u32 + 1, *s);
        }

        let utilization = alloc.utilization();
        let fragmentation = alloc.fragmentation();

        if let Some(address) = alloc.allocate(99, size) {
            prop_assert!(alloc.deallocate(99, address));
            prop_assert_eq!(alloc.utilization(), utilization);
            prop_assert!(alloc.fragmentation() <= fragmentation + 1e-12);
        }
        assert_layout(&alloc);
    }
}
