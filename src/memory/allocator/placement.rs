/*!
 * Placement Strategies
 * Pure block selection over an address-ordered block list
 */

use crate::memory::types::{MemoryBlock, PlacementStrategy};
use crate::core::types::Size;

/// Index of the free block the strategy picks for `size`, if any
pub(super) fn select(
    strategy: PlacementStrategy,
    blocks: &[MemoryBlock],
    size: Size,
) -> Option<usize> {
    match strategy {
        PlacementStrategy::FirstFit => first_fit(blocks, size),
        PlacementStrategy::BestFit => best_fit(blocks, size),
        PlacementStrategy::WorstFit => worst_fit(blocks, size),
    }
}

fn candidates(blocks: &[MemoryBlock], size: Size) -> impl Iterator<Item = (usize, &MemoryBlock)> {
    blocks
        .iter()
        .enumerate()
        .filter(move |(_, b)| b.is_free() && b.size >= size)
}

fn first_fit(blocks: &[MemoryBlock], size: Size) -> Option<usize> {
    candidates(blocks, size).map(|(i, _)| i).next()
}

// min_by_key returns the first minimum, i.e. the lowest address on ties
fn best_fit(blocks: &[MemoryBlock], size: Size) -> Option<usize> {
    candidates(blocks, size)
        .min_by_key(|(_, b)| b.size)
        .map(|(i, _)| i)
}

// max_by_key returns the last maximum, so fold to keep the first one
fn worst_fit(blocks: &[MemoryBlock], size: Size) -> Option<usize> {
    candidates(blocks, size)
        .fold(None, |best: Option<(usize, Size)>, (i, b)| match best {
            Some((_, largest)) if largest >= b.size => best,
            _ => Some((i, b.size)),
        })
        .map(|(i, _)| i)
}
