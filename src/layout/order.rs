//! Edge-to-center traversal ordering
//!
//! Tiles are visited extremes-first: the two ends of an axis are taken
//! before the interior, walking inward alternately. Order-sensitive
//! per-tile transforms (progressive refinement, seeded generators) then
//! touch the image border before its center, and the reassembly engine
//! receives each strip's outermost tiles before the tiles that blend
//! into them.

/// Visit `0..count` extremes-first, alternating smallest and largest
///
/// `[0, 1, 2]` becomes `[0, 2, 1]`; `[0..6]` becomes `[0, 5, 1, 4, 2, 3]`.
/// The result is a permutation of `0..count` and is deterministic for a
/// given `count`.
pub fn edge_to_center(count: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(count);
    let mut low = 0;
    let mut high = count;

    while low < high {
        order.push(low);
        low += 1;
        if low < high {
            high -= 1;
            order.push(high);
        }
    }

    order
}
