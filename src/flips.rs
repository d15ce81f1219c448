//! The flip counter: how many greedy prefix reversals a stack needs.

use crate::MAX_PANCAKES;

/// Counts the prefix reversals the greedy procedure performs on `p`:
/// repeatedly reverse the prefix ending at the position named by the top
/// element, until 0 surfaces at the top.
///
/// This is the benchmark's definition of "flips", not a shortest-path
/// computation.
pub fn count_flips(p: &[usize]) -> u32 {
    let mut first = p[0];
    if first == 0 {
        return 0;
    }

    let mut scratch = [0usize; MAX_PANCAKES];
    scratch[..p.len()].copy_from_slice(p);

    let mut flips = 0;
    while first != 0 {
        scratch[..=first].reverse();
        first = scratch[0];
        flips += 1;
    }
    flips
}
