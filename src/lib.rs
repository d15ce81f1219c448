//! Parallel pancake-flip search (the fannkuch-redux benchmark kernel).
//!
//! For a stack of `n` labeled pancakes the search visits all `n!`
//! permutations and reports two values: `Pfannkuchen(n)`, the maximum
//! number of greedy prefix reversals any permutation needs, and a signed
//! checksum over every permutation's flip count.
//!
//! The index space `[0, n!)` is cut into even-aligned chunks
//! ([`partition`]), each chunk's first permutation is reconstructed
//! directly from its rank ([`perm::PermutationCursor::unrank`]), and the
//! rest of the chunk is walked with an O(1) successor step. Chunks run as
//! independent tasks on a bounded rayon pool and fold their totals into
//! two atomics ([`reduce::SharedResults`]), so the outputs are
//! deterministic under any scheduling.

pub mod flips;
pub mod partition;
pub mod perm;
pub mod reduce;

use std::ops::Range;

use thiserror::Error;

use crate::flips::count_flips;
use crate::partition::partition;
use crate::perm::{factorial_table, PermutationCursor};
use crate::reduce::{LocalResults, SharedResults};

pub use crate::reduce::SearchOutcome;

/// Largest supported stack. Permutation, scratch, and count vectors are
/// fixed arrays of this size, and 16! still fits comfortably in a u64.
pub const MAX_PANCAKES: usize = 16;

/// Default number of chunks to cut the index space into. Far more chunks
/// than workers, so the static queue load-balances without work stealing.
pub const TARGET_CHUNKS: u64 = 720;

/// Cap on worker threads for the default pool.
pub const MAX_WORKERS: usize = 4;

#[derive(Debug, Error)]
pub enum Error {
    /// The one fatal precondition: a stack that would overflow the
    /// fixed-capacity buffers. Rejected before any task is spawned.
    #[error("pancake count must be between 1 and {MAX_PANCAKES}, got {0}")]
    PancakeCountOutOfRange(usize),
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Runs the full search for `pancakes` with the default chunking and
/// worker cap. With `emit_output` set, prints the checksum and the
/// `Pfannkuchen(n) = m` line, exactly as the benchmark expects.
pub fn run(pancakes: usize, emit_output: bool) -> Result<SearchOutcome, Error> {
    let workers = num_cpus::get().min(MAX_WORKERS);
    let outcome = search(pancakes, TARGET_CHUNKS, workers)?;
    if emit_output {
        println!("{}", outcome.checksum);
        println!("Pfannkuchen({}) = {}", pancakes, outcome.max_flips);
    }
    Ok(outcome)
}

/// Runs the search with explicit chunking and worker count. The outcome
/// is independent of both tunables; they only shape the parallelism.
pub fn search(
    pancakes: usize,
    target_chunks: u64,
    workers: usize,
) -> Result<SearchOutcome, Error> {
    if pancakes == 0 || pancakes > MAX_PANCAKES {
        return Err(Error::PancakeCountOutOfRange(pancakes));
    }

    let fact = factorial_table(pancakes);
    let ranges = partition(fact[pancakes], target_chunks);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    let shared = SharedResults::new();
    pool.scope(|scope| {
        for range in ranges {
            let fact = &fact;
            let shared = &shared;
            scope.spawn(move |_| {
                shared.merge(&search_chunk(pancakes, fact, range));
            });
        }
    });

    Ok(shared.snapshot())
}

/// Visits every permutation in `range`: unranks the start, then counts
/// flips and advances, accumulating the chunk's local maximum and
/// sign-matched checksum.
fn search_chunk(
    pancakes: usize,
    fact: &[u64; MAX_PANCAKES + 1],
    range: Range<u64>,
) -> LocalResults {
    let mut cursor = PermutationCursor::unrank(pancakes, fact, range.start);
    let mut local = LocalResults::default();

    let last = range.end - range.start - 1;
    for step in 0..=last {
        local.record(count_flips(cursor.pancakes()), cursor.sign());
        if step < last {
            cursor.advance();
        }
    }
    local
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference results computed by unranking every index separately,
    // bypassing the successor step and the reducer entirely.
    fn serial_reference(pancakes: usize) -> SearchOutcome {
        let fact = factorial_table(pancakes);
        let mut checksum = 0i64;
        let mut max_flips = 0u32;
        for rank in 0..fact[pancakes] {
            let cursor = PermutationCursor::unrank(pancakes, &fact, rank);
            let flips = count_flips(cursor.pancakes());
            max_flips = max_flips.max(flips);
            checksum += if rank % 2 == 0 {
                i64::from(flips)
            } else {
                -i64::from(flips)
            };
        }
        SearchOutcome {
            checksum,
            max_flips,
        }
    }

    #[test]
    fn matches_serial_reference_for_small_stacks() {
        for pancakes in 1..=6 {
            let expected = serial_reference(pancakes);
            let got = search(pancakes, TARGET_CHUNKS, 2).unwrap();
            assert_eq!(got, expected, "mismatch at n = {pancakes}");
        }
    }

    #[test]
    fn single_pancake_is_trivial() {
        let outcome = search(1, TARGET_CHUNKS, 1).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome {
                checksum: 0,
                max_flips: 0
            }
        );
    }

    #[test]
    fn rejects_zero_pancakes() {
        assert!(matches!(run(0, false), Err(Error::PancakeCountOutOfRange(0))));
    }

    #[test]
    fn rejects_oversized_stack() {
        let n = MAX_PANCAKES + 1;
        assert!(matches!(
            run(n, false),
            Err(Error::PancakeCountOutOfRange(v)) if v == n
        ));
    }
}
