//! Splits the permutation index space into the per-task chunks.

use std::ops::Range;

/// Divides `[0, total)` into contiguous near-equal ranges, at most
/// `target_chunks` of them.
///
/// The chunk size is rounded up to the next even number: the successor
/// step advances in matched parity pairs, so every chunk must start at an
/// even index. Only the final range, clipped to `total`, may have odd
/// length.
pub fn partition(total: u64, target_chunks: u64) -> Vec<Range<u64>> {
    debug_assert!(target_chunks > 0);
    let mut chunk_size = (total + target_chunks - 1) / target_chunks;
    chunk_size += chunk_size % 2;

    let task_count = (total + chunk_size - 1) / chunk_size;
    let mut ranges = Vec::with_capacity(task_count as usize);
    let mut start = 0;
    while start < total {
        let end = (start + chunk_size).min(total);
        ranges.push(start..end);
        start = end;
    }
    ranges
}
