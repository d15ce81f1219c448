//! Lock-free reduction of per-task results into the shared totals.

use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

/// The two values the whole search produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Signed sum of flip counts, sign alternating with enumeration parity.
    pub checksum: i64,
    /// Pfannkuchen(n): the maximum flip count over all permutations.
    pub max_flips: u32,
}

/// Running totals for one task's chunk. Task-local, folded into
/// [`SharedResults`] exactly once when the chunk is done.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalResults {
    pub max_flips: u32,
    pub checksum: i64,
}

impl LocalResults {
    pub fn record(&mut self, flips: u32, sign: bool) {
        if flips > self.max_flips {
            self.max_flips = flips;
        }
        self.checksum += if sign {
            i64::from(flips)
        } else {
            -i64::from(flips)
        };
    }
}

/// Reduction state shared by all tasks. Built by the driver before the
/// first task is spawned; read back only after the join.
#[derive(Debug, Default)]
pub struct SharedResults {
    max_flips: AtomicU32,
    checksum: AtomicI64,
}

impl SharedResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one task's totals in. The checksum add is order-independent;
    /// the maximum uses an optimistic retry loop that only ever proposes
    /// strictly greater values, so it terminates and converges to the true
    /// maximum under any interleaving.
    pub fn merge(&self, local: &LocalResults) {
        self.checksum.fetch_add(local.checksum, Ordering::Release);

        let mut seen = self.max_flips.load(Ordering::Acquire);
        while local.max_flips > seen {
            match self.max_flips.compare_exchange_weak(
                seen,
                local.max_flips,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break,
                Err(current) => seen = current,
            }
        }
    }

    pub fn snapshot(&self) -> SearchOutcome {
        SearchOutcome {
            checksum: self.checksum.load(Ordering::Acquire),
            max_flips: self.max_flips.load(Ordering::Acquire),
        }
    }
}
