//! Permutation enumeration: factorial table, direct unranking, and the
//! successor step.
//!
//! The enumeration order is the one induced by the factorial-number-system
//! decomposition in [`PermutationCursor::unrank`]: the digit at position `i`
//! is the left-rotation applied to the first `i + 1` slots. Consecutive
//! permutations in this order differ by a single transposition, so a simple
//! alternating sign flag tracks permutation parity.

use crate::MAX_PANCAKES;

/// Factorials 0! through n!, in fixed storage so the table can live on the
/// stack and be shared by reference into every task.
pub fn factorial_table(n: usize) -> [u64; MAX_PANCAKES + 1] {
    let mut fact = [1u64; MAX_PANCAKES + 1];
    for i in 1..=n {
        fact[i] = fact[i - 1] * i as u64;
    }
    fact
}

/// A position in the canonical enumeration of permutations of `[0, n)`.
///
/// Holds the permutation itself, the mixed-radix count vector driving the
/// successor step (digit `k` wraps at `k + 1`), and the parity sign of the
/// current rank. All storage is fixed-capacity; a cursor is owned by exactly
/// one task and never shared.
pub struct PermutationCursor {
    n: usize,
    p: [usize; MAX_PANCAKES],
    count: [usize; MAX_PANCAKES],
    sign: bool,
}

impl PermutationCursor {
    /// Builds the cursor for the `rank`-th permutation directly, without
    /// generating any of the preceding ones.
    ///
    /// Treats `rank` as a factorial-number-system value: digit `i` (from
    /// `n - 1` down to 1) is `rank / i!` of the remainder so far, and the
    /// first `i + 1` slots of the permutation are rotated left by that
    /// digit. This is what makes per-chunk starts O(n^2) instead of O(rank).
    pub fn unrank(n: usize, fact: &[u64; MAX_PANCAKES + 1], rank: u64) -> Self {
        let mut p = [0usize; MAX_PANCAKES];
        let mut count = [0usize; MAX_PANCAKES];
        let mut scratch = [0usize; MAX_PANCAKES];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = i;
        }

        let mut idx = rank;
        for i in (1..n).rev() {
            let d = (idx / fact[i]) as usize;
            idx %= fact[i];
            count[i] = d;

            scratch.copy_from_slice(&p);
            for j in 0..=i {
                p[j] = if j + d <= i {
                    scratch[j + d]
                } else {
                    scratch[j + d - i - 1]
                };
            }
        }

        PermutationCursor {
            n,
            p,
            count,
            sign: rank % 2 == 0,
        }
    }

    /// Steps to the next permutation in the enumeration order.
    ///
    /// On a positive-sign step the first two elements swap; on a
    /// negative-sign step elements 1 and 2 swap and the carry propagates
    /// through the count vector, rotating ever-longer prefixes left by one.
    /// Must not be called on the final permutation of the order.
    pub fn advance(&mut self) {
        if self.sign {
            self.p.swap(0, 1);
        } else {
            let mut first = self.p[0];
            self.p.swap(1, 2);
            let mut k = 2;
            loop {
                self.count[k] += 1;
                if self.count[k] <= k {
                    break;
                }
                self.count[k] = 0;
                for j in 0..=k {
                    self.p[j] = self.p[j + 1];
                }
                self.p[k + 1] = first;
                first = self.p[0];
                k += 1;
            }
        }
        self.sign = !self.sign;
    }

    /// The current pancake stack, top of the stack first.
    pub fn pancakes(&self) -> &[usize] {
        &self.p[..self.n]
    }

    /// Parity of the current rank: `true` at even ranks. Drives the
    /// checksum sign.
    pub fn sign(&self) -> bool {
        self.sign
    }
}
