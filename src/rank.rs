//! Rank (degree) type and the bounds consolidation relies on.
//!
//! # Why u8?
//!
//! A tree whose root has rank `r` holds at least `F(r + 2)` nodes, where `F`
//! is the Fibonacci sequence. Rank therefore grows like `log_φ(n)`, which
//! stays below 100 even for `n = 2^64`. A `u8` keeps the node record small and
//! still leaves plenty of headroom.
//!
//! # Runtime Checks
//!
//! [`increment`] panics on overflow. Reaching it would mean the structure is
//! corrupt, since valid operations cannot produce such a rank.

/// Number of direct children of a node.
pub type Rank = u8;

/// Maximum representable rank.
pub const MAX_RANK: Rank = u8::MAX;

/// Increment a rank, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`.
///
/// # Example
///
/// ```rust
/// use fibheap::rank::increment;
///
/// assert_eq!(increment(5), 6);
/// ```
#[inline]
pub fn increment(rank: Rank) -> Rank {
    rank.checked_add(1)
        .expect("rank overflow: a rank this large implies a corrupt forest")
}

/// Decrement a rank, stopping at zero.
///
/// ```rust
/// use fibheap::rank::decrement;
///
/// assert_eq!(decrement(5), 4);
/// assert_eq!(decrement(0), 0);
/// ```
#[inline]
pub fn decrement(rank: Rank) -> Rank {
    rank.saturating_sub(1)
}

/// Number of rank buckets consolidation starts with for a heap of `size` nodes.
///
/// `2 * ceil(log2(size)) + 2` exceeds the Fibonacci rank bound for every
/// size, so the bucket array never has to grow during a pass.
pub fn bucket_capacity(size: usize) -> usize {
    2 * ceil_log2(size) + 2
}

fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}
