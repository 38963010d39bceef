//! Deterministic input generators for the arrayheap benchmarks.
//!
//! All generators are seeded so runs are reproducible across machines
//! and benchmark invocations.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use arrayheap::ArrayHeap;
use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `len` pseudo-random values from a fixed seed.
pub fn random_input(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random()).collect()
}

/// Generate `len` values already in ascending order.
///
/// Worst case for `build_max`: every sift-down walks to a leaf.
pub fn ascending_input(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// Build a heap preloaded with the given values.
///
/// # Panics
///
/// Panics if the allocation fails; benchmark inputs are small enough
/// that this only happens when something is already badly wrong.
pub fn preloaded_heap(values: &[i32]) -> ArrayHeap {
    let mut heap = ArrayHeap::new(values.len()).expect("benchmark input allocation");
    for &v in values {
        heap.push(v).expect("benchmark input within capacity");
    }
    heap
}
