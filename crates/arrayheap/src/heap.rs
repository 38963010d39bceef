//! The fixed-capacity heap container and its order-maintenance routines.

use crate::error::HeapError;
use crate::index::{left_of, right_of};

/// A binary heap stored in a fixed-capacity contiguous buffer of `i32`.
///
/// The buffer is allocated once at construction and never grows. Indices
/// `[0, len)` hold live elements; the tail `[len, capacity)` is scratch
/// space whose contents carry no meaning (it is zero-initialised at
/// construction, and draining sorts leave their output there).
///
/// [`push`](ArrayHeap::push) is append-only and establishes no order;
/// call [`build_max`](ArrayHeap::build_max) or
/// [`build_min`](ArrayHeap::build_min) explicitly once all elements are
/// in. There is no mode flag: after `build_max` the max-heap property
/// holds, after `build_min` the min-heap property holds, and after a raw
/// sequence of pushes neither may hold.
///
/// # Examples
///
/// ```
/// use arrayheap::ArrayHeap;
///
/// let mut heap = ArrayHeap::new(3).unwrap();
/// heap.push(2).unwrap();
/// heap.push(7).unwrap();
/// heap.push(5).unwrap();
/// heap.build_max();
/// assert_eq!(heap.root(), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct ArrayHeap {
    /// Backing buffer; its length is the heap's fixed capacity.
    pub(crate) storage: Box<[i32]>,
    /// Count of live elements in `storage[0..len]`.
    pub(crate) len: usize,
}

impl ArrayHeap {
    /// Create a heap with room for `capacity` elements and zero live
    /// length.
    ///
    /// The backing buffer is reserved fallibly: if the allocator cannot
    /// satisfy the request this returns
    /// `Err(HeapError::AllocationFailed)` instead of aborting.
    pub fn new(capacity: usize) -> Result<Self, HeapError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| HeapError::AllocationFailed {
                requested: capacity,
            })?;
        buf.resize(capacity, 0);
        Ok(Self {
            storage: buf.into_boxed_slice(),
            len: 0,
        })
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the heap holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fixed capacity of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// The live prefix `storage[0..len]`.
    pub fn as_slice(&self) -> &[i32] {
        &self.storage[..self.len]
    }

    /// The entire backing buffer, including slots beyond the live
    /// length.
    ///
    /// Slots at or past [`len`](ArrayHeap::len) hold no live element.
    /// Draining sorts leave their result here: after
    /// [`sort_ascending`](ArrayHeap::sort_ascending) on a heap of `n`
    /// live elements, `storage()[..n]` is the sorted output even though
    /// `len()` has dropped to 0.
    pub fn storage(&self) -> &[i32] {
        &self.storage
    }

    /// Append `value` at the end of the live prefix.
    ///
    /// Establishes no heap order; after a batch of pushes, call
    /// [`build_max`](ArrayHeap::build_max) or
    /// [`build_min`](ArrayHeap::build_min) before relying on
    /// [`root`](ArrayHeap::root). Returns
    /// `Err(HeapError::CapacityExceeded)` when the heap is full.
    pub fn push(&mut self, value: i32) -> Result<(), HeapError> {
        if self.len == self.storage.len() {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.storage[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// The element at the root of the tree, or `None` if the heap is
    /// empty.
    ///
    /// Which extreme this is (maximum, minimum, or nothing in
    /// particular) depends on which build operation ran last.
    pub fn root(&self) -> Option<i32> {
        self.as_slice().first().copied()
    }

    /// Exchange the live elements at positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= len()`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.storage[..self.len].swap(i, j);
    }

    /// Restore the max-heap property at `index`, assuming both child
    /// subtrees already satisfy it.
    ///
    /// Picks the largest of the node and its in-range children; if a
    /// child wins, swaps it up and recurses into the vacated position.
    /// O(log len). Positions at or beyond the live length are a no-op,
    /// so sifting an empty heap is safe.
    pub fn sift_down_max(&mut self, index: usize) {
        let left = left_of(index);
        let right = right_of(index);
        let mut largest = index;

        if left < self.len && self.storage[left] > self.storage[largest] {
            largest = left;
        }
        if right < self.len && self.storage[right] > self.storage[largest] {
            largest = right;
        }

        if largest != index {
            self.swap(index, largest);
            self.sift_down_max(largest);
        }
    }

    /// Restore the min-heap property at `index`, assuming both child
    /// subtrees already satisfy it.
    ///
    /// Mirror of [`sift_down_max`](ArrayHeap::sift_down_max) with one
    /// deliberate wrinkle: the left child is compared against the value
    /// at `index`, while the right child is compared against the running
    /// smallest. Both phrasings reach the same fixpoint, and the exact
    /// comparison order is part of this heap's behavioral contract.
    pub fn sift_down_min(&mut self, index: usize) {
        let left = left_of(index);
        let right = right_of(index);
        let mut smallest = index;

        if left < self.len && self.storage[left] < self.storage[index] {
            smallest = left;
        }
        if right < self.len && self.storage[right] < self.storage[smallest] {
            smallest = right;
        }

        if smallest != index {
            self.swap(index, smallest);
            self.sift_down_min(smallest);
        }
    }

    /// Establish the max-heap property over the live prefix.
    ///
    /// Sifts down every position from `len / 2` to the root inclusive.
    /// The bound derives from the live length, never the capacity, so
    /// unused tail slots are never touched. O(len).
    pub fn build_max(&mut self) {
        for i in (0..=self.len / 2).rev() {
            self.sift_down_max(i);
        }
    }

    /// Establish the min-heap property over the live prefix.
    ///
    /// Counterpart of [`build_max`](ArrayHeap::build_max). O(len).
    pub fn build_min(&mut self) {
        for i in (0..=self.len / 2).rev() {
            self.sift_down_min(i);
        }
    }
}
