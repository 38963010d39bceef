//! Fixed-capacity array-backed binary heap over `i32` values.
//!
//! [`ArrayHeap`] wraps a contiguous buffer allocated once at construction,
//! plus a logical length. The design is deliberately explicit:
//!
//! - [`ArrayHeap::push`] appends without maintaining any order.
//! - Heap order exists only after an explicit [`ArrayHeap::build_max`] or
//!   [`ArrayHeap::build_min`]; nothing is rebuilt automatically.
//! - [`ArrayHeap::sort_ascending`] and [`ArrayHeap::sort_descending`] run
//!   an in-place heap sort over the live prefix, draining the logical
//!   length to zero and leaving the sorted values in the backing buffer.
//!
//! The container carries no mode flag. Whether max order, min order, or
//! no particular order currently holds is determined solely by which
//! operation ran last; callers that care must track it themselves.
//!
//! # Example
//!
//! ```
//! use arrayheap::ArrayHeap;
//!
//! let mut heap = ArrayHeap::new(5).unwrap();
//! for v in [4, 10, 3, 5, 1] {
//!     heap.push(v).unwrap();
//! }
//!
//! heap.build_max();
//! assert_eq!(heap.root(), Some(10));
//!
//! let n = heap.len();
//! heap.sort_ascending();
//! assert_eq!(heap.len(), 0); // sorts drain the logical length
//! assert_eq!(&heap.storage()[..n], &[1, 3, 4, 5, 10]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod heap;
pub mod index;
mod sort;

pub use error::HeapError;
pub use heap::ArrayHeap;
