//! Heap-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during heap operations.
///
/// The heap's contract is mostly infallible: index arithmetic, sift-down,
/// build, and sort are total computations. The two fallible points are
/// construction (the backing buffer may not be allocatable) and insertion
/// (the buffer never grows past its fixed capacity).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// Insertion attempted on a heap whose live length already equals
    /// its fixed capacity.
    CapacityExceeded {
        /// The heap's fixed capacity in elements.
        capacity: usize,
    },
    /// The backing buffer for the requested capacity could not be
    /// allocated.
    AllocationFailed {
        /// Number of elements that were requested.
        requested: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "heap capacity exceeded: {capacity} elements")
            }
            Self::AllocationFailed { requested } => {
                write!(
                    f,
                    "failed to allocate heap storage for {requested} elements"
                )
            }
        }
    }
}

impl Error for HeapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_capacity_exceeded() {
        let err = HeapError::CapacityExceeded { capacity: 8 };
        assert_eq!(err.to_string(), "heap capacity exceeded: 8 elements");
    }

    #[test]
    fn display_allocation_failed() {
        let err = HeapError::AllocationFailed { requested: 1024 };
        assert_eq!(
            err.to_string(),
            "failed to allocate heap storage for 1024 elements"
        );
    }

    #[test]
    fn implements_std_error() {
        let err: Box<dyn Error> = Box::new(HeapError::CapacityExceeded { capacity: 0 });
        assert!(err.source().is_none());
    }
}
