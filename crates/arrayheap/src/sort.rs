//! In-place heap sort over the live prefix.
//!
//! Both sorts follow the classic selection scheme: build a heap, then
//! repeatedly swap the root with the last live element and shrink the
//! live length before re-sifting the root. The shrink is what excludes
//! the extracted element from further sifting, which is also why a
//! finished sort leaves the heap with a live length of zero — the sorted
//! output survives in the backing buffer, readable through
//! [`ArrayHeap::storage`].

use crate::heap::ArrayHeap;

impl ArrayHeap {
    /// Sort the live prefix ascending, in place.
    ///
    /// Builds a max-heap, then extracts the maximum to the end of the
    /// shrinking live range until none remains. O(len log len).
    ///
    /// Side effect: drains [`len`](ArrayHeap::len) to 0. Callers that
    /// need the sorted extent save `len()` beforehand and read the
    /// result through [`storage`](ArrayHeap::storage):
    ///
    /// ```
    /// use arrayheap::ArrayHeap;
    ///
    /// let mut heap = ArrayHeap::new(4).unwrap();
    /// for v in [3, 1, 2] {
    ///     heap.push(v).unwrap();
    /// }
    /// let n = heap.len();
    /// heap.sort_ascending();
    /// assert_eq!(&heap.storage()[..n], &[1, 2, 3]);
    /// ```
    pub fn sort_ascending(&mut self) {
        self.build_max();
        for i in (0..self.len).rev() {
            self.swap(0, i);
            self.len -= 1;
            self.sift_down_max(0);
        }
    }

    /// Sort the live prefix descending, in place.
    ///
    /// Same extraction loop as [`sort_ascending`](ArrayHeap::sort_ascending)
    /// over a min-heap, with the same length-draining side effect.
    pub fn sort_descending(&mut self) {
        self.build_min();
        for i in (0..self.len).rev() {
            self.swap(0, i);
            self.len -= 1;
            self.sift_down_min(0);
        }
    }

    /// Consume the heap and return its live elements sorted ascending.
    ///
    /// Convenience wrapper over [`sort_ascending`](ArrayHeap::sort_ascending)
    /// for callers that want the sorted values without tracking the
    /// drained length themselves.
    pub fn into_sorted_vec(mut self) -> Vec<i32> {
        let n = self.len;
        self.sort_ascending();
        let mut values = Vec::from(self.storage);
        values.truncate(n);
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn heap_from(values: &[i32]) -> ArrayHeap {
        let mut heap = ArrayHeap::new(values.len()).unwrap();
        for &v in values {
            heap.push(v).unwrap();
        }
        heap
    }

    /// Run a draining sort and return the sorted extent.
    fn sorted_ascending(values: &[i32]) -> Vec<i32> {
        let mut heap = heap_from(values);
        heap.sort_ascending();
        assert_eq!(heap.len(), 0);
        heap.storage()[..values.len()].to_vec()
    }

    fn sorted_descending(values: &[i32]) -> Vec<i32> {
        let mut heap = heap_from(values);
        heap.sort_descending();
        assert_eq!(heap.len(), 0);
        heap.storage()[..values.len()].to_vec()
    }

    #[test]
    fn ascending_concrete_scenario() {
        assert_eq!(sorted_ascending(&[4, 10, 3, 5, 1]), vec![1, 3, 4, 5, 10]);
    }

    #[test]
    fn descending_concrete_scenario() {
        assert_eq!(sorted_descending(&[4, 10, 3, 5, 1]), vec![10, 5, 4, 3, 1]);
    }

    #[test]
    fn sort_drains_the_live_length() {
        let mut heap = heap_from(&[7, 7, 7]);
        heap.sort_ascending();
        assert_eq!(heap.len(), 0);
        assert!(heap.is_empty());
        assert_eq!(heap.root(), None);
    }

    #[test]
    fn sorting_an_empty_extent_is_a_no_op() {
        let mut heap = ArrayHeap::new(0).unwrap();
        heap.sort_ascending();
        heap.sort_descending();
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn sorting_an_empty_extent_with_spare_capacity() {
        let mut heap = ArrayHeap::new(5).unwrap();
        heap.sort_ascending();
        assert_eq!(heap.len(), 0);
        assert!(heap.storage().iter().all(|&v| v == 0));
    }

    #[test]
    fn single_element_sorts_to_itself() {
        assert_eq!(sorted_ascending(&[9]), vec![9]);
        assert_eq!(sorted_descending(&[9]), vec![9]);
    }

    #[test]
    fn already_ascending_input_is_unchanged() {
        assert_eq!(sorted_ascending(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(sorted_ascending(&[5, 1, 5, 1]), vec![1, 1, 5, 5]);
    }

    #[test]
    fn extremes_sort_without_overflow() {
        assert_eq!(
            sorted_ascending(&[i32::MAX, 0, i32::MIN]),
            vec![i32::MIN, 0, i32::MAX]
        );
    }

    #[test]
    fn into_sorted_vec_returns_the_live_extent() {
        let mut heap = ArrayHeap::new(8).unwrap();
        for v in [4, 10, 3] {
            heap.push(v).unwrap();
        }
        assert_eq!(heap.into_sorted_vec(), vec![3, 4, 10]);
    }

    #[test]
    fn into_sorted_vec_of_empty_heap_is_empty() {
        let heap = ArrayHeap::new(3).unwrap();
        assert!(heap.into_sorted_vec().is_empty());
    }

    proptest! {
        #[test]
        fn ascending_matches_std_sort(values in vec(any::<i32>(), 0..64)) {
            let mut expected = values.clone();
            expected.sort_unstable();
            prop_assert_eq!(sorted_ascending(&values), expected);
        }

        #[test]
        fn descending_matches_reversed_std_sort(values in vec(any::<i32>(), 0..64)) {
            let mut expected = values.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(sorted_descending(&values), expected);
        }

        #[test]
        fn ascending_reversed_equals_descending(values in vec(any::<i32>(), 0..64)) {
            let mut reversed = sorted_ascending(&values);
            reversed.reverse();
            prop_assert_eq!(reversed, sorted_descending(&values));
        }

        #[test]
        fn sorting_twice_is_value_stable(values in vec(any::<i32>(), 0..32)) {
            let once = sorted_ascending(&values);
            let twice = sorted_ascending(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
