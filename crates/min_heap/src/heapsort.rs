//! In-place heapsort over a [`DynamicArray`], independent of [`crate::MinHeap`].
//!
//! A min-heap is built and successive minima are moved to the back, so the
//! array ends up in non-ascending order (largest element first).

use dynamic_array::DynamicArray;
use log::trace;

use crate::sift::{heapify, sift_down};

pub fn heapsort<T: Ord>(arr: &mut DynamicArray<T>) {
    let len = arr.length();
    trace!("heapsort over {len} elements");
    if len < 2 {
        return;
    }

    build_heap(arr);

    let mut k = len - 1;
    while k > 0 {
        arr.swap(0, k);
        k -= 1;
        heapify_down(arr, 0, k);
    }
}

/// Arranges the whole array into a min-heap in place.
pub fn build_heap<T: Ord>(arr: &mut DynamicArray<T>) {
    heapify(arr);
}

/// Sifts `arr[index]` down within the active region `arr[0..=end]`.
///
/// # Panics
///
/// Panics if `end` is not a valid index of a non-empty `arr`.
pub fn heapify_down<T: Ord>(arr: &mut DynamicArray<T>, index: usize, end: usize) {
    assert!(
        end < arr.length(),
        "heap region end {end} out of range for length {}",
        arr.length()
    );
    sift_down(arr, index, end + 1);
}
