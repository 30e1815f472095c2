use std::fmt;

use dynamic_array::DynamicArray;
use log::debug;

use crate::Error;
use crate::sift::{heapify, sift_down, sift_up};

/// Binary min-heap stored level-order in a [`DynamicArray`].
///
/// For every `i > 0`, `storage[(i - 1) / 2] <= storage[i]`.
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    storage: DynamicArray<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self {
            storage: DynamicArray::new(),
        }
    }
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: T) {
        self.storage.append(value);
        let last = self.storage.length() - 1;
        sift_up(&mut self.storage, last);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.storage.length()
    }

    pub fn get_min(&self) -> Result<&T, Error> {
        self.storage.get(0).map_err(|_| Error::EmptyHeap)
    }

    pub fn remove_min(&mut self) -> Result<T, Error> {
        let last = self.storage.pop().map_err(|_| Error::EmptyHeap)?;
        if self.storage.is_empty() {
            return Ok(last);
        }

        let min = std::mem::replace(&mut self.storage[0], last);
        let len = self.storage.length();
        sift_down(&mut self.storage, 0, len);
        Ok(min)
    }

    /// Replaces the contents with a copy of `source` arranged into heap order.
    ///
    /// The heap never shares storage with `source`; later changes to `source`
    /// are not observed. O(N).
    pub fn build_heap(&mut self, source: &DynamicArray<T>)
    where
        T: Clone,
    {
        debug!("rebuilding heap from {} elements", source.length());
        let mut storage = DynamicArray::with_capacity(source.length());
        storage.extend(source.iter().cloned());
        heapify(&mut storage);
        self.storage = storage;
    }

    pub fn clear(&mut self) {
        debug!("clearing heap of {} elements", self.storage.length());
        self.storage = DynamicArray::new();
    }
}

impl<T> MinHeap<T> {
    /// Level-order view of the underlying storage.
    pub fn storage(&self) -> &DynamicArray<T> {
        &self.storage
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    /// Inserts every item with [`MinHeap::add`], in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Display for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HEAP {:?}", self.storage.as_slice())
    }
}
