use std::fmt;
use std::ops::{Index, IndexMut};

use log::trace;
use thiserror::Error;

pub const INITIAL_CAPACITY: usize = 4;
pub const GROWTH_FACTOR: usize = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("container is empty")]
    EmptyContainer,
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange { index: usize, length: usize },
}

/// Growable, indexable sequence.
///
/// - The logical capacity starts at [`INITIAL_CAPACITY`] and is multiplied by
///   [`GROWTH_FACTOR`] whenever an append finds the array full.
/// - Checked accessors (`get`, `get_mut`, `set`, `pop`) return [`Error`] and leave
///   the array untouched on failure.
/// - `Index`/`IndexMut` and `swap` panic on out-of-range indices like slices do.
#[derive(Clone)]
pub struct DynamicArray<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(INITIAL_CAPACITY);
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn append(&mut self, value: T) {
        if self.data.len() == self.capacity {
            self.grow();
        }
        self.data.push(value);
    }

    pub fn pop(&mut self) -> Result<T, Error> {
        self.data.pop().ok_or(Error::EmptyContainer)
    }

    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let length = self.data.len();
        self.data
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, length })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let length = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, length })
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<(), Error> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of range.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity * GROWTH_FACTOR;
        trace!("dynamic array grows from {} to {new_capacity}", self.capacity);
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DYN_ARR Size/Cap: {}/{} {:?}",
            self.length(),
            self.capacity,
            self.data
        )
    }
}
