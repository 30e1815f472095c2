mod heap;
pub mod heapsort;
mod sift;

use thiserror::Error;

pub use dynamic_array::DynamicArray;
pub use heap::MinHeap;
pub use heapsort::heapsort;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("heap is empty")]
    EmptyHeap,
}
