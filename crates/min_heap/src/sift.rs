use dynamic_array::DynamicArray;

#[inline]
pub(crate) fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Moves `data[root]` toward the leaves of the min-heap occupying `data[..end]`.
///
/// The right child only replaces an already chosen left child when it is strictly
/// smaller than that left child, so equal children resolve to the left.
#[inline]
pub(crate) fn sift_down<T: Ord>(data: &mut DynamicArray<T>, mut root: usize, end: usize) {
    debug_assert!(end <= data.length());
    loop {
        let left = root * 2 + 1;
        let right = left + 1;
        let mut smallest = root;

        if left < end && data[left] < data[smallest] {
            smallest = left;
        }
        if right < end && data[right] < data[smallest] {
            smallest = right;
        }

        if smallest == root {
            break;
        }

        data.swap(root, smallest);
        root = smallest;
    }
}

/// Moves `data[node]` toward the root while its parent is strictly greater.
#[inline]
pub(crate) fn sift_up<T: Ord>(data: &mut DynamicArray<T>, mut node: usize) {
    while node > 0 {
        let p = parent(node);
        if data[p] <= data[node] {
            break;
        }
        data.swap(p, node);
        node = p;
    }
}

/// Linear-time heap construction over the whole array.
pub(crate) fn heapify<T: Ord>(data: &mut DynamicArray<T>) {
    let len = data.length();
    for i in (0..len / 2).rev() {
        sift_down(data, i, len);
    }
}

#[cfg(test)]
pub(crate) fn is_min_heap<T: Ord>(data: &DynamicArray<T>) -> bool {
    (1..data.length()).all(|i| data[parent(i)] <= data[i])
}

/// Ordered by key only; the tag tells equal keys apart.
#[cfg(test)]
#[derive(Clone, Copy, Debug)]
pub(crate) struct Tagged(pub u8, pub char);

#[cfg(test)]
impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[cfg(test)]
impl Eq for Tagged {}

#[cfg(test)]
impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(test)]
pub(crate) fn tags(data: &DynamicArray<Tagged>) -> String {
    data.iter().map(|t| t.1).collect()
}
