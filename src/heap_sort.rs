use crate::{
    util::{debug_assertions::is_max_heap, is_sorted_by_less},
    Less,
};

/// Heap sort over an implicit binary max-heap rooted at index 0.
///
/// Heapify percolates down every internal node from the last one up. Then the maximum is
/// repeatedly swapped to the end of the shrinking heap. Not stable.
pub(crate) fn heap_sort<T, F>(v: &mut [T], is_less: &F)
where
    F: Less<T>,
{
    let len = v.len();
    for i in (0..len / 2).rev() {
        percolate_down(v, i, len, is_less);
    }
    debug_assert!(is_max_heap(v, is_less));

    for end in (1..len).rev() {
        v.swap(0, end);
        percolate_down(v, 0, end, is_less);
    }
    debug_assert!(is_sorted_by_less(v, is_less));
}

/// Moves `v[i]` down the heap `v[..n]` until neither child is greater.
fn percolate_down<T, F>(v: &mut [T], mut i: usize, n: usize, is_less: &F)
where
    F: Less<T>,
{
    loop {
        let mut child = left_child(i);
        if child >= n {
            break;
        }
        if child + 1 < n && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }
        if !is_less(&v[i], &v[child]) {
            break;
        }
        v.swap(i, child);
        i = child;
    }
}

#[inline]
fn left_child(i: usize) -> usize {
    2 * i + 1
}
