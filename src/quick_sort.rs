use crate::{
    constants::QUICKSORT_CUTOFF,
    insertion_sort::insertion_sort,
    util::{debug_assertions::is_partitioned_at, is_sorted_by_less},
    Less,
};

/// Quick sort with a median-of-three pivot. Small ranges are finished with insertion sort.
///
/// Recurses into the smaller side and loops on the larger one, so the stack depth stays
/// logarithmic. Not stable.
pub(crate) fn quick_sort<T, F>(v: &mut [T], is_less: &F)
where
    F: Less<T>,
{
    quick_sort_rec(v, is_less);
    debug_assert!(is_sorted_by_less(v, is_less));
}

fn quick_sort_rec<T, F>(mut v: &mut [T], is_less: &F)
where
    F: Less<T>,
{
    while v.len() > QUICKSORT_CUTOFF + 1 {
        let mid = partition(v, is_less);
        debug_assert!(is_partitioned_at(v, mid, is_less));

        let (left, rest) = v.split_at_mut(mid);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort_rec(left, is_less);
            v = right;
        } else {
            quick_sort_rec(right, is_less);
            v = left;
        }
    }
    insertion_sort(v, is_less);
}

/// Partitions `v` around its median-of-three and returns the final index of the pivot.
///
/// Requires `v.len() >= 3`. After [`median_of_three`] the first element is no greater and the
/// last element no smaller than the pivot, so both scans stop without bounds checks of their own.
fn partition<T, F>(v: &mut [T], is_less: &F) -> usize
where
    F: Less<T>,
{
    let pivot = median_of_three(v, is_less);
    let mut i = 0;
    let mut j = pivot;
    loop {
        i += 1;
        while is_less(&v[i], &v[pivot]) {
            i += 1;
        }
        j -= 1;
        while is_less(&v[pivot], &v[j]) {
            j -= 1;
        }
        if i < j {
            v.swap(i, j);
        } else {
            break;
        }
    }
    v.swap(i, pivot);
    i
}

/// Orders the first, middle and last elements, then parks the median at `len - 2`.
fn median_of_three<T, F>(v: &mut [T], is_less: &F) -> usize
where
    F: Less<T>,
{
    let right = v.len() - 1;
    let center = right / 2;
    if is_less(&v[center], &v[0]) {
        v.swap(0, center);
    }
    if is_less(&v[right], &v[0]) {
        v.swap(0, right);
    }
    if is_less(&v[right], &v[center]) {
        v.swap(center, right);
    }
    v.swap(center, right - 1);
    right - 1
}
