use crate::{util::is_sorted_by_less, Less};

/// Top-down merge sort. Allocates a single scratch buffer of `v.len()` elements.
///
/// Stable: on ties the merge takes from the left run.
pub(crate) fn merge_sort<T, F>(v: &mut [T], is_less: &F)
where
    T: Clone,
    F: Less<T>,
{
    if v.len() <= 1 {
        return;
    }
    let mut buf = v.to_vec();
    merge_sort_rec(v, &mut buf, is_less);
    debug_assert!(is_sorted_by_less(v, is_less));
}

fn merge_sort_rec<T, F>(v: &mut [T], buf: &mut [T], is_less: &F)
where
    T: Clone,
    F: Less<T>,
{
    let len = v.len();
    if len <= 1 {
        return;
    }
    let mid = len / 2;
    merge_sort_rec(&mut v[..mid], &mut buf[..mid], is_less);
    merge_sort_rec(&mut v[mid..], &mut buf[mid..], is_less);
    merge(v, mid, buf, is_less);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` through `buf`, which has the length of `v`.
fn merge<T, F>(v: &mut [T], mid: usize, buf: &mut [T], is_less: &F)
where
    T: Clone,
    F: Less<T>,
{
    let (mut left, mut right, mut out) = (0, mid, 0);
    while left < mid && right < v.len() {
        if is_less(&v[right], &v[left]) {
            buf[out].clone_from(&v[right]);
            right += 1;
        } else {
            buf[out].clone_from(&v[left]);
            left += 1;
        }
        out += 1;
    }

    // At most one of the runs has anything left.
    let rest = mid - left;
    buf[out..out + rest].clone_from_slice(&v[left..mid]);
    out += rest;
    buf[out..].clone_from_slice(&v[right..]);

    v.clone_from_slice(buf);
}
