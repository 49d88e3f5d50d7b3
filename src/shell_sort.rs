use crate::{util::is_sorted_by_less, Less};

/// Shell sort with Shell's original gaps `n/2, n/4, ..., 1`.
///
/// Each pass is an insertion sort over the elements `gap` apart. The last pass has gap 1 and
/// finishes on nearly sorted input. Not stable.
pub(crate) fn shell_sort<T, F>(v: &mut [T], is_less: &F)
where
    F: Less<T>,
{
    let mut gap = v.len() / 2;
    while gap > 0 {
        for i in gap..v.len() {
            let mut j = i;
            while j >= gap && is_less(&v[j], &v[j - gap]) {
                v.swap(j, j - gap);
                j -= gap;
            }
        }
        gap /= 2;
    }
    debug_assert!(is_sorted_by_less(v, is_less));
}
