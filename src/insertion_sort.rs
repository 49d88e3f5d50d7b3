use crate::{util::is_sorted_by_less, Less};

/// Sorts a slice using insertion sort, which is *O*(*n*^2) worst-case and *O*(*n*) on sorted input.
///
/// The prefix `v[..i]` is kept sorted. Each following element is the key: every prefix element
/// strictly greater than it moves one place right, and the key drops into the gap. Equal
/// elements never pass each other, so the sort is stable.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &F)
where
    F: Less<T>,
{
    for i in 1..v.len() {
        shift_tail(&mut v[..=i], is_less);
    }
    debug_assert!(is_sorted_by_less(v, is_less));
}

/// Shifts the last element to the left until it encounters a smaller or equal element.
fn shift_tail<T, F>(v: &mut [T], is_less: &F)
where
    F: Less<T>,
{
    let key = v.len() - 1;
    let mut hole = key;
    while hole > 0 && is_less(&v[key], &v[hole - 1]) {
        hole -= 1;
    }
    // Moves the key into the hole and every element in between one place right.
    v[hole..].rotate_right(1);
}
