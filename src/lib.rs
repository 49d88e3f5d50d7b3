use std::{cmp::Ordering, fmt};

mod constants;
mod error;
mod heap_sort;
mod insertion_sort;
mod merge_sort;
mod quick_sort;
mod radix_sort;
mod shell_sort;
mod util;

pub use error::SortError;

pub(crate) trait Less<T>: Fn(&T, &T) -> bool {}
impl<T, F: Fn(&T, &T) -> bool> Less<T> for F {}

/// Sorts `v` in place in ascending order with insertion sort.
///
/// Stable. *O*(*n*^2) comparisons in the worst case, *O*(*n*) on sorted input, no allocation.
///
/// ```
/// let mut v = [5, 3, 5, 1];
/// textbook_sorts::insertion_sort(&mut v);
/// assert_eq!(v, [1, 3, 5, 5]);
/// ```
#[inline]
pub fn insertion_sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort::insertion_sort(v, &T::lt);
}

/// Stable insertion sort ordered by `compare`.
#[inline]
pub fn insertion_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    insertion_sort::insertion_sort(v, &|a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Stable insertion sort ordered by the key `f` extracts from each element.
#[inline]
pub fn insertion_sort_by_key<T, K, F>(v: &mut [T], f: F)
where
    F: Fn(&T) -> K,
    K: Ord,
{
    insertion_sort::insertion_sort(v, &|a: &T, b: &T| f(a).lt(&f(b)));
}

/// Sorts `v` in place with Shell sort, using the gaps `n/2, n/4, ..., 1`. Not stable.
#[inline]
pub fn shell_sort<T>(v: &mut [T])
where
    T: Ord,
{
    shell_sort::shell_sort(v, &T::lt);
}

/// Sorts `v` in place with heap sort. Not stable.
#[inline]
pub fn heap_sort<T>(v: &mut [T])
where
    T: Ord,
{
    heap_sort::heap_sort(v, &T::lt);
}

/// Sorts `v` with a stable top-down merge sort, using one scratch buffer of `v.len()` clones.
#[inline]
pub fn merge_sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    merge_sort::merge_sort(v, &T::lt);
}

/// Sorts `v` in place with median-of-three quick sort. Not stable.
#[inline]
pub fn quick_sort<T>(v: &mut [T])
where
    T: Ord,
{
    quick_sort::quick_sort(v, &T::lt);
}

/// Sorts byte strings of at most `max_len` bytes into lexicographic order with LSD radix sort.
///
/// Fails with [`SortError::TooLong`] before touching `v` if any element is longer than `max_len`.
///
/// ```
/// let mut v = ["oi", "f", "aa", "adwcge"];
/// textbook_sorts::radix_sort(&mut v, 10).unwrap();
/// assert_eq!(v, ["aa", "adwcge", "f", "oi"]);
/// ```
#[inline]
pub fn radix_sort<S>(v: &mut [S], max_len: usize) -> Result<(), SortError>
where
    S: AsRef<[u8]> + Default,
{
    radix_sort::radix_sort(v, max_len)
}

/// The comparison sorts of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Shell,
    Heap,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn sort<T>(self, v: &mut [T])
    where
        T: Ord + Clone,
    {
        match self {
            Algorithm::Insertion => insertion_sort(v),
            Algorithm::Shell => shell_sort(v),
            Algorithm::Heap => heap_sort(v),
            Algorithm::Merge => merge_sort(v),
            Algorithm::Quick => quick_sort(v),
        }
    }

    /// Whether equal elements keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Insertion | Algorithm::Merge)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Shell => "shell",
            Algorithm::Heap => "heap",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
