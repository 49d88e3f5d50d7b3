use crate::Less;

/// Every parent in `v` is at least as large as both of its children.
pub(crate) fn is_max_heap<T, F>(v: &[T], is_less: &F) -> bool
where
    F: Less<T>,
{
    (1..v.len()).all(|child| !is_less(&v[(child - 1) / 2], &v[child]))
}

/// Quick sort leaves everything left of the pivot no greater, and everything right of it no
/// smaller.
pub(crate) fn is_partitioned_at<T, F>(v: &[T], pivot: usize, is_less: &F) -> bool
where
    F: Less<T>,
{
    let (left, rest) = v.split_at(pivot);
    let Some((pivot, right)) = rest.split_first() else {
        return false;
    };
    left.iter().all(|x| !is_less(pivot, x)) && right.iter().all(|x| !is_less(x, pivot))
}
