use thiserror::Error;

/// Error returned by the sorts that validate their input.
///
/// The comparison sorts are total over `&mut [T]` and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// An element is longer than the `max_len` passed to [`crate::radix_sort`].
    #[error("element {index} has length {len}, which exceeds max_len {max_len}")]
    TooLong {
        index: usize,
        len: usize,
        max_len: usize,
    },
}
