/// Ranges of at most this many elements past the first are left to insertion sort by quick sort.
pub const QUICKSORT_CUTOFF: usize = 10;

/// One bucket per possible byte value.
pub const RADIX_BUCKETS: usize = 256;
