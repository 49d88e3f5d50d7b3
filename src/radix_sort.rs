use std::mem;

use crate::{constants::RADIX_BUCKETS, error::SortError};

/// LSD radix sort for variable-length byte strings, no longer than `max_len`.
///
/// Strings are first grouped by length. Then, from the last position to the first, the strings
/// that have a byte at `pos` are redistributed by that byte into [`RADIX_BUCKETS`] buckets. They
/// always form a suffix of `v`, and shorter strings stay in front of them. The result is the
/// byte-wise lexicographic order of `<[u8]>::cmp`, with equal strings in input order.
pub(crate) fn radix_sort<S>(v: &mut [S], max_len: usize) -> Result<(), SortError>
where
    S: AsRef<[u8]> + Default,
{
    if let Some((index, len)) = v
        .iter()
        .map(|s| s.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len > max_len)
    {
        return Err(SortError::TooLong {
            index,
            len,
            max_len,
        });
    }
    if v.len() <= 1 {
        return Ok(());
    }
    // Positions past the longest string hold no bytes, whatever bound the caller gave.
    let longest = v.iter().map(|s| s.as_ref().len()).max().unwrap_or(0);

    let mut by_length: Vec<Vec<S>> = (0..=longest).map(|_| Vec::new()).collect();
    for s in v.iter_mut() {
        let s = mem::take(s);
        let len = s.as_ref().len();
        by_length[len].push(s);
    }
    let counts: Vec<usize> = by_length.iter().map(Vec::len).collect();
    let mut out = 0;
    for s in by_length.iter_mut().flat_map(|words| words.drain(..)) {
        v[out] = s;
        out += 1;
    }

    let mut buckets: Vec<Vec<S>> = (0..RADIX_BUCKETS).map(|_| Vec::new()).collect();
    let mut start = v.len();
    for pos in (0..longest).rev() {
        start -= counts[pos + 1];
        for s in v[start..].iter_mut() {
            let s = mem::take(s);
            let byte = s.as_ref()[pos] as usize;
            buckets[byte].push(s);
        }
        let mut out = start;
        for s in buckets.iter_mut().flat_map(|bucket| bucket.drain(..)) {
            v[out] = s;
            out += 1;
        }
    }
    Ok(())
}
