//! Recursive binary search over a sorted range of a slice.

use std::cmp::Ordering;

/// Searches `v[lo..hi]` for `value` and returns the position of a matching element.
///
/// `v[lo..hi]` must be sorted in ascending order. If it is not, the result is unspecified. With
/// duplicates, any one of the matching positions may be returned. An empty range (`lo >= hi`)
/// yields `None`.
///
/// # Panics
///
/// Panics if `hi > v.len()`.
#[inline]
pub fn binary_search<T>(value: &T, v: &[T], lo: usize, hi: usize) -> Option<usize>
where
    T: Ord,
{
    binary_search_by(v, lo, hi, |elem| elem.cmp(value))
}

/// Like [`binary_search`], but `f` reports how an element is ordered relative to the value that is
/// searched for: `Less` if the element comes before it, `Greater` if after it.
#[inline]
pub fn binary_search_by<T, F>(v: &[T], lo: usize, hi: usize, mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let len = v.len();
    assert!(
        hi <= len,
        "search range end {hi} out of range for slice of length {len}"
    );

    search_range(v, lo, hi, &mut f)
}

/// Searches the whole of the sorted slice `v` for `value`.
#[inline]
pub fn contains<T>(value: &T, v: &[T]) -> bool
where
    T: Ord,
{
    binary_search(value, v, 0, v.len()).is_some()
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn search_range<T, F>(v: &[T], lo: usize, hi: usize, f: &mut F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    if lo >= hi {
        return None;
    }

    let mid = lo + (hi - lo) / 2;

    match f(&v[mid]) {
        Ordering::Less => search_range(v, mid + 1, hi, f),
        Ordering::Greater => search_range(v, lo, mid, f),
        Ordering::Equal => Some(mid),
    }
}
