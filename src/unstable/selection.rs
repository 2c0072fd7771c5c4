//! Selection sort.
//!
//! ```text
//! [ i smallest elements in order | unprocessed ]
//! ```
//!
//! Not guaranteed to be stable: swapping the minimum into place can move the displaced element
//! past others that compare equal to it.

use std::cmp::Ordering;

sort_impl!("selection_unstable", crate::QUADRATIC_MAX_TEST_LEN);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let min = find_min(&v[i..], is_less) + i;
        v.swap(i, min);
    }
}

/// Returns the position of the first minimum in `v`. `v` must not be empty.
fn find_min<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut min = 0;

    for j in 1..v.len() {
        if is_less(&v[j], &v[min]) {
            min = j;
        }
    }

    min
}
