//! Insertion sort.
//!
//! ```text
//! [ i elements in order | unprocessed ]
//! ```

use std::cmp::Ordering;

sort_impl!("insertion_stable", crate::QUADRATIC_MAX_TEST_LEN);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Moves the last element of `v` to the left until it is no longer less than its left neighbour.
/// `v[..v.len() - 1]` must already be sorted.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut j = v.len() - 1;

    while j > 0 && is_less(&v[j], &v[j - 1]) {
        v.swap(j, j - 1);
        j -= 1;
    }
}
