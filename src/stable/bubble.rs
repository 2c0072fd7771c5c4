//! Bubble sort.
//!
//! ```text
//! [ unprocessed | i largest elements in order ]
//! ```

use std::cmp::Ordering;

sort_impl!("bubble_stable", crate::QUADRATIC_MAX_TEST_LEN);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 1..len {
        let mut swapped = false;

        // Only strict inversions are swapped, equal neighbours keep their order.
        for j in 0..(len - i) {
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        // A pass without swaps means the unprocessed prefix is already in order.
        if !swapped {
            return;
        }
    }
}
