//! Recursive quicksort.
//!
//! The pivot is kept at the high end of the active range and the range is split with the
//! [`hoare`](crate::other::partition::hoare) partition. Ranges of eight or more elements first move
//! a median of three to the high end, so already sorted and reversed inputs split evenly.
//!
//! Only the shorter side of each split is sorted recursively, the longer side is handled by the
//! loop. The recursion depth is therefore bounded by *O*(log(*n*)) for every input, while the
//! running time is *O*(*n* \* log(*n*)) on average and *O*(*n*^2) in the worst case.

use std::cmp::Ordering;
use std::mem;

use crate::other::partition::{hoare, Partition};

sort_impl!("quick_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    quicksort(v, &mut is_less);
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        let pivot_pos = choose_pivot(v, is_less);
        v.swap(pivot_pos, len - 1);

        let mid = <hoare::PartitionImpl as Partition>::partition_by(v, is_less);
        debug_assert!(mid < len);

        // Split the slice into `left`, `pivot`, and `right`. The pivot is in its final position.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        // Recurse into the shorter side and continue with the longer one.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Selects the position of the pivot for `v`, which must not be empty.
///
/// Short slices use their last element. Longer ones use the median of three elements spread over
/// the slice.
fn choose_pivot<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 8 {
        return len - 1;
    }

    let len_div_8 = len / 8;

    let a = 0;
    let b = len_div_8 * 4;
    let c = len_div_8 * 7;

    median3(v, a, b, c, is_less)
}

/// Returns whichever of the positions `a`, `b` and `c` holds the median of the three elements.
fn median3<T, F>(v: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let x = is_less(&v[a], &v[b]);
    let y = is_less(&v[a], &v[c]);
    if x == y {
        // If x=y=0 then b, c <= a. In this case we want to return max(b, c).
        // If x=y=1 then a < b, c. In this case we want to return min(b, c).
        // By toggling the outcome of b < c using XOR x we get this behavior.
        let z = is_less(&v[b], &v[c]);
        if z ^ x {
            c
        } else {
            b
        }
    } else {
        // Either c <= a < b or b <= a < c, thus a is our median.
        a
    }
}
