//! Top-down merge sort.
//!
//! ```text
//! [ sorted | sorted ] -> [ sorted ]
//! ```
//!
//! A single scratch buffer of `len / 2` elements is allocated per call and reused by every merge
//! in the recursion.

use std::cmp::Ordering;
use std::mem::{self, MaybeUninit};
use std::ptr;

sort_impl!("merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` so that `v` ends up sorted. Equal elements
/// of the left run are placed before those of the right run.
///
/// If either run is not sorted the resulting order is unspecified, but `v` still holds exactly its
/// original elements.
///
/// # Panics
///
/// Panics if `mid > v.len()`.
#[inline]
pub fn merge<T>(v: &mut [T], mid: usize)
where
    T: Ord,
{
    merge_runs(v, mid, &mut |a, b| a.lt(b));
}

/// Like [`merge`], ordering elements by `compare`.
#[inline]
pub fn merge_by<T, F>(v: &mut [T], mid: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_runs(v, mid, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let len = v.len();
    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    // The left half of any sub-range is never longer than half of the whole slice.
    let mut buf = Vec::<T>::with_capacity(len / 2);
    merge_sort(v, buf.spare_capacity_mut(), &mut is_less);
}

fn merge_runs<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(
        mid <= len,
        "merge split {mid} out of range for slice of length {len}"
    );

    if mem::size_of::<T>() == 0 || mid == 0 || mid == len {
        return;
    }

    let mut buf = Vec::<T>::with_capacity(mid);
    merge_halves(v, mid, buf.spare_capacity_mut(), is_less);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_sort<T, F>(v: &mut [T], scratch: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], scratch, is_less);
    merge_sort(&mut v[mid..], scratch, is_less);

    // Both runs are already in order relative to each other, nothing to merge.
    if !is_less(&v[mid], &v[mid - 1]) {
        return;
    }

    merge_halves(v, mid, scratch, is_less);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` using `scratch` to hold the left run.
///
/// `T` must not be zero-sized and `0 < mid < v.len()`.
///
/// Every element is only ever moved bitwise, each comparison is done on the element that ends up
/// in `v`. If `is_less` panics the unconsumed rest of the left run is copied back, so `v` holds
/// exactly its original elements on unwind.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_halves<T, F>(v: &mut [T], mid: usize, scratch: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mem::size_of::<T>() != 0);
    debug_assert!(mid > 0 && mid < len);

    // Required for soundness, the left run is copied into `scratch` in one go.
    assert!(mid <= scratch.len());

    let v_base = v.as_mut_ptr();
    let buf = scratch.as_mut_ptr() as *mut T;

    // SAFETY: `buf` has room for `mid` elements and can't overlap with `v`. From the moment the
    // left run is copied out, `hole` owns it and writes whatever is left of it back into the gap
    // in `v` when dropped. The gap `hole.dest..right` is always exactly as long as
    // `hole.start..hole.end`, so all reads and writes stay within `v` and `buf` no matter what
    // `is_less` returns.
    unsafe {
        ptr::copy_nonoverlapping(v_base, buf, mid);

        let mut hole = MergeHole {
            start: buf,
            end: buf.add(mid),
            dest: v_base,
        };

        let mut right = v_base.add(mid);
        let right_end = v_base.add(len);

        while hole.start < hole.end && right < right_end {
            // Take from the right run only if it is strictly less, ties go to the left run.
            let take_right = is_less(&*right, &*hole.start);

            if take_right {
                ptr::copy_nonoverlapping(right, hole.dest, 1);
                right = right.add(1);
            } else {
                ptr::copy_nonoverlapping(hole.start, hole.dest, 1);
                hole.start = hole.start.add(1);
            }

            hole.dest = hole.dest.add(1);
        }
    }
    // Finally, `hole` gets dropped. If the left run was not fully consumed, whatever remains of it
    // will now be copied into the gap in `v`, directly in front of the untouched rest of the right
    // run.
}

// When dropped, copies the range `start..end` into `dest..`.
struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, `start..end` is the unconsumed part of the scratch
        // copy and `dest` points at a gap in `v` of exactly that length.
        unsafe {
            let len = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, len);
        }
    }
}
