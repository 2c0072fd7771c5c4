//! Two pointer partition that stops on elements equal to the pivot.
//!
//! ```text
//! [ <= pivot | unscanned | >= pivot | pivot ]
//!             ^         ^
//!             l         r
//! ```
//!
//! `l` moves right over elements less than the pivot, `r` moves left over elements greater than
//! the pivot. When both are stuck the pair is swapped and both pointers advance. Elements equal to
//! the pivot stop both scans, so runs of duplicates are spread over both sides and the split lands
//! near the middle instead of at one end.

partition_impl!("hoare");

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let Some((pivot, rest)) = v.split_last_mut() else {
        return 0;
    };
    let pivot = &*pivot;

    let mut l = 0;
    let mut r = rest.len();
    loop {
        // Find the first element not less than the pivot.
        while l < r && is_less(&rest[l], pivot) {
            l += 1;
        }

        // Find the last element not greater than the pivot.
        while l < r && is_less(pivot, &rest[r - 1]) {
            r -= 1;
        }

        // Are we done?
        if l >= r {
            break;
        }

        // Swap the found pair of out-of-order elements. If `l == r - 1` this swaps an element
        // equal to the pivot with itself and `l` ends up past `r`, which is fine because that
        // element belongs to either side.
        r -= 1;
        rest.swap(l, r);
        l += 1;
    }

    // `rest[..l]` is <= pivot and `rest[l..]` is >= pivot, place the pivot between them.
    let last = v.len() - 1;
    v.swap(l, last);

    l
}
