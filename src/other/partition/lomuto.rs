//! Single forward scan partition.
//!
//! ```text
//! [ < pivot | >= pivot | unscanned | pivot ]
//!            ^          ^
//!            l          r
//! ```
//!
//! Simple and branchy. Elements equal to the pivot all land on the right side, so inputs with many
//! duplicates produce very lopsided splits.

partition_impl!("lomuto");

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
    for r in 0..rest.len() {
        if is_less(&rest[r], pivot) {
            rest.swap(l, r);
            l += 1;
        }
    }

    let last = v.len() - 1;
    v.swap(l, last);

    l
}
