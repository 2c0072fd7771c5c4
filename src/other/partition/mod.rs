//! Partition schemes used by quicksort.
//!
//! A partition takes a non-empty slice whose last element is the pivot and rearranges it so that
//! the pivot ends up at the returned split position `s`, every element of `v[..s]` is less than or
//! equal to the pivot and every element of `v[s + 1..]` is greater than or equal to it.
//!
//! If `is_less` does not implement a total order the resulting order and return value are
//! unspecified, but all original elements will remain in `v` and the returned position is always
//! in bounds. An empty slice is left alone and yields 0.

pub trait Partition {
    fn name() -> String;

    fn partition<T>(v: &mut [T]) -> usize
    where
        T: Ord;

    fn partition_by<T, F>(v: &mut [T], is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool;
}

macro_rules! partition_impl {
    ($name:expr) => {
        pub struct PartitionImpl;

        impl crate::other::partition::Partition for PartitionImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn partition<T>(v: &mut [T]) -> usize
            where
                T: Ord,
            {
                partition(v, &mut |a, b| a.lt(b))
            }

            #[inline]
            fn partition_by<T, F>(v: &mut [T], is_less: &mut F) -> usize
            where
                F: FnMut(&T, &T) -> bool,
            {
                partition(v, is_less)
            }
        }
    };
}

pub mod hoare;
pub mod lomuto;
