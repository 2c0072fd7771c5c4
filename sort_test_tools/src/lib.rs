/// Common interface of every sort implementation that is tested and benchmarked.
pub trait Sort {
    /// Largest input length the generic test suite feeds to this sort. Quadratic sorts lower it
    /// so that the suite stays fast.
    const MAX_TEST_LEN: usize = usize::MAX;

    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
