//! Classic comparison sorts (bubble, selection, insertion, merge, quick) and recursive binary
//! search over slices of totally ordered elements.
//!
//! Every algorithm lives in its own module and exposes `sort`, `sort_by` and a `SortImpl` type for
//! the shared test and bench harness. [`sort`] and [`sort_by`] dispatch on [`Algorithm`].

use std::cmp::Ordering;
use std::fmt;

macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, usize::MAX);
    };
    ($name:expr, $max_test_len:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            const MAX_TEST_LEN: usize = $max_test_len;

            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

// O(n^2) sorts are only fed inputs up to this length by the generic test suite.
const QUADRATIC_MAX_TEST_LEN: usize = 500;

pub mod other;
pub mod stable;
pub mod unstable;

/// The sorting algorithms provided by this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Whether the algorithm keeps equal elements in their original relative order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Merge
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sorts `v` in place with `algorithm`.
#[inline]
pub fn sort<T>(v: &mut [T], algorithm: Algorithm)
where
    T: Ord,
{
    match algorithm {
        Algorithm::Bubble => stable::bubble::sort(v),
        Algorithm::Selection => unstable::selection::sort(v),
        Algorithm::Insertion => stable::insertion::sort(v),
        Algorithm::Merge => stable::merge::sort(v),
        Algorithm::Quick => unstable::quick::sort(v),
    }
}

/// Sorts `v` in place with `algorithm`, ordering elements by `compare`.
///
/// `compare` must define a total order. If it does not, the resulting order is unspecified, but
/// `v` still holds exactly its original elements.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], algorithm: Algorithm, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    match algorithm {
        Algorithm::Bubble => stable::bubble::sort_by(v, compare),
        Algorithm::Selection => unstable::selection::sort_by(v, compare),
        Algorithm::Insertion => stable::insertion::sort_by(v, compare),
        Algorithm::Merge => stable::merge::sort_by(v, compare),
        Algorithm::Quick => unstable::quick::sort_by(v, compare),
    }
}

/// Exchanges the elements at positions `i` and `j`.
///
/// # Panics
///
/// Panics if `i` or `j` are out of bounds.
#[inline]
pub fn swap<T>(v: &mut [T], i: usize, j: usize) {
    let len = v.len();
    assert!(
        i < len && j < len,
        "swap indices ({i}, {j}) out of range for slice of length {len}"
    );

    v.swap(i, j);
}
