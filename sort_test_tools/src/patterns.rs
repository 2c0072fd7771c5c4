//! `i32` input patterns for the sort and search tests and benchmarks.
//!
//! Every random pattern is drawn from a generator seeded with [`random_init_seed`], so a test
//! process sees the same values for the same call unless [`disable_fixed_seed`] was called.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Standard, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zipf::ZipfDistribution;

static FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// The seed random patterns derive from.
///
/// Fixed for the whole process by default and taken from the `OVERRIDE_SEED` env var if it is set,
/// which is how a failing run is reproduced. After [`disable_fixed_seed`] every call yields a fresh
/// seed.
pub fn random_init_seed() -> u64 {
    if !FIXED_SEED.load(Ordering::Acquire) {
        return rand::thread_rng().gen();
    }

    static SEED: OnceCell<u64> = OnceCell::new();
    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed
            .parse()
            .unwrap_or_else(|err| panic!("invalid OVERRIDE_SEED '{seed}': {err}")),
        Err(_) => rand::thread_rng().gen(),
    })
}

/// Makes every random pattern call produce new values. Benchmarks want this, tests don't.
///
/// # Panics
///
/// Panics if `OVERRIDE_SEED` is set, the two requests contradict each other.
pub fn disable_fixed_seed() {
    assert!(
        env::var_os("OVERRIDE_SEED").is_none(),
        "disable_fixed_seed conflicts with OVERRIDE_SEED"
    );

    FIXED_SEED.store(false, Ordering::Release);
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn sample<D>(len: usize, dist: D) -> Vec<i32>
where
    D: Distribution<i32>,
{
    seeded_rng().sample_iter(dist).take(len).collect()
}

// --- Random ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    sample(len, Standard)
}

/// Uniformly distributed values in `range`, e.g. `0..4` for inputs dominated by duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    sample(len, range.into())
}

/// Values `1..=len` following Zipf's law, small values are by far the most common.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent)
        .unwrap_or_else(|()| panic!("zipf exponent must be positive, got {exponent}"));

    seeded_rng()
        .sample_iter(dist)
        .take(len)
        .map(|val| val as i32)
        .collect()
}

/// Random values where the first `sorted_percent` of the slice is already in order, like new
/// values appended to a sorted collection.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();

    v
}

// --- Structured ---

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    ascending_stride(len, 1)
}

/// `0, stride, 2 * stride, ...`. With `stride > 1` every value in between is known to be absent,
/// which is what the search tests need.
pub fn ascending_stride(len: usize, stride: i32) -> Vec<i32> {
    (0..len as i32).map(|i| i * stride).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.

    (0..len as i32).rev().collect()
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);
    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));

    v
}

// --- Saws ---

/// Random values cut into `saw_count` runs of equal length, each sorted ascending.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saws(len, saw_count, |_| true)
}

/// Like [`saw_ascending`] with every run sorted descending.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saws(len, saw_count, |_| false)
}

/// Like [`saw_ascending`] with the direction of every run picked at random.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let directions = random_uniform(len + 1, 0..=1);
    saws(len, saw_count, |i| directions[i] == 0)
}

fn saws(len: usize, saw_count: usize, mut is_ascending: impl FnMut(usize) -> bool) -> Vec<i32> {
    let mut v = random(len);
    let saw_len = (len / saw_count.max(1)).max(1);

    for (i, saw) in v.chunks_mut(saw_len).enumerate() {
        if is_ascending(i) {
            saw.sort_unstable();
        } else {
            saw.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}
