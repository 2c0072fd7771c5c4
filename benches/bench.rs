use std::cell::Cell;
use std::env;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use once_cell::sync::OnceCell;
use rand::prelude::*;
use regex::Regex;

use sort_test_tools::{patterns, Sort};
use sorts_lab::other::search;
use sorts_lab::{stable, unstable};

fn pin_thread_to_core() {
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    if !AFFINITY_ALREADY_SET.get() {
        if let Some(core_id_2) = core_affinity::get_core_ids()
            .as_ref()
            .and_then(|ids| ids.get(pin_core_id))
        {
            core_affinity::set_for_current(*core_id_2);
        }

        AFFINITY_ALREADY_SET.set(true);
    }
}

fn is_bench_name_ok(name: &str) -> bool {
    static FILTER_REGEX: OnceCell<Option<Regex>> = OnceCell::new();

    let filter_regex = FILTER_REGEX.get_or_init(|| {
        env::var("BENCH_REGEX").ok().map(|filter_regex| {
            Regex::new(&filter_regex)
                .unwrap_or_else(|err| panic!("invalid BENCH_REGEX '{filter_regex}': {err}"))
        })
    });

    filter_regex
        .as_ref()
        .map(|reg| reg.is_match(name))
        .unwrap_or(true)
}

fn measure_comp_count(
    name: &str,
    test_size: usize,
    instrumented_sort_func: impl Fn(),
    comp_count: Rc<Cell<u64>>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_size <= 20 {
        100_000
    } else if test_size < 10_000 {
        3000
    } else if test_size < 100_000 {
        1000
    } else {
        100
    };

    comp_count.set(0);
    for _ in 0..run_count {
        instrumented_sort_func();
    }

    // If there is on average less than a single comparison this will be wrong.
    let total = comp_count.get() / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

#[inline(never)]
fn bench_impl<T: Ord, S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    if test_size > S::MAX_TEST_LEN {
        return;
    }

    let bench_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        // Comparison counts don't depend on the element type.
        if transform_name != "i32" || test_size > 100_000 {
            return;
        }

        let name = format!("{bench_name}-comp-{transform_name}-{pattern_name}-{test_size}");
        if !is_bench_name_ok(&name) {
            return;
        }

        // Instrument via sort_by so that the type being sorted stays the same as in the timed
        // benchmarks.
        let comp_count = Rc::new(Cell::new(0u64));
        let comp_count_copy = comp_count.clone();
        let instrumented_sort_func = || {
            let mut test_data = transform(pattern_provider(test_size));
            S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
                comp_count_copy.set(comp_count_copy.get() + 1);
                a.cmp(b)
            })
        };
        measure_comp_count(&name, test_size, instrumented_sort_func, comp_count);

        return;
    }

    // Pin the benchmark to the same core to improve repeatability. Doing it this way allows
    // criterion to do other stuff with other threads.
    pin_thread_to_core();

    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    let name = format!("{bench_name}-hot-{transform_name}-{pattern_name}-{test_size}");
    if is_bench_name_ok(&name) {
        c.bench_function(&name, |b| {
            b.iter_batched_ref(
                || transform(pattern_provider(test_size)),
                |test_data| {
                    S::sort(black_box(test_data.as_mut_slice()));
                    black_box(test_data); // side-effect
                },
                batch_size,
            )
        });
    }
}

fn bench_patterns<T: Ord>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    let pattern_providers: [(&'static str, fn(usize) -> Vec<i32>); 7] = [
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32))
        }),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_size < 3 && *pattern_name != "random" {
            continue;
        }

        macro_rules! bench_sorts {
            ($($sort_impl:ty),*) => {
                $(
                    bench_impl::<T, $sort_impl>(
                        c,
                        test_size,
                        transform_name,
                        &transform,
                        pattern_name,
                        pattern_provider,
                    );
                )*
            };
        }

        bench_sorts!(
            stable::bubble::SortImpl,
            stable::insertion::SortImpl,
            stable::merge::SortImpl,
            unstable::selection::SortImpl,
            unstable::quick::SortImpl
        );
    }
}

fn bench_search(c: &mut Criterion, test_size: usize) {
    if test_size == 0 || env::var("MEASURE_COMP").is_ok() {
        return;
    }

    let name = format!("binary_search-hot-i32-{test_size}");
    if !is_bench_name_ok(&name) {
        return;
    }

    pin_thread_to_core();

    // Only even values are present, so roughly half of the lookups miss.
    let v = patterns::ascending_stride(test_size, 2);
    let max_val = (test_size as i32).saturating_mul(2);
    let mut rng = thread_rng();

    c.bench_function(&name, |b| {
        b.iter_batched(
            || rng.gen_range(-1..=max_val),
            |target| search::binary_search(black_box(&target), black_box(&v), 0, v.len()),
            BatchSize::SmallInput,
        )
    });
}

// Strings are compared lexicographically. Shifting into the unsigned range and zero extending to
// the 10 digits of u32::MAX keeps the integer order.
fn order_preserving_string(val: i32) -> String {
    format!("{:010}", (val as i64) - (i32::MIN as i64))
}

fn ensure_string_order() {
    let values = [i32::MIN, -5, -1, 0, 5, 9, 10, i32::MAX];
    let strings = values.map(order_preserving_string);

    assert!(strings.windows(2).all(|w| w[0] < w[1]));
}

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [
        0, 1, 2, 3, 5, 8, 16, 20, 31, 50, 101, 200, 500, 1_000, 2_048, 10_000, 100_000, 1_000_000,
    ];

    patterns::disable_fixed_seed();
    ensure_true_random();
    ensure_string_order();

    for test_size in test_sizes {
        // Basic type often used to test sorting algorithms.
        bench_patterns(c, test_size, "i32", |values| values);

        // Common type for usize on 64-bit machines.
        bench_patterns(c, test_size, "u64", |values| {
            values
                .iter()
                .map(|val| -> u64 {
                    // Extends the value into the 64 bit range, while preserving input order.
                    let x = ((*val as i64) + (i32::MAX as i64) + 1) as u64;
                    x * (i32::MAX as u64)
                })
                .collect()
        });

        if test_size <= 100_000 {
            bench_patterns(c, test_size, "string", |values| {
                values.into_iter().map(order_preserving_string).collect()
            });
        }

        bench_search(c, test_size);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
