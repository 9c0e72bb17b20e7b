use std::io::{self, Write};
use std::sync::Mutex;

use step_sort::patterns;
use step_sort::StepSort;

use step_sort::simple::{BubbleSort, CocktailSort, CombSort, InsertionSort, SelectionSort};
use step_sort::staged::{HeapSort, MergeSort, QuickSort, ShellSort};

const TEST_SIZES: [usize; 15] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 16, 17, 33, 50, 100, 250];

fn get_or_init_random_seed() -> u64 {
    static SEED_WRITTEN: Mutex<bool> = Mutex::new(false);
    let seed = patterns::random_init_seed();

    let mut seed_writer = SEED_WRITTEN.lock().unwrap();
    if !*seed_writer {
        // Always write the seed before doing anything to ensure reproducibility of crashes.
        io::stdout()
            .write_all(format!("\nSeed: {seed}\n\n").as_bytes())
            .unwrap();
        io::stdout().flush().unwrap();

        *seed_writer = true;
    }

    seed
}

/// Every algorithm finishes well within this many steps, including the
/// quadratic group and quicksort's midpoint-pivot worst case.
fn step_bound(size: usize) -> usize {
    8 * size * size + 64
}

#[derive(Debug, Default)]
struct Totals {
    steps: usize,
    comparisons: usize,
    swaps: usize,
}

/// Ticks `algo` until it reports done, checking the per-step contract:
/// highlight indices are in range whenever `compared` is set, `done` agrees
/// with `is_done`, and completion arrives within `max_steps`.
fn run_to_done(algo: &mut dyn StepSort, v: &mut [i32], max_steps: usize) -> Totals {
    let mut totals = Totals::default();

    loop {
        let res = algo.step(v);
        totals.steps += 1;

        if res.compared {
            totals.comparisons += 1;
            for hi in [res.hi1, res.hi2].into_iter().flatten() {
                assert!(hi < v.len(), "{}: highlight {hi} out of range", algo.name());
            }
        }
        if res.swapped {
            totals.swaps += 1;
        }

        if res.done {
            assert!(algo.is_done());
            break;
        }

        assert!(
            totals.steps <= max_steps,
            "{}: no completion within {max_steps} steps",
            algo.name()
        );
    }

    totals
}

fn step_comp<S: StepSort + Default>(v: &mut Vec<i32>) {
    let seed = get_or_init_random_seed();

    let original = v.clone();
    let mut expected = v.clone();
    expected.sort();

    let max_steps = step_bound(v.len());
    let mut algo = S::default();
    algo.reset(v.len());
    run_to_done(&mut algo, v, max_steps);

    if *v != expected {
        eprintln!("Original: {:?}", original);
        eprintln!("Expected: {:?}", expected);
        eprintln!("Got:      {:?}", v);
        panic!("Test assertion failed! Seed: {seed}");
    }
}

fn basic<S: StepSort + Default>() {
    let fixed: &[&[i32]] = &[
        &[],
        &[1],
        &[2, 1],
        &[1, 2],
        &[5, 3, 4, 1, 2],
        &[2, 1, 2, 1, 2, 1],
        &[3, 3, 3],
        &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        &[0, 2, 1, 3, 5, 4, 7, 6, 9, 8],
        &[i32::MAX, i32::MIN, 0, -1, 1],
    ];

    for input in fixed {
        let mut v = input.to_vec();
        step_comp::<S>(&mut v);
    }
}

fn pattern<S: StepSort + Default>(pattern_fn: impl Fn(usize) -> Vec<i32>) {
    for test_size in TEST_SIZES {
        let mut test_data = pattern_fn(test_size);
        step_comp::<S>(&mut test_data);
    }
}

fn terminal_idempotent<S: StepSort + Default>() {
    let mut v = patterns::random(33);
    let max_steps = step_bound(v.len());
    let mut algo = S::default();
    algo.reset(v.len());
    run_to_done(&mut algo, &mut v, max_steps);

    let settled = v.clone();
    for _ in 0..10 {
        let res = algo.step(&mut v);
        assert!(res.done);
        assert!(algo.is_done());
        assert!(!res.compared);
        assert!(!res.swapped);
        assert_eq!(v, settled);
    }
}

fn trivial_size<S: StepSort + Default>() {
    for size in [0usize, 1] {
        let mut algo = S::default();
        algo.reset(size);
        assert!(algo.is_done(), "reset({size}) must complete immediately");

        let mut v = vec![42; size];
        let res = algo.step(&mut v);
        assert!(res.done);
        assert!(!res.compared);
        assert!(!res.swapped);
    }
}

fn defensive_shrink<S: StepSort + Default>() {
    let mut algo = S::default();
    algo.reset(10);

    // Shorter than the recorded size: must complete without touching it.
    let mut v = vec![5, 4, 3, 2, 1];
    let res = algo.step(&mut v);
    assert!(res.done);
    assert!(algo.is_done());
    assert!(!res.compared);
    assert!(!res.swapped);
    assert_eq!(v, [5, 4, 3, 2, 1]);
}

fn reset_restarts<S: StepSort + Default>() {
    let mut algo = S::default();

    let mut v = patterns::random(50);
    algo.reset(v.len());
    for _ in 0..20 {
        algo.step(&mut v);
    }

    // Abandon the half-finished run and start over on fresh data.
    let mut fresh = patterns::random(50);
    let mut expected = fresh.clone();
    expected.sort();

    let max_steps = step_bound(fresh.len());
    algo.reset(fresh.len());
    run_to_done(&mut algo, &mut fresh, max_steps);
    assert_eq!(fresh, expected);
}

macro_rules! instantiate_step_tests {
    ($algo:ty, $prefix:ident) => {
        paste::paste! {
            #[test]
            fn [<$prefix _basic>]() {
                basic::<$algo>();
            }

            #[test]
            fn [<$prefix _random>]() {
                pattern::<$algo>(patterns::random);
            }

            #[test]
            fn [<$prefix _random_dup>]() {
                pattern::<$algo>(|size| patterns::random_uniform(size, 0..=3));
            }

            #[test]
            fn [<$prefix _random_binary>]() {
                pattern::<$algo>(|size| patterns::random_uniform(size, 0..=1));
            }

            #[test]
            fn [<$prefix _ascending>]() {
                pattern::<$algo>(patterns::ascending);
            }

            #[test]
            fn [<$prefix _descending>]() {
                pattern::<$algo>(patterns::descending);
            }

            #[test]
            fn [<$prefix _all_equal>]() {
                pattern::<$algo>(patterns::all_equal);
            }

            #[test]
            fn [<$prefix _saw_mixed>]() {
                pattern::<$algo>(|size| {
                    patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
                });
            }

            #[test]
            fn [<$prefix _pipe_organ>]() {
                pattern::<$algo>(patterns::pipe_organ);
            }

            #[test]
            fn [<$prefix _terminal_idempotent>]() {
                terminal_idempotent::<$algo>();
            }

            #[test]
            fn [<$prefix _trivial_size>]() {
                trivial_size::<$algo>();
            }

            #[test]
            fn [<$prefix _defensive_shrink>]() {
                defensive_shrink::<$algo>();
            }

            #[test]
            fn [<$prefix _reset_restarts>]() {
                reset_restarts::<$algo>();
            }
        }
    };
}

instantiate_step_tests!(BubbleSort, bubble);
instantiate_step_tests!(InsertionSort, insertion);
instantiate_step_tests!(SelectionSort, selection);
instantiate_step_tests!(CocktailSort, cocktail);
instantiate_step_tests!(CombSort, comb);
instantiate_step_tests!(ShellSort, shell);
instantiate_step_tests!(QuickSort, quick);
instantiate_step_tests!(HeapSort, heap);
instantiate_step_tests!(MergeSort, merge);

#[test]
fn bubble_first_step_matches_trace() {
    let mut v = vec![5, 3, 4, 1, 2];
    let mut algo = BubbleSort::new();
    algo.reset(v.len());

    let res = algo.step(&mut v);
    assert_eq!(res.hi1, Some(0));
    assert_eq!(res.hi2, Some(1));
    assert!(res.compared);
    assert!(res.swapped);
    assert!(!res.done);
    assert_eq!(v, [3, 5, 4, 1, 2]);

    run_to_done(&mut algo, &mut v, step_bound(5));
    assert_eq!(v, [1, 2, 3, 4, 5]);
}

#[test]
fn quick_small_inputs_use_insertion_fallback() {
    // At or below the fallback threshold every comparison is an adjacent
    // pair; the 3-way partition state reports a lone scan cursor instead.
    for size in 2..=4usize {
        let mut v = patterns::random(size);
        let mut expected = v.clone();
        expected.sort();

        let mut algo = QuickSort::new();
        algo.reset(size);

        let mut steps = 0;
        loop {
            let res = algo.step(&mut v);
            if res.compared {
                let (Some(a), Some(b)) = (res.hi1, res.hi2) else {
                    panic!("partition state entered for size {size}");
                };
                assert_eq!(b, a + 1);
            }
            if res.done {
                break;
            }
            steps += 1;
            assert!(steps <= step_bound(size));
        }

        assert_eq!(v, expected);
    }
}

#[test]
fn swap_only_engines_preserve_multiset_each_step() {
    // Every algorithm except mergesort mutates purely via swaps, so the
    // value multiset must hold after every single step, not just at the end.
    let engines: Vec<Box<dyn StepSort>> = vec![
        Box::new(BubbleSort::new()),
        Box::new(InsertionSort::new()),
        Box::new(SelectionSort::new()),
        Box::new(CocktailSort::new()),
        Box::new(CombSort::new()),
        Box::new(ShellSort::new()),
        Box::new(QuickSort::new()),
        Box::new(HeapSort::new()),
    ];

    for mut algo in engines {
        let mut v = patterns::random_uniform(33, 0..=5);
        let mut reference = v.clone();
        reference.sort();

        algo.reset(v.len());
        let mut steps = 0;
        loop {
            let res = algo.step(&mut v);

            let mut now = v.clone();
            now.sort();
            assert_eq!(now, reference, "{} changed the value multiset", algo.name());

            if res.done {
                break;
            }
            steps += 1;
            assert!(steps <= step_bound(v.len()));
        }
    }
}

#[test]
fn linearithmic_engines_stay_within_step_budget() {
    let size = 250usize;
    let log2_ceil = (usize::BITS - size.leading_zeros()) as usize;
    let budget = 40 * size * log2_ceil + 256;

    let engines: Vec<Box<dyn StepSort>> = vec![
        Box::new(CombSort::new()),
        Box::new(ShellSort::new()),
        Box::new(HeapSort::new()),
        Box::new(MergeSort::new()),
    ];

    for mut algo in engines {
        let mut v = patterns::descending(size);
        algo.reset(size);

        let totals = run_to_done(algo.as_mut(), &mut v, budget);
        assert!(
            v.windows(2).all(|w| w[0] <= w[1]),
            "{} left the sequence unsorted",
            algo.name()
        );
        assert!(totals.comparisons <= totals.steps);
    }
}
