//! Headless stand-in for the graphical driver: ticks every algorithm to
//! completion on the same shuffled input and prints per-algorithm totals.
//! The engine only emits per-call flags; all accumulation happens here.

use std::env;

use step_sort::patterns;

fn main() {
    let size = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(250);

    println!("Seed: {}", patterns::random_init_seed());

    let base = patterns::random(size);

    println!(
        "{:<16} {:>12} {:>12} {:>12}",
        "algorithm", "steps", "comparisons", "swaps"
    );

    let mut algorithms = step_sort::all();
    for algo in &mut algorithms {
        let mut v = base.clone();
        algo.reset(v.len());

        let mut steps = 0u64;
        let mut comparisons = 0u64;
        let mut swaps = 0u64;

        loop {
            let res = algo.step(&mut v);
            steps += 1;
            if res.compared {
                comparisons += 1;
            }
            if res.swapped {
                swaps += 1;
            }
            if res.done {
                break;
            }
        }

        let sorted = v.windows(2).all(|w| w[0] <= w[1]);
        println!(
            "{:<16} {:>12} {:>12} {:>12}{}",
            algo.name(),
            steps,
            comparisons,
            swaps,
            if sorted { "" } else { "  NOT SORTED" }
        );
    }
}
