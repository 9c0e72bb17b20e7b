use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use step_sort::patterns;

fn criterion_benchmark(c: &mut Criterion) {
    let pattern_providers: Vec<(&str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
    ];

    let mut algorithms = step_sort::all();

    for test_size in [50usize, 250] {
        for (pattern_name, pattern_provider) in &pattern_providers {
            for algo in &mut algorithms {
                let id = format!(
                    "step-{}-{pattern_name}-{test_size}",
                    algo.name().to_lowercase().replace(' ', "_")
                );

                c.bench_function(&id, |b| {
                    b.iter_batched_ref(
                        || pattern_provider(test_size),
                        |test_data| {
                            algo.reset(test_data.len());
                            while !algo.step(black_box(test_data.as_mut_slice())).done {}
                        },
                        BatchSize::SmallInput,
                    )
                });
            }
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
