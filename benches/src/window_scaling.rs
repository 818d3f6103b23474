use std::convert::Infallible;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tokio::runtime::Runtime;

use convoy::prelude::*;

/// Benchmark a trivial transform over 1,000 elements at varying window sizes
fn bench_window_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_scaling");
    let runtime = Runtime::new().unwrap();

    for limit in [1usize, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(limit), &limit, |b, &limit| {
            b.to_async(&runtime).iter(|| async move {
                let result = map(
                    from_iter(0u64..1_000),
                    |n, _| async move { Ok::<_, Infallible>(Emit::Value(black_box(n * 2))) },
                    MapOptions::new().with_concurrency(limit),
                )
                .await
                .unwrap();

                black_box(result)
            });
        });
    }

    group.finish();
}

/// Benchmark the unbounded window against a bounded one on yielding tasks
fn bench_unbounded_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("unbounded_window");
    let runtime = Runtime::new().unwrap();

    group.bench_function("unbounded", |b| {
        b.to_async(&runtime).iter(|| async {
            let result = map(
                from_iter(0u64..1_000),
                |n, _| async move {
                    tokio::task::yield_now().await;
                    Ok::<_, Infallible>(Emit::Value(n))
                },
                MapOptions::default(),
            )
            .await
            .unwrap();

            black_box(result)
        });
    });

    group.bench_function("bounded_32", |b| {
        b.to_async(&runtime).iter(|| async {
            let result = map(
                from_iter(0u64..1_000),
                |n, _| async move {
                    tokio::task::yield_now().await;
                    Ok::<_, Infallible>(Emit::Value(n))
                },
                MapOptions::new().with_concurrency(32),
            )
            .await
            .unwrap();

            black_box(result)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_window_scaling, bench_unbounded_window);
criterion_main!(benches);
