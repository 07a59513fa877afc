use livechart_core::{ContinuousSeries, Series};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift_append_y");
    for &n in &[60usize, 600, 6_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut window = ContinuousSeries::zeroed_window(n, 1.0);
            let mut v = 0.0f64;
            b.iter(|| {
                v = (v + 7.3) % 100.0;
                black_box(window.shift_append_y(black_box(v)));
                black_box(window.average());
            });
        });
    }
    group.finish();
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("append_y_100k", |b| {
        b.iter(|| {
            let mut s = Series::new();
            for i in 0..100_000 {
                s.append_y(black_box(i as f64 * 0.5));
            }
            black_box(s.bounds_y())
        });
    });
}

criterion_group!(benches, bench_shift, bench_append);
criterion_main!(benches);
