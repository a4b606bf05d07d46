// benches/sequence_operations.rs
//
// シーケンス操作のベンチマーク
// 負インデックスの反転解決と1パス走査のコストを測定

use advslice_core::{fill, slice, unique, AdvancedSlice, AdvancedSliceOps};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn make_data(size: usize) -> Vec<i64> {
    (0..size as i64).map(|n| (n * 7919) % 1000).collect()
}

/// ベンチマーク1: SLICE - 正の範囲と刻み
fn bench_slice_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_forward");

    for size in [10, 1_000, 100_000].iter() {
        let data = make_data(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            let end = data.len() as isize;
            b.iter(|| black_box(slice(data, &[1, end, 3])));
        });
    }
    group.finish();
}

/// ベンチマーク2: SLICE - 負インデックス（反転を伴う）
fn bench_slice_reversed(c: &mut Criterion) {
    let data = make_data(10_000);
    let mut group = c.benchmark_group("slice_reversed");

    group.bench_function("single", |b| {
        b.iter(|| black_box(slice(&data, &[-1])));
    });

    // 大きな負数でも反転回数に比例しない
    group.bench_function("large_negative", |b| {
        b.iter(|| black_box(slice(&data, &[-1_000_001, 5_000])));
    });

    group.finish();
}

/// ベンチマーク3: FILL - 反転後の範囲充填
fn bench_fill(c: &mut Criterion) {
    let data = make_data(10_000);
    c.bench_function("fill_negative_range", |b| {
        b.iter(|| {
            let mut work = data.clone();
            fill(&mut work, 0, &[-1, -5_000]);
            black_box(work);
        });
    });
}

/// ベンチマーク4: UNIQUE - 重複の多い列
fn bench_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique");

    for size in [100, 10_000].iter() {
        let data = make_data(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(unique(data, |x| *x)));
        });
    }
    group.finish();
}

/// ベンチマーク5: ラッパーの連鎖呼び出し
fn bench_wrapper_chain(c: &mut Criterion) {
    let data = make_data(1_000);
    c.bench_function("wrapper_chain", |b| {
        b.iter(|| {
            let mut s = AdvancedSlice::new(data.clone());
            s.unique(|x| *x)
                .sort(|a, b| a < b)
                .remove(|x, _| x % 2 == 0)
                .map(|x, i| x + i as i64);
            black_box(s.length());
        });
    });
}

criterion_group!(
    benches,
    bench_slice_forward,
    bench_slice_reversed,
    bench_fill,
    bench_unique,
    bench_wrapper_chain
);
criterion_main!(benches);
