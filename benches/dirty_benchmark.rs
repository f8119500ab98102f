//! Dirty bitmap benchmark: Measure marking and range iteration.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dirtycell::DirtyBitmap;

const CELLS: usize = 200 * 50;

fn mark_single(c: &mut Criterion) {
    let mut bitmap = DirtyBitmap::new(CELLS).unwrap();

    c.bench_function("dirty_mark_single", |b| {
        b.iter(|| bitmap.mark_dirty(black_box(5_025)))
    });
}

fn iterate_sparse(c: &mut Criterion) {
    let mut bitmap = DirtyBitmap::new(CELLS).unwrap();
    bitmap.mark_dirty(0);
    bitmap.mark_dirty(CELLS - 1);

    c.bench_function("dirty_iter_sparse_full_range", |b| {
        b.iter(|| black_box(&bitmap).iter().count())
    });
}

fn iterate_dense(c: &mut Criterion) {
    let mut bitmap = DirtyBitmap::new(CELLS).unwrap();
    bitmap.mark_all();

    c.bench_function("dirty_iter_dense", |b| {
        b.iter(|| black_box(&bitmap).iter().count())
    });
}

fn clear_all(c: &mut Criterion) {
    let mut bitmap = DirtyBitmap::new(CELLS).unwrap();

    c.bench_function("dirty_clear_all", |b| {
        b.iter(|| {
            bitmap.mark_dirty(black_box(777));
            bitmap.clear_all();
        })
    });
}

criterion_group!(benches, mark_single, iterate_sparse, iterate_dense, clear_all);
criterion_main!(benches);
