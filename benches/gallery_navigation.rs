// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation operations.
//!
//! Measures catalog construction from the configured table and wraparound
//! navigation through an open session.

use criterion::{criterion_group, criterion_main, Criterion};
use folio_lens::config::default_galleries;
use folio_lens::gallery::{wrap_index, Catalog, GallerySession};
use std::hint::black_box;

fn bench_catalog_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let table = default_galleries();

    group.bench_function("catalog_from_table", |b| {
        b.iter(|| {
            let catalog = Catalog::from_table(&table);
            black_box(&catalog);
        });
    });

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("step_through_gallery", |b| {
        let mut session = GallerySession::new(Catalog::from_table(&default_galleries()));
        session.open("bitsys");
        b.iter(|| {
            black_box(session.step(1));
        });
    });

    group.bench_function("wrap_index_negative", |b| {
        b.iter(|| {
            black_box(wrap_index(black_box(-1), black_box(20)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_catalog_construction, bench_navigation);
criterion_main!(benches);
