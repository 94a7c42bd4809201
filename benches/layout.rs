// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for per-frame layout math and catalog queries.
//!
//! Measures:
//! - Grid geometry derivation (runs on every resize)
//! - Bottom-margin classification across a full grid
//! - Catalog search (runs on every committed query)

use criterion::{criterion_group, criterion_main, Criterion};
use podgrid::data::{Catalog, SearchFilters, SearchSource};
use podgrid::domain::{Language, SortBy};
use podgrid::ui::state::grid::{self, GridGeometry};
use std::collections::BTreeSet;
use std::hint::black_box;

/// Benchmark tile-width derivation across typical viewport widths.
fn bench_grid_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    group.bench_function("geometry_for_width", |b| {
        b.iter(|| {
            for width in [320.0_f32, 375.0, 414.0, 768.0, 1024.0] {
                black_box(GridGeometry::for_width(black_box(width)).tile_width());
            }
        });
    });

    group.bench_function("bottom_margins_for_100_items", |b| {
        b.iter(|| {
            let count = 100;
            for index in 0..count {
                black_box(grid::bottom_margin(black_box(index), count));
            }
        });
    });

    group.finish();
}

/// Benchmark a full catalog search, ranked both ways.
fn bench_catalog_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    let catalog = Catalog::embedded().expect("embedded catalog should load");
    let filters = SearchFilters {
        sort_by: SortBy::Exactness,
        languages: BTreeSet::from([Language::English, Language::Spanish]),
        has_transcript: false,
    };

    group.bench_function("search_by_exactness", |b| {
        b.iter(|| {
            black_box(catalog.search(black_box("the"), &filters)).ok();
        });
    });

    let popularity = SearchFilters {
        sort_by: SortBy::Popularity,
        ..filters.clone()
    };
    group.bench_function("search_by_popularity", |b| {
        b.iter(|| {
            black_box(catalog.search(black_box("the"), &popularity)).ok();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_grid_geometry, bench_catalog_search);
criterion_main!(benches);
