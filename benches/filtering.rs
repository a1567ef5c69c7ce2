// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the filter engine.
//!
//! Measures:
//! - Mood-only filtering of the bundled catalog
//! - Mood + tag filtering
//! - Building a full session snapshot

use criterion::{criterion_group, criterion_main, Criterion};
use manga_mood::application::port::CatalogSource;
use manga_mood::domain::catalog::{Catalog, MoodId, TagId};
use manga_mood::domain::selection::{filter, TagSet};
use manga_mood::domain::session::Session;
use manga_mood::infrastructure::EmbeddedCatalog;
use std::hint::black_box;
use std::sync::Arc;

fn bundled() -> Catalog {
    EmbeddedCatalog.load().expect("bundled catalog")
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    let catalog = bundled();
    let mood = MoodId::from("dark");

    let empty = TagSet::new();
    group.bench_function("mood_only", |b| {
        b.iter(|| black_box(filter(catalog.items(), Some(&mood), &empty)));
    });

    let mut tags = TagSet::new();
    tags.toggle(TagId::from("revenge"));
    tags.toggle(TagId::from("tragic"));
    group.bench_function("mood_and_tags", |b| {
        b.iter(|| black_box(filter(catalog.items(), Some(&mood), &tags)));
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = Session::new(Arc::new(bundled()));
    session.start().expect("start");
    session.select_mood(MoodId::from("dark")).expect("mood");

    c.bench_function("session_snapshot", |b| {
        b.iter(|| black_box(session.snapshot().filtered_items.len()));
    });
}

criterion_group!(benches, bench_filter, bench_snapshot);
criterion_main!(benches);
