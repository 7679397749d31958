#![allow(clippy::unwrap_used)]
//! Benchmarks for configuration and manifest deserialization

#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use showcase::config::ShowcaseConfig;
use showcase::filter::{Card, Filter, FilterControl};
use showcase::page::PageManifest;
use std::hint::black_box;

fn create_large_manifest() -> PageManifest {
    let categories = ["residential", "industrial", "commercial"];
    PageManifest {
        cards: (0..300).map(|i| Card::new(categories[i % 3])).collect(),
        filters: std::iter::once("all")
            .chain(categories)
            .map(|id| FilterControl::new(Filter::from_control_id(id)))
            .collect(),
        load_more: true,
        faq_items: 12,
        reveal_targets: (0..20).map(|i| format!("section-{i}")).collect(),
        ..PageManifest::default()
    }
}

fn bench_config_round_trip(c: &mut Criterion) {
    let config = ShowcaseConfig::default();

    c.bench_function("config_round_trip", |b| {
        b.iter(|| {
            let json = serde_json::to_string(black_box(&config)).unwrap();
            let deserialized: ShowcaseConfig = serde_json::from_str(&json).unwrap();
            black_box(deserialized);
        });
    });
}

fn bench_manifest_parse(c: &mut Criterion) {
    let json = serde_json::to_string(&create_large_manifest()).unwrap();

    c.bench_function("manifest_parse_300_cards", |b| {
        b.iter(|| {
            let manifest = PageManifest::parse(black_box(&json)).unwrap();
            black_box(manifest);
        });
    });
}

criterion_group!(benches, bench_config_round_trip, bench_manifest_parse);
criterion_main!(benches);
