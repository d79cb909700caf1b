use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tagkeeper_compliance::{decide, is_well_formed, matches, TagPolicy};
use tagkeeper_core::models::TagSet;

fn tag_set(department: &str, extra: usize) -> TagSet {
    let mut tags = TagSet::new()
        .with("Environment", "prod")
        .with("Department", department)
        .with("ObjectId", "obj-0001");
    for i in 0..extra {
        tags.insert(format!("Extra{i}"), format!("value-{i}"));
    }
    tags
}

fn bench_matcher(c: &mut Criterion) {
    let observed = tag_set("sales", 40);
    let catalog = tag_set("eng", 40);
    let policy = TagPolicy::default();

    c.bench_function("is_well_formed_50_tags", |b| {
        b.iter(|| is_well_formed(black_box(&observed)))
    });
    c.bench_function("matches_50_tags", |b| {
        b.iter(|| matches(black_box(&observed), black_box(&catalog)))
    });
    c.bench_function("decide_mismatch", |b| {
        b.iter(|| decide(&policy, black_box(&observed), black_box(&catalog)))
    });
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
