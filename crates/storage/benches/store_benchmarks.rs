//! Collection Store Performance Benchmarks
//!
//! Throughput of the single-lock in-memory store:
//! - generate_id on one collection
//! - insert_element with fresh ids
//! - get_element over a pre-populated collection
//! - generate_id contention across threads

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::thread;
use strata_core::{CollectionStore, Properties};
use strata_storage::InMemoryCollectionStore;

fn setup_store() -> InMemoryCollectionStore {
    let store = InMemoryCollectionStore::new();
    store.create_collection("products").unwrap();
    store
}

fn sample_properties() -> Properties {
    let mut properties = Properties::new();
    properties.insert("Name".to_string(), "Pen".to_string());
    properties.insert("Category".to_string(), "Office".to_string());
    properties.insert("UnitPrice".to_string(), "1.5".to_string());
    properties
}

/// Benchmark identifier generation
fn bench_generate_id(c: &mut Criterion) {
    let store = setup_store();

    let mut group = c.benchmark_group("store");
    group.throughput(Throughput::Elements(1));
    group.bench_function("generate_id", |b| {
        b.iter(|| store.generate_id("products").unwrap())
    });
    group.finish();
}

/// Benchmark inserts with fresh ids
fn bench_insert(c: &mut Criterion) {
    let store = setup_store();
    let properties = sample_properties();
    let counter = AtomicI64::new(0);

    let mut group = c.benchmark_group("store");
    group.throughput(Throughput::Elements(1));
    group.bench_function("insert_element", |b| {
        b.iter(|| {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            store
                .insert_element("products", id, properties.clone())
                .unwrap()
        })
    });
    group.finish();
}

/// Benchmark reads
fn bench_get(c: &mut Criterion) {
    let store = setup_store();
    for id in 0..1000 {
        store
            .insert_element("products", id, sample_properties())
            .unwrap();
    }
    let counter = AtomicI64::new(0);

    let mut group = c.benchmark_group("store");
    group.throughput(Throughput::Elements(1));
    group.bench_function("get_element", |b| {
        b.iter(|| {
            let id = counter.fetch_add(1, Ordering::Relaxed) % 1000;
            store.get_element("products", id).unwrap()
        })
    });
    group.finish();
}

/// Benchmark generate_id with 4 threads on one collection
fn bench_generate_id_contention(c: &mut Criterion) {
    let store = Arc::new(setup_store());

    let mut group = c.benchmark_group("store_contention");
    group.throughput(Throughput::Elements(4 * 100));
    group.bench_function("generate_id_4_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let store = Arc::clone(&store);
                    thread::spawn(move || {
                        for _ in 0..100 {
                            store.generate_id("products").unwrap();
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_generate_id,
    bench_insert,
    bench_get,
    bench_generate_id_contention
);
criterion_main!(benches);
