//! Product repository benchmarks
//!
//! Each repository call is several store calls; these measure the facade
//! overhead on top of the in-memory store.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::sync::atomic::{AtomicI64, Ordering};
use strata_primitives::{Product, ProductRepository};
use strata_storage::InMemoryCollectionStore;

fn pen() -> Product {
    Product::new("Pen", "Office", 1.5, 10)
}

fn populated(count: i64) -> ProductRepository<InMemoryCollectionStore> {
    let repo = ProductRepository::new(InMemoryCollectionStore::new());
    for _ in 0..count {
        repo.add_product(&pen()).unwrap();
    }
    repo
}

/// add_product: exists check, id generation, insert
fn bench_add_product(c: &mut Criterion) {
    let repo = populated(0);

    let mut group = c.benchmark_group("repository");
    group.throughput(Throughput::Elements(1));
    group.bench_function("add_product", |b| {
        b.iter(|| repo.add_product(&pen()).unwrap())
    });
    group.finish();
}

/// get_product: two exists checks, fetch, decode
fn bench_get_product(c: &mut Criterion) {
    let repo = populated(1000);

    let mut group = c.benchmark_group("repository");
    group.throughput(Throughput::Elements(1));

    let counter = AtomicI64::new(0);
    group.bench_function("get_product", |b| {
        b.iter(|| {
            let id = counter.fetch_add(1, Ordering::Relaxed) % 1000 + 1;
            repo.get_product(id).unwrap()
        })
    });
    group.finish();
}

/// update_product: two exists checks, full replacement
fn bench_update_product(c: &mut Criterion) {
    let repo = populated(1000);

    let mut group = c.benchmark_group("repository");
    group.throughput(Throughput::Elements(1));

    let counter = AtomicI64::new(0);
    group.bench_function("update_product", |b| {
        b.iter(|| {
            let n = counter.fetch_add(1, Ordering::Relaxed);
            let product = pen().with_id(n % 1000 + 1);
            repo.update_product(&Product {
                units_in_stock: (n % 100) as i32,
                ..product
            })
            .unwrap()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_add_product,
    bench_get_product,
    bench_update_product
);
criterion_main!(benches);
