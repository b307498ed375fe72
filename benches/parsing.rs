
use criterion::{Criterion, criterion_group, criterion_main};
use document_generator::generate_ini;
use inistore::IniStore;

fn parsing_benchmarks(c: &mut Criterion) {
    // Generate documents of different sizes
    let small = generate_ini(5, 10);
    let medium = generate_ini(20, 15);
    let large = generate_ini(100, 10);
    let xlarge = generate_ini(500, 20);

    let mut group = c.benchmark_group("parsing");

    group.bench_function("small_50_keys", |b| {
        b.iter(|| {
            let mut store = IniStore::new();
            store.parse(&small).unwrap()
        })
    });

    group.bench_function("medium_300_keys", |b| {
        b.iter(|| {
            let mut store = IniStore::new();
            store.parse(&medium).unwrap()
        })
    });

    group.bench_function("large_1000_keys", |b| {
        b.iter(|| {
            let mut store = IniStore::new();
            store.parse(&large).unwrap()
        })
    });

    group.bench_function("xlarge_10000_keys", |b| {
        b.iter(|| {
            let mut store = IniStore::new();
            store.parse(&xlarge).unwrap()
        })
    });

    group.finish();
}

fn serialization_benchmarks(c: &mut Criterion) {
    let large = generate_ini(100, 10);
    let mut store = IniStore::new();
    store.parse(&large).unwrap();

    let mut group = c.benchmark_group("serialization");

    group.bench_function("serialize_1000_keys", |b| b.iter(|| store.serialize()));

    group.finish();
}

criterion_group!(benches, parsing_benchmarks, serialization_benchmarks);
criterion_main!(benches);
