/// Insert, exact and closest-spelling lookup over address-like keys.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::SliceRandom;
use rand::{thread_rng, Rng};

use ptrie::{BitKey, PatriciaTree};

const TREE_SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 17];

const STREETS: [&str; 8] = [
    "MAIN", "HIGH", "STATION", "CHURCH", "MILL", "PARK", "VICTORIA", "ELIZABETH",
];
const TYPES: [&str; 4] = ["STREET", "ROAD", "AVENUE", "LANE"];

fn gen_addresses(count: usize) -> Vec<String> {
    let mut rng = thread_rng();
    (0..count)
        .map(|_| {
            format!(
                "{} {} {}",
                rng.gen_range(1..2_000),
                STREETS.choose(&mut rng).unwrap(),
                TYPES.choose(&mut rng).unwrap()
            )
        })
        .collect()
}

// Swaps two adjacent characters, which almost never lands on a stored key.
fn misspell(key: &str) -> String {
    let mut bytes = key.as_bytes().to_vec();
    let mid = bytes.len() / 2;
    bytes.swap(mid - 1, mid);
    String::from_utf8_lossy(&bytes).into_owned()
}

fn build(keys: &[String]) -> PatriciaTree<usize> {
    let mut tree = PatriciaTree::new();
    for (i, key) in keys.iter().enumerate() {
        tree.insert(key, i);
    }
    tree
}

pub fn rand_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_insert");
    group.throughput(Throughput::Elements(1));

    let keys = gen_addresses(1 << 14);
    let cached_keys: Vec<BitKey> = keys.iter().map(BitKey::from).collect();

    group.bench_function("cached_keys", |b| {
        let mut tree = PatriciaTree::new();
        let mut rng = thread_rng();
        b.iter(|| {
            let key = &cached_keys[rng.gen_range(0..cached_keys.len())];
            tree.insert_k(key, 0usize);
        })
    });

    group.bench_function("uncached_keys", |b| {
        let mut tree = PatriciaTree::new();
        let mut rng = thread_rng();
        b.iter(|| {
            let key = &keys[rng.gen_range(0..keys.len())];
            tree.insert(key, 0usize);
        })
    });

    group.finish();
}

pub fn rand_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_exact");
    group.throughput(Throughput::Elements(1));
    for size in TREE_SIZES {
        let keys = gen_addresses(size);
        let tree = build(&keys);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut rng = thread_rng();
            b.iter(|| {
                let key = &keys[rng.gen_range(0..keys.len())];
                criterion::black_box(tree.search_exact(key));
            })
        });
    }
    group.finish();
}

pub fn rand_spell(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_spell");
    group.throughput(Throughput::Elements(1));
    for size in TREE_SIZES {
        let keys = gen_addresses(size);
        let tree = build(&keys);
        let queries: Vec<String> = keys.iter().take(1_024).map(|k| misspell(k)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut rng = thread_rng();
            b.iter(|| {
                let query = &queries[rng.gen_range(0..queries.len())];
                criterion::black_box(tree.search_spell(query));
            })
        });
    }
    group.finish();
}

pub fn seq_drop(c: &mut Criterion) {
    let keys = gen_addresses(1 << 14);
    c.bench_function("seq_drop", |b| {
        b.iter_with_setup(|| build(&keys), |tree| tree.destroy(|_| {}))
    });
}

criterion_group!(benches, rand_insert, rand_exact, rand_spell, seq_drop);
criterion_main!(benches);
