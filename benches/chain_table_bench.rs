use chain_hashmap::{ChainHashMap, StdRandom};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn populated(capacity: usize, n: usize, seed: u64) -> (ChainHashMap, Vec<String>) {
    let mut t = ChainHashMap::with_strategy(capacity, StdRandom::new()).unwrap();
    let keys: Vec<_> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        t.put(k, i as i64).unwrap();
    }
    (t, keys)
}

fn bench_put(c: &mut Criterion) {
    c.bench_function("chain_table_put_10k_cap1024", |b| {
        let keys: Vec<_> = lcg(1).take(10_000).map(key).collect();
        b.iter_batched(
            || ChainHashMap::with_strategy(1024, StdRandom::new()).unwrap(),
            |mut t| {
                for (i, k) in keys.iter().enumerate() {
                    t.put(k, i as i64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("chain_table_get_hit", |b| {
        let (t, keys) = populated(1024, 10_000, 7);
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.get(k).unwrap());
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("chain_table_get_miss", |b| {
        let (t, _keys) = populated(1024, 10_000, 11);
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // keys from a disjoint generator stream, absent with near certainty
            let k = key(miss.next().unwrap());
            black_box(t.get(&k).is_err());
        })
    });
}

fn bench_iterate(c: &mut Criterion) {
    c.bench_function("chain_table_iterate_10k", |b| {
        let (t, _keys) = populated(1024, 10_000, 23);
        b.iter(|| {
            let mut sum = 0i64;
            for (_k, v) in t.iter() {
                sum = sum.wrapping_add(v);
            }
            black_box(sum)
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_put, bench_get_hit, bench_get_miss, bench_iterate
}
criterion_main!(benches);
