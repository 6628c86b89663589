use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hotset::{LruCache, SharedCache};

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_warm", |b| {
        let mut cache = LruCache::new(1000);
        for i in 0..1000u64 {
            cache.put(i, i);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 1000)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_put_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_churn");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_evicting", |b| {
        let mut cache = LruCache::new(100);
        for i in 0..100u64 {
            cache.put(i, i);
        }

        // every insert from here on displaces the tail
        let mut counter = 100u64;
        b.iter(|| {
            black_box(cache.put(counter, counter));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_get_50_put", |b| {
        let mut cache = LruCache::new(500);
        for i in 0..500u64 {
            cache.put(i, i);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 500)));
            } else {
                black_box(cache.put(counter, counter));
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_shared_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("locked_get_warm", |b| {
        let cache = SharedCache::new(1000);
        for i in 0..1000u64 {
            cache.put(i, i);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 1000)));
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_put_churn,
    bench_mixed_50_50,
    bench_shared_get
);
criterion_main!(benches);
