use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ringdeque::RingDeque;

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("from_empty", size), size, |b, &size| {
            b.iter(|| {
                let mut deque = RingDeque::new();
                for i in 0..size {
                    deque.push_back(black_box(i));
                }
                black_box(deque.len())
            });
        });
        group.bench_with_input(
            BenchmarkId::new("preallocated", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut deque = RingDeque::with_capacity(size);
                    for i in 0..size {
                        deque.push_back(black_box(i));
                    }
                    black_box(deque.len())
                });
            },
        );
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("index_operations", size),
            size,
            |b, &size| {
                // Rotate half-way so lookups cross the wrap point
                let mut deque: RingDeque<usize> = (0..size).collect();
                for _ in 0..size / 2 {
                    let value = deque.pop_front();
                    deque.push_back(value);
                }

                b.iter(|| {
                    for i in 0..size {
                        black_box(deque[i]);
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("full_iteration", size),
            size,
            |b, &size| {
                let deque: RingDeque<usize> = (0..size).collect();

                b.iter(|| {
                    for value in black_box(&deque) {
                        black_box(value);
                    }
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("cursor_walk", size),
            size,
            |b, &size| {
                let deque: RingDeque<usize> = (0..size).collect();

                b.iter(|| {
                    let mut cursor = deque.begin();
                    while cursor != deque.end() {
                        black_box(deque.at(cursor));
                        cursor += 1;
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_middle_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("middle");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("insert_erase_quarter", size),
            size,
            |b, &size| {
                let mut deque: RingDeque<usize> = (0..size).collect();

                b.iter(|| {
                    let pos = deque.insert(deque.cursor_at(size / 4), black_box(0));
                    black_box(deque.erase(pos));
                });
            },
        );
    }
    group.finish();
}

fn bench_mixed_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_ends");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("push_pop_cycle", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut deque = RingDeque::new();

                    for i in 0..size {
                        deque.push_front(black_box(i));
                    }

                    for _ in 0..size {
                        black_box(deque.pop_back());
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("strings", size), size, |b, &size| {
            let deque: RingDeque<String> = (0..size).map(|i| format!("element_{i}")).collect();

            b.iter(|| black_box(deque.clone()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_random_access,
    bench_iterator_performance,
    bench_middle_operations,
    bench_mixed_ends,
    bench_clone
);
criterion_main!(benches);
