use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ringdeque::RingDeque;
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 1024;
    {
        let mut group = c.benchmark_group("VecDeque vs RingDeque (PushBack 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("RingDeque<i32>", |b| {
            b.iter(|| {
                let mut d = RingDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs RingDeque (AlternatingEnds 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    if i % 2 == 0 {
                        d.push_back(black_box(i as i32));
                    } else {
                        d.push_front(black_box(i as i32));
                    }
                }
                while d.len() > 1 {
                    let _ = d.pop_front();
                    let _ = d.pop_back();
                }
                d
            })
        });

        group.bench_function("RingDeque<i32>", |b| {
            b.iter(|| {
                let mut d = RingDeque::new();
                for i in 0..n {
                    if i % 2 == 0 {
                        d.push_back(black_box(i as i32));
                    } else {
                        d.push_front(black_box(i as i32));
                    }
                }
                while d.len() > 1 {
                    let _ = d.pop_front();
                    let _ = d.pop_back();
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs RingDeque (Get 1024)");
        let mut d_std = VecDeque::new();
        let mut d_ring = RingDeque::new();
        for i in 0..n {
            d_std.push_back(i as i32);
            d_ring.push_back(i as i32);
        }

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("RingDeque<i32>", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_ring.get(black_box(i)));
                }
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);
