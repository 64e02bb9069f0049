use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dbits::{DynamicBitVector, NaiveBitVector};

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let n = 65536usize;

    group.bench_function("packed_front", |b| {
        b.iter(|| {
            let mut bv = DynamicBitVector::new(n).unwrap();
            for i in 0..n {
                bv.insert(0, i % 2 == 0).unwrap();
            }
            black_box(bv.rank())
        })
    });

    group.bench_function("packed_scattered", |b| {
        b.iter(|| {
            let mut bv = DynamicBitVector::new(n).unwrap();
            let mut state = 0x9E37_79B9u64;
            for _ in 0..n {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                let pos = (state >> 8) as usize % (bv.size() + 1);
                bv.insert(pos, state & 1 == 1).unwrap();
            }
            black_box(bv.rank())
        })
    });

    group.bench_function("naive_front", |b| {
        b.iter(|| {
            let mut nv = NaiveBitVector::new();
            for i in 0..n {
                nv.insert(0, i % 2 == 0);
            }
            black_box(nv.len())
        })
    });
    group.finish();
}

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("access");
    let n = 65536usize;
    let mut bv = DynamicBitVector::new(n).unwrap();
    for i in 0..n {
        bv.insert(i / 2, i % 3 == 0).unwrap();
    }

    group.bench_function("packed", |b| {
        b.iter(|| {
            let mut ones = 0usize;
            for i in 0..n {
                ones += usize::from(bv.access(i).unwrap());
            }
            black_box(ones)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_access);
criterion_main!(benches);
