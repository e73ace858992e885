//! Criterion micro-benchmarks for buffer updates and typed-index access.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tessel_bench::pattern_bytes;
use tessel_core::VertexIndex;
use tessel_store::{Buffer, FixedBuffer, IndexStore, IndexVec, OwnedBuffer};

fn bench_buffer_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_update");
    for &size in &[64usize, 4096, 262_144] {
        let payload = pattern_bytes(size, 42);
        group.bench_function(format!("whole_replace/{size}"), |b| {
            let mut buf = OwnedBuffer::with_capacity(size);
            b.iter(|| {
                buf.update(black_box(&payload)).unwrap();
                black_box(buf.len());
            });
        });
    }
    group.finish();
}

fn bench_buffer_update_at(c: &mut Criterion) {
    let payload = pattern_bytes(256, 7);
    c.bench_function("buffer_update_at/append_256", |b| {
        b.iter(|| {
            let mut buf = OwnedBuffer::new();
            for i in 0..64 {
                buf.update_at(i * payload.len(), black_box(&payload)).unwrap();
            }
            black_box(buf.len());
        });
    });

    c.bench_function("buffer_update_at/fixed_in_place_256", |b| {
        let mut backing = vec![0u8; 64 * payload.len()];
        b.iter(|| {
            let mut buf = FixedBuffer::new(&mut backing);
            for i in 0..64 {
                buf.update_at(i * payload.len(), black_box(&payload)).unwrap();
            }
            black_box(buf.update_count());
        });
    });
}

fn bench_write_to(c: &mut Criterion) {
    let payload = pattern_bytes(262_144, 3);
    let mut buf = OwnedBuffer::new();
    buf.update(&payload).unwrap();
    c.bench_function("buffer_write_to/256k", |b| {
        let mut sink = Vec::with_capacity(payload.len());
        b.iter(|| {
            sink.clear();
            buf.write_to(&mut sink);
            black_box(sink.len());
        });
    });
}

fn bench_index_vec(c: &mut Criterion) {
    c.bench_function("index_vec/push_10k", |b| {
        b.iter(|| {
            let mut v: IndexVec<VertexIndex, u32> = IndexVec::with_capacity(10_000);
            for i in 0..10_000u32 {
                v.push(black_box(i)).unwrap();
            }
            black_box(v.len());
        });
    });

    c.bench_function("index_vec/checked_read_10k", |b| {
        let v: IndexVec<VertexIndex, u32> = IndexVec::from_elem(10_000, 5);
        b.iter(|| {
            let mut acc = 0u64;
            for i in 0..10_000u32 {
                acc += u64::from(*v.get(VertexIndex(black_box(i))).unwrap());
            }
            black_box(acc);
        });
    });
}

criterion_group!(
    benches,
    bench_buffer_update,
    bench_buffer_update_at,
    bench_write_to,
    bench_index_vec
);
criterion_main!(benches);
