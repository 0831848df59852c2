// In benches/pipeline_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rbtzip::{decode, encode};

/// Generates a vector of highly compressible data: long byte runs.
fn generate_run_heavy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut value = 0u8;
    while data.len() < size {
        let take = (size - data.len()).min(512);
        data.resize(data.len() + take, value);
        value = value.wrapping_add(1);
    }
    data
}

/// Generates a vector with no runs at all (worst case for RLE).
fn generate_run_free_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern: Vec<u8> = (0..=255u8).collect();
    while data.len() < size {
        data.extend_from_slice(&pattern);
    }
    data.truncate(size);
    data
}

const BENCH_DATA_SIZE: usize = 65536; // 64 KB

fn bench_container_pipeline(c: &mut Criterion) {
    let run_heavy = generate_run_heavy_bytes(BENCH_DATA_SIZE);
    let run_free = generate_run_free_bytes(BENCH_DATA_SIZE);

    let encoded_run_heavy = encode(&run_heavy).unwrap();
    let encoded_run_free = encode(&run_free).unwrap();

    let mut group = c.benchmark_group("Container Pipeline");
    group.throughput(criterion::Throughput::Bytes(BENCH_DATA_SIZE as u64));

    group.bench_function("Encode (Run-Heavy)", |b| {
        b.iter(|| black_box(encode(black_box(&run_heavy))))
    });
    group.bench_function("Encode (Run-Free)", |b| {
        b.iter(|| black_box(encode(black_box(&run_free))))
    });
    group.bench_function("Decode (Run-Heavy)", |b| {
        b.iter(|| black_box(decode(black_box(&encoded_run_heavy))))
    });
    group.bench_function("Decode (Run-Free)", |b| {
        b.iter(|| black_box(decode(black_box(&encoded_run_free))))
    });

    group.finish();
}

criterion_group!(benches, bench_container_pipeline);
criterion_main!(benches);
