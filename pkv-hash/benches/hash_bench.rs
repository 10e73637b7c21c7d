//! Benchmarks for the checksum and hash suite.
//!
//! Run with:
//!     cargo bench -p pkv-hash

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use pkv_hash::{Checksum16, ChecksumType, Hash32, HashType};

fn bench_checksums(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum16");
    let data: Vec<u8> = (0..64 * 1024).map(|i| (i * 7 + 13) as u8).collect();
    group.throughput(Throughput::Bytes(data.len() as u64));

    for t in ChecksumType::ALL {
        let checksum = t.create();
        group.bench_function(t.name(), |b| b.iter(|| checksum.compute(black_box(&data))));
    }

    group.finish();
}

fn bench_subkey_hashes(c: &mut Criterion) {
    // Subkeys always hash four bytes, so that is the size that matters.
    let mut group = c.benchmark_group("hash32_subkey");
    let payload = 0xCAFE_BABE_u32.to_le_bytes();

    for t in HashType::ALL {
        let hash = t.create_seeded(0);
        group.bench_function(t.name(), |b| b.iter(|| hash.compute(black_box(&payload))));
    }

    group.finish();
}

criterion_group!(benches, bench_checksums, bench_subkey_hashes);
criterion_main!(benches);
