use nacl_primitives::derivation::{ScryptParams, scrypt};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_scrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrypt");
    group.sample_size(10);

    for n in [1u64 << 10, 1 << 14] {
        let params = ScryptParams::new(n, 8, 1, 64).unwrap();
        group.bench_function(format!("N={n} r=8 p=1"), |b| {
            b.iter(|| scrypt(black_box(b"password"), black_box(b"salt"), &params))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scrypt);
criterion_main!(benches);
