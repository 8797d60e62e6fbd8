use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use shamir_sss::{ShamirSss, ShareEncoding};

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");

    // Benchmark different secret sizes (1, 8 and 32 chunks)
    for size in [32, 256, 1024].iter() {
        let secret = vec![0x5au8; *size];
        let mut scheme = ShamirSss::new(3, 6).unwrap();

        group.bench_function(format!("create_{}_bytes", size), |b| {
            b.iter(|| {
                black_box(scheme.create(black_box(&secret)).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");

    for size in [32, 256, 1024].iter() {
        let secret = vec![0x5au8; *size];
        let mut scheme = ShamirSss::new(3, 6).unwrap();
        let shares = scheme.create(&secret).unwrap();

        group.bench_function(format!("combine_{}_bytes", size), |b| {
            b.iter(|| {
                black_box(
                    ShamirSss::combine(black_box(&shares[0..3]), ShareEncoding::Base64).unwrap(),
                );
            });
        });
    }

    group.finish();
}

fn bench_full_workflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_workflow");

    for size in [32, 256].iter() {
        let secret = vec![0x5au8; *size];

        group.bench_function(format!("workflow_{}_bytes", size), |b| {
            b.iter(|| {
                let mut scheme = ShamirSss::new(3, 6).unwrap();
                let shares = scheme.create(black_box(&secret)).unwrap();
                black_box(ShamirSss::combine(&shares[0..3], ShareEncoding::Base64).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_create, bench_combine, bench_full_workflow);
criterion_main!(benches);
