use ark_bls12_381::Fr;
use ark_ff::UniformRand;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kzg_blob_core::{consts::FIELD_ELEMENTS_PER_BLOB, domain::Domain};
use std::time::Duration;

fn bench_lagrange_eval(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let domain = Domain::new(FIELD_ELEMENTS_PER_BLOB as u64).unwrap();
    let poly: Vec<Fr> = (0..FIELD_ELEMENTS_PER_BLOB)
        .map(|_| Fr::rand(&mut rng))
        .collect();

    c.bench_function("bench_evaluate_lagrange_polynomial", |b| {
        let z = Fr::rand(&mut rng);
        b.iter(|| {
            domain
                .evaluate_lagrange_polynomial(black_box(&poly), black_box(&z))
                .unwrap()
        });
    });

    for num_polys in [4, 16] {
        let polys: Vec<Vec<Fr>> = vec![poly.clone(); num_polys];
        let points: Vec<Fr> = (0..num_polys).map(|_| Fr::rand(&mut rng)).collect();
        c.bench_function(&format!("bench_evaluate_lagrange_polynomials_{}", num_polys), |b| {
            b.iter(|| {
                domain
                    .evaluate_lagrange_polynomials(black_box(&polys), black_box(&points))
                    .unwrap()
            });
        });
    }

    c.bench_function("bench_fft_4096", |b| {
        b.iter(|| domain.fft(black_box(&poly)).unwrap());
    });
}

fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(5)) // Warm-up time
        .measurement_time(Duration::from_secs(10)) // Measurement time
        .sample_size(10) // Number of samples to take
}

criterion_group!(
    name = benches;
    config = criterion_config();
    targets = bench_lagrange_eval
);
criterion_main!(benches);
