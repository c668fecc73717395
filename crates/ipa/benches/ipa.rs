//! Benchmarks for inner product argument proving and verification.

use bulletproofs_core::{bulletproofs_transcript, utils::inner_product, GeneratorSet, Scalar};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ipa::{InnerProductProver, InnerProductVerifier};
use rand::thread_rng;

fn bench_ipa_prove(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipa_prove");

    for vector_length in [8, 16, 32, 64, 128] {
        group.throughput(Throughput::Elements(vector_length as u64));

        group.bench_with_input(
            BenchmarkId::new("prove", vector_length),
            &vector_length,
            |b, &vector_length| {
                let mut rng = thread_rng();
                let generators = GeneratorSet::new(vector_length);
                let mut prover = InnerProductProver::new(generators);

                let a: Vec<Scalar> = (0..vector_length).map(|_| Scalar::random(&mut rng)).collect();
                let bb: Vec<Scalar> = (0..vector_length).map(|_| Scalar::random(&mut rng)).collect();

                b.iter(|| {
                    let mut transcript = bulletproofs_transcript(b"ipa_benchmark");
                    let proof = prover.prove(&mut transcript, black_box(&a), black_box(&bb)).unwrap();
                    black_box(proof)
                });
            },
        );
    }

    group.finish();
}

fn bench_ipa_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipa_verify");

    for vector_length in [8, 16, 32, 64, 128] {
        group.throughput(Throughput::Elements(vector_length as u64));

        let mut rng = thread_rng();
        let generators = GeneratorSet::new(vector_length);
        let mut prover = InnerProductProver::new(generators.clone());
        let mut verifier = InnerProductVerifier::new(generators.clone());

        let a: Vec<Scalar> = (0..vector_length).map(|_| Scalar::random(&mut rng)).collect();
        let b: Vec<Scalar> = (0..vector_length).map(|_| Scalar::random(&mut rng)).collect();
        let commitment = generators.vector_commit(&a, &b).unwrap();
        let c_value = inner_product(&a, &b).unwrap();

        let mut prove_transcript = bulletproofs_transcript(b"ipa_benchmark");
        let proof = prover.prove(&mut prove_transcript, &a, &b).unwrap();

        group.bench_with_input(
            BenchmarkId::new("verify", vector_length),
            &vector_length,
            |bencher, &_vector_length| {
                bencher.iter(|| {
                    let mut transcript = bulletproofs_transcript(b"ipa_benchmark");
                    verifier
                        .verify(&mut transcript, black_box(&proof), &commitment, &c_value, vector_length)
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_ipa_proof_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipa_proof_size");
    let mut rng = thread_rng();

    for vector_length in [8, 16, 32, 64, 128] {
        let generators = GeneratorSet::new(vector_length);
        let mut prover = InnerProductProver::new(generators);

        let a: Vec<Scalar> = (0..vector_length).map(|_| Scalar::random(&mut rng)).collect();
        let b: Vec<Scalar> = (0..vector_length).map(|_| Scalar::random(&mut rng)).collect();

        let mut transcript = bulletproofs_transcript(b"ipa_benchmark");
        let proof = prover.prove(&mut transcript, &a, &b).unwrap();
        println!("IPA proof size for vector length {vector_length}: {} bytes", proof.size_bytes());
    }

    group.finish();
}

criterion_group!(benches, bench_ipa_prove, bench_ipa_verify, bench_ipa_proof_size);
criterion_main!(benches);
