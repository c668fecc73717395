//! Range proof prover implementation (C7 single-value, C8 aggregate).

use crate::constraints::{calculate_l, calculate_r, h_prime_vec, z_power_twos_vector};
use crate::RangeProof;
use bulletproofs_core::{
    bulletproofs_transcript, utils::*, BulletproofsError, BulletproofsResult, GeneratorSet,
    GroupElement, Scalar, TranscriptProtocol,
};
use ipa::InnerProductProver;
use merlin::Transcript;
use rand_core::{CryptoRng, RngCore};

/// Build a range proof attesting that each of `values` lies in `[0, 2^bits_per_value)`,
/// blinded respectively by `gammas`. `values.len() == gammas.len() == m`; `m == 1` is the
/// single-value proof, `m > 1` the aggregate proof — the same polynomial machinery serves
/// both, with every per-slot quantity weighted by `z^{2+j}` for slot `j`.
fn build_range_proof<R: RngCore + CryptoRng>(
    generators: &GeneratorSet,
    bits_per_value: usize,
    values: &[u64],
    gammas: &[Scalar],
    rng: &mut R,
    transcript: &mut Transcript,
) -> BulletproofsResult<RangeProof> {
    if bits_per_value == 0 || bits_per_value > 64 {
        return Err(BulletproofsError::InvalidParameters(
            "bits_per_value must be between 1 and 64".to_string(),
        ));
    }
    let m = values.len();
    if m == 0 {
        return Err(BulletproofsError::InvalidParameters(
            "at least one value is required".to_string(),
        ));
    }
    if gammas.len() != m {
        return Err(BulletproofsError::VectorLengthMismatch {
            expected: m,
            actual: gammas.len(),
        });
    }
    for &v in values {
        if bits_per_value < 64 && v >= (1u64 << bits_per_value) {
            return Err(BulletproofsError::RangeConstraintViolation { value: v, bits: bits_per_value });
        }
    }

    let nm = bits_per_value * m;
    if !is_power_of_two(nm) {
        return Err(BulletproofsError::InvalidParameters(
            "bits_per_value * values.len() must be a power of two".to_string(),
        ));
    }
    let mut generators = generators.clone();
    generators.ensure_capacity(nm);

    let a_l: Vec<Scalar> = values
        .iter()
        .flat_map(|&v| bit_decomposition(v, bits_per_value))
        .collect();
    let a_r = vector_add_scalar(&a_l, &(-Scalar::ONE));

    let alpha = Scalar::random(rng);
    let rho = Scalar::random(rng);
    let s_l: Vec<Scalar> = (0..nm).map(|_| Scalar::random(rng)).collect();
    let s_r: Vec<Scalar> = (0..nm).map(|_| Scalar::random(rng)).collect();

    let a_commit = generators.vector_commit(&a_l, &a_r)? + generators.h_generator() * alpha;
    let s_commit = generators.vector_commit(&s_l, &s_r)? + generators.h_generator() * rho;

    transcript.append_point(b"A", &a_commit);
    transcript.append_point(b"S", &s_commit);

    let y = transcript.challenge_scalar(b"y");
    if y == Scalar::ZERO {
        return Err(BulletproofsError::ZeroChallenge);
    }
    let z = transcript.challenge_scalar(b"z");
    if z == Scalar::ZERO {
        return Err(BulletproofsError::ZeroChallenge);
    }

    let y_vec = scalar_powers(&y, nm);
    let z_pow_twos = z_power_twos_vector(&z, bits_per_value, m);

    // l(X) = l0 + l1*X, r(X) = r0 + r1*X
    let l0 = vector_add_scalar(&a_l, &(-z));
    let l1 = s_l.clone();
    let r0 = vector_add(&hadamard_product(&y_vec, &vector_add_scalar(&a_r, &z))?, &z_pow_twos)?;
    let r1 = hadamard_product(&y_vec, &s_r)?;

    let t0 = inner_product(&l0, &r0)?;
    let t2 = inner_product(&l1, &r1)?;
    let l_sum = vector_add(&l0, &l1)?;
    let r_sum = vector_add(&r0, &r1)?;
    let t1 = inner_product(&l_sum, &r_sum)? - t0 - t2;

    let tau1 = Scalar::random(rng);
    let tau2 = Scalar::random(rng);
    let t1_commit = generators.g_generator() * t1 + generators.h_generator() * tau1;
    let t2_commit = generators.g_generator() * t2 + generators.h_generator() * tau2;

    transcript.append_point(b"T1", &t1_commit);
    transcript.append_point(b"T2", &t2_commit);

    let x = transcript.challenge_scalar(b"x");
    if x == Scalar::ZERO {
        return Err(BulletproofsError::ZeroChallenge);
    }

    let l = calculate_l(&a_l, &s_l, &z, &x)?;
    let r = calculate_r(&a_r, &s_r, &y_vec, &z_pow_twos, &z, &x)?;
    let t_hat = inner_product(&l, &r)?;
    debug_assert_eq!(
        t_hat,
        t0 + t1 * x + t2 * x * x,
        "t(x) evaluated out-of-band disagrees with t0 + t1*x + t2*x^2"
    );

    let mut z_pow = z * z;
    let mut tau_x = tau2 * x * x + tau1 * x;
    for gamma in gammas {
        tau_x += z_pow * gamma;
        z_pow *= z;
    }
    let mu = alpha + rho * x;

    let h_prime = h_prime_vec(generators.h_vec(), &y_vec);
    let reduced_generators = GeneratorSet {
        g: generators.g,
        h: generators.h,
        g_vec: generators.g_vec()[..nm].to_vec(),
        h_vec: h_prime,
        u: generators.u,
    };

    let mut ipa_prover = InnerProductProver::new(reduced_generators);
    let ipp = ipa_prover.prove(transcript, &l, &r)?;

    Ok(RangeProof {
        a: a_commit.compress(),
        s: s_commit.compress(),
        t1: t1_commit.compress(),
        t2: t2_commit.compress(),
        tau: tau_x,
        t_hat,
        mu,
        ipp,
    })
}

/// Single-value range prover: proves a committed value lies in `[0, 2^bits)`.
#[derive(Debug, Clone)]
pub struct RangeProver {
    generators: GeneratorSet,
    bits: usize,
}

impl RangeProver {
    pub fn new(bits: usize) -> Self {
        Self { generators: GeneratorSet::new(bits), bits }
    }

    pub fn with_generators(generators: GeneratorSet, bits: usize) -> Self {
        Self { generators, bits }
    }

    pub fn generators(&self) -> &GeneratorSet {
        &self.generators
    }

    /// Prove that `v` lies in `[0, 2^bits)` under the given blinding `gamma`.
    /// The Pedersen commitment `V = v*g + gamma*h` is left to the caller to
    /// compute and publish; it is not carried in the proof.
    pub fn prove_range<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        v: u64,
        gamma: &Scalar,
    ) -> BulletproofsResult<RangeProof> {
        let mut transcript = bulletproofs_transcript(b"range_proof");
        build_range_proof(&self.generators, self.bits, &[v], &[*gamma], rng, &mut transcript)
    }

    /// Prove `v`'s range using a freshly sampled blinding factor, returning
    /// both the proof and the blinding used (so the caller can publish
    /// `V = v*g + gamma*h`).
    pub fn prove_range_random<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        v: u64,
    ) -> BulletproofsResult<(RangeProof, Scalar)> {
        let gamma = Scalar::random(rng);
        let proof = self.prove_range(rng, v, &gamma)?;
        Ok((proof, gamma))
    }
}

/// Aggregate range prover: proves `m` committed values each lie in `[0, 2^bits)`
/// with one proof whose size grows with `log2(bits * m)` rather than linearly in `m`.
#[derive(Debug, Clone)]
pub struct AggregateRangeProver {
    generators: GeneratorSet,
    bits: usize,
}

impl AggregateRangeProver {
    pub fn new(bits: usize, max_values: usize) -> Self {
        Self { generators: GeneratorSet::new(bits * max_values.max(1)), bits }
    }

    pub fn with_generators(generators: GeneratorSet, bits: usize) -> Self {
        Self { generators, bits }
    }

    pub fn generators(&self) -> &GeneratorSet {
        &self.generators
    }

    pub fn prove_multi<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        values: &[u64],
        gammas: &[Scalar],
    ) -> BulletproofsResult<RangeProof> {
        let mut transcript = bulletproofs_transcript(b"aggregate_range_proof");
        build_range_proof(&self.generators, self.bits, values, gammas, rng, &mut transcript)
    }
}
