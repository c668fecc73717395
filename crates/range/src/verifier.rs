//! Range proof verifier implementation (C7 single-value, C8 aggregate).

use crate::constraints::{delta, h_prime_vec, z_power_twos_vector};
use crate::RangeProof;
use bulletproofs_core::{
    bulletproofs_transcript, utils::*, BulletproofsError, BulletproofsResult, GeneratorSet,
    GroupElement, Scalar, TranscriptProtocol,
};
use ipa::InnerProductVerifier;
use merlin::Transcript;

/// Verify a range proof against `commitments` (length `m`, the values the proof attests to),
/// under the same `bits_per_value` the prover used.
fn verify_range_proof(
    generators: &GeneratorSet,
    bits_per_value: usize,
    commitments: &[GroupElement],
    proof: &RangeProof,
    transcript: &mut Transcript,
) -> BulletproofsResult<()> {
    proof.validate_structure()?;

    if bits_per_value == 0 || bits_per_value > 64 {
        return Err(BulletproofsError::InvalidParameters(
            "bits_per_value must be between 1 and 64".to_string(),
        ));
    }
    let m = commitments.len();
    if m == 0 {
        return Err(BulletproofsError::InvalidParameters(
            "at least one commitment is required".to_string(),
        ));
    }

    let nm = bits_per_value * m;
    if !is_power_of_two(nm) {
        return Err(BulletproofsError::InvalidParameters(
            "bits_per_value * commitments.len() must be a power of two".to_string(),
        ));
    }
    let mut generators = generators.clone();
    generators.ensure_capacity(nm);

    let a_commit = GroupElement::from_compressed(&proof.a)?;
    let s_commit = GroupElement::from_compressed(&proof.s)?;
    let t1_commit = GroupElement::from_compressed(&proof.t1)?;
    let t2_commit = GroupElement::from_compressed(&proof.t2)?;

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

    transcript.append_point(b"T1", &t1_commit);
    transcript.append_point(b"T2", &t2_commit);

    let x = transcript.challenge_scalar(b"x");
    if x == Scalar::ZERO {
        return Err(BulletproofsError::ZeroChallenge);
    }

    let y_vec = scalar_powers(&y, nm);

    // t(x)*g + tau*h =?= delta(y,z,n,m)*g + x*T1 + x^2*T2 + sum_j z^{2+j}*V_j
    let delta_yz = delta(&y_vec, &z, bits_per_value, m);
    let lhs = generators.g_generator() * proof.t_hat + generators.h_generator() * proof.tau;
    let mut rhs = generators.g_generator() * delta_yz + t1_commit * x + t2_commit * (x * x);
    let mut z_pow = z * z;
    for v in commitments {
        rhs = rhs + *v * z_pow;
        z_pow *= z;
    }
    if lhs != rhs {
        return Err(BulletproofsError::VerificationFailed);
    }

    // Reduced commitment P = A + x*S - mu*h + <-z*1, G> + <z*y_vec + z_pow_twos, H'>
    let z_pow_twos = z_power_twos_vector(&z, bits_per_value, m);
    let neg_z_ones = vec![-z; nm];
    let h_prime_coeffs = vector_add(&vector_scale(&y_vec, &z), &z_pow_twos)?;
    let h_prime = h_prime_vec(generators.h_vec(), &y_vec);

    let cross_term = GroupElement::multiscalar_mul(
        neg_z_ones.into_iter().chain(h_prime_coeffs.into_iter()),
        generators.g_vec()[..nm].iter().cloned().chain(h_prime.iter().cloned()),
    );

    let p = a_commit + s_commit * x - generators.h_generator() * proof.mu + cross_term;

    let reduced_generators = GeneratorSet {
        g: generators.g,
        h: generators.h,
        g_vec: generators.g_vec()[..nm].to_vec(),
        h_vec: h_prime,
        u: generators.u,
    };

    let mut ipa_verifier = InnerProductVerifier::new(reduced_generators);
    let ok = ipa_verifier.verify(transcript, &proof.ipp, &p, &proof.t_hat, nm)?;
    if !ok {
        return Err(BulletproofsError::VerificationFailed);
    }

    Ok(())
}

/// Single-value range verifier.
#[derive(Debug, Clone)]
pub struct RangeVerifier {
    generators: GeneratorSet,
    bits: usize,
}

impl RangeVerifier {
    pub fn new(bits: usize) -> Self {
        Self { generators: GeneratorSet::new(bits), bits }
    }

    pub fn with_generators(generators: GeneratorSet, bits: usize) -> Self {
        Self { generators, bits }
    }

    pub fn generators(&self) -> &GeneratorSet {
        &self.generators
    }

    /// Returns `true` only if `proof` attests that `commitment` opens to a
    /// value in `[0, 2^bits)`. All internal algebraic failures collapse to
    /// `false` rather than surfacing an error to the caller.
    pub fn verify_range(&self, commitment: &GroupElement, proof: &RangeProof) -> bool {
        let mut transcript = bulletproofs_transcript(b"range_proof");
        verify_range_proof(&self.generators, self.bits, &[*commitment], proof, &mut transcript).is_ok()
    }
}

/// Aggregate range verifier.
#[derive(Debug, Clone)]
pub struct AggregateRangeVerifier {
    generators: GeneratorSet,
    bits: usize,
}

impl AggregateRangeVerifier {
    pub fn new(bits: usize, max_values: usize) -> Self {
        Self { generators: GeneratorSet::new(bits * max_values.max(1)), bits }
    }

    pub fn with_generators(generators: GeneratorSet, bits: usize) -> Self {
        Self { generators, bits }
    }

    pub fn generators(&self) -> &GeneratorSet {
        &self.generators
    }

    pub fn verify_multi(&self, commitments: &[GroupElement], proof: &RangeProof) -> bool {
        let mut transcript = bulletproofs_transcript(b"aggregate_range_proof");
        verify_range_proof(&self.generators, self.bits, commitments, proof, &mut transcript).is_ok()
    }
}
