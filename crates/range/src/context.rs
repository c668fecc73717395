//! `BulletproofsContext` — a single facade over the four external operations
//! (`configure`, `prove_range`, `verify_range`, `prove_multi`, `verify_multi`)
//! so a caller that only cares about the range-proof system's public surface
//! doesn't need to reach into [`RangeProver`]/[`RangeVerifier`]/
//! [`AggregateRangeProver`]/[`AggregateRangeVerifier`] directly.
//!
//! Internally it's a thin wrapper: one [`GeneratorSet`] shared by a prover and
//! verifier pair per value count, rebuilt whenever `configure` asks for a
//! different bit length.

use crate::prover::{AggregateRangeProver, RangeProver};
use crate::verifier::{AggregateRangeVerifier, RangeVerifier};
use crate::RangeProof;
use bulletproofs_core::{BulletproofsResult, GeneratorSet, GroupElement, Scalar};
use rand_core::{CryptoRng, RngCore};

/// Facade implementing the external interface: a CRS sized for `bits`-bit
/// values, with `configure` free to resize it for a new bit length.
#[derive(Debug, Clone)]
pub struct BulletproofsContext {
    generators: GeneratorSet,
    bits: usize,
}

impl BulletproofsContext {
    /// Build a context whose CRS supports single-value proofs over `bits`-bit
    /// ranges. Aggregate proofs over `m` values reuse this same context by
    /// growing the CRS on demand inside `prove_multi`/`verify_multi`.
    pub fn new(bits: usize) -> Self {
        Self { generators: GeneratorSet::new(bits), bits }
    }

    /// Rebuild the CRS for a new bit length. Per the CRS's determinism
    /// (§4.3), this produces exactly the same generators as `Self::new(n)`
    /// would — `configure` exists for callers that want to reuse a context
    /// value across bit-length changes rather than constructing a new one.
    pub fn configure(&mut self, n: usize) {
        self.generators = GeneratorSet::new(n);
        self.bits = n;
    }

    pub fn generators(&self) -> &GeneratorSet {
        &self.generators
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Prove `v ∈ [0, 2^bits)` under blinding `gamma`. The out-of-range case
    /// is a caller error per §7's "programming error" classification; this
    /// returns `Err` rather than panicking so a long-running verifier process
    /// embedding this context isn't forced to abort on malformed input.
    pub fn prove_range<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        v: u64,
        gamma: &Scalar,
    ) -> BulletproofsResult<RangeProof> {
        RangeProver::with_generators(self.generators.clone(), self.bits).prove_range(rng, v, gamma)
    }

    /// Returns `true` only if `proof` attests that `commitment` opens to a
    /// value in `[0, 2^bits)`.
    pub fn verify_range(&self, commitment: &GroupElement, proof: &RangeProof) -> bool {
        RangeVerifier::with_generators(self.generators.clone(), self.bits)
            .verify_range(commitment, proof)
    }

    /// Prove that every `values[j] ∈ [0, 2^bits)`, blinded respectively by
    /// `gammas[j]`, returning the proof alongside the commitments
    /// `{V_j = values[j]*g + gammas[j]*h}` the verifier will need.
    pub fn prove_multi<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        values: &[u64],
        gammas: &[Scalar],
    ) -> BulletproofsResult<(RangeProof, Vec<GroupElement>)> {
        let prover = AggregateRangeProver::with_generators(self.generators.clone(), self.bits);
        let proof = prover.prove_multi(rng, values, gammas)?;
        let commitments = values
            .iter()
            .zip(gammas.iter())
            .map(|(&v, gamma)| prover.generators().commit_value(&Scalar::from(v), gamma))
            .collect();
        Ok((proof, commitments))
    }

    /// Returns `true` only if `proof` attests that every commitment in
    /// `commitments` opens to a value in `[0, 2^bits)`.
    pub fn verify_multi(&self, commitments: &[GroupElement], proof: &RangeProof) -> bool {
        AggregateRangeVerifier::with_generators(self.generators.clone(), self.bits)
            .verify_multi(commitments, proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn single_value_round_trip_through_context() {
        let mut rng = thread_rng();
        let ctx = BulletproofsContext::new(8);
        let gamma = Scalar::random(&mut rng);
        let proof = ctx.prove_range(&mut rng, 200, &gamma).unwrap();
        let commitment = ctx.generators().commit_value(&Scalar::from(200u64), &gamma);
        assert!(ctx.verify_range(&commitment, &proof));
    }

    #[test]
    fn aggregate_round_trip_through_context() {
        let mut rng = thread_rng();
        let mut ctx = BulletproofsContext::new(16);
        ctx.configure(16 * 4);
        let values = vec![6u64, 7, 4, 0];
        let gammas: Vec<Scalar> = (0..values.len()).map(|_| Scalar::random(&mut rng)).collect();
        let (proof, commitments) = ctx.prove_multi(&mut rng, &values, &gammas).unwrap();
        assert!(ctx.verify_multi(&commitments, &proof));
    }

    #[test]
    fn reconfigure_rejects_stale_proof_shape() {
        let mut rng = thread_rng();
        let mut ctx = BulletproofsContext::new(8);
        let gamma = Scalar::random(&mut rng);
        let proof = ctx.prove_range(&mut rng, 42, &gamma).unwrap();
        let commitment = ctx.generators().commit_value(&Scalar::from(42u64), &gamma);

        ctx.configure(16);
        assert!(!ctx.verify_range(&commitment, &proof));
    }
}
