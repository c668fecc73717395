//! Inner Product Argument verifier implementation
//!
//! Two independent verification strategies are provided, matching the
//! reference implementation's `InnerProductVerify` (recursive, generator by
//! generator) and `InnerProductVerifyFast` (closed-form `s` scalars, one
//! multi-scalar multiplication): `verify` is the fast path or production
//! verification; `verify_recursive` folds generators round by round and is
//! useful as an independent check that the fast path's `s` scalars are
//! correct (the two are asserted to agree in `property_tests`).

use crate::InnerProductProof;
use bulletproofs_core::{
    utils::*, BulletproofsError, BulletproofsResult, GeneratorSet, GroupElement, TranscriptProtocol,
};
use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;
use rayon::prelude::*;

/// Inner Product Argument verifier.
#[derive(Debug)]
pub struct InnerProductVerifier {
    generators: GeneratorSet,
}

struct Challenges {
    l_vec: Vec<GroupElement>,
    r_vec: Vec<GroupElement>,
    x: Vec<Scalar>,
    x_inv: Vec<Scalar>,
    p_prime: GroupElement,
    u_prime: GroupElement,
}

impl InnerProductVerifier {
    /// Create a new IPA verifier with the given generators.
    pub fn new(generators: GeneratorSet) -> Self {
        Self { generators }
    }

    /// Recompute the transcript-derived challenges shared by both
    /// verification strategies: appends `P`, derives `x0` and folds it into
    /// `u'` and `P'`, then derives each round's `(L, R, x)`.
    fn recompute_challenges(
        &mut self,
        transcript: &mut Transcript,
        proof: &InnerProductProof,
        p: &GroupElement,
        c: &Scalar,
        padded_n: usize,
    ) -> BulletproofsResult<Challenges> {
        self.generators.ensure_capacity(padded_n);

        transcript.append_point(b"P", p);
        let x0 = transcript.challenge_scalar(b"ipa_x0");
        if x0 == Scalar::ZERO {
            return Err(BulletproofsError::ZeroChallenge);
        }
        let u_prime = GroupElement::from(self.generators.u * x0);
        let p_prime = *p + u_prime * *c;

        let l_vec = proof.decompress_l_vec()?;
        let r_vec = proof.decompress_r_vec()?;

        let mut x = Vec::with_capacity(proof.num_rounds());
        for (l, r) in l_vec.iter().zip(r_vec.iter()) {
            transcript.append_point(b"L", l);
            transcript.append_point(b"R", r);
            let round_x = transcript.challenge_scalar(b"ipa_x");
            if round_x == Scalar::ZERO {
                return Err(BulletproofsError::ZeroChallenge);
            }
            x.push(round_x);
        }
        let x_inv: Vec<Scalar> = x.iter().map(Scalar::invert).collect();

        Ok(Challenges { l_vec, r_vec, x, x_inv, p_prime, u_prime })
    }

    fn expected_rounds(padded_n: usize) -> usize {
        if padded_n == 1 { 0 } else { (padded_n as f64).log2().round() as usize }
    }

    /// Fast verifier: closed-form `s` scalars folded into one multi-scalar
    /// multiplication against the original (unfolded) generators.
    pub fn verify(
        &mut self,
        transcript: &mut Transcript,
        proof: &InnerProductProof,
        p: &GroupElement,
        c: &Scalar,
        n: usize,
    ) -> BulletproofsResult<bool> {
        proof.validate_structure()?;
        if n == 0 {
            return Err(BulletproofsError::InvalidParameters("Vector length cannot be zero".to_string()));
        }

        let padded_n = if is_power_of_two(n) { n } else { next_power_of_two(n) };
        let expected_rounds = Self::expected_rounds(padded_n);
        if proof.num_rounds() != expected_rounds {
            return Err(BulletproofsError::InvalidProof(format!(
                "Expected {expected_rounds} rounds for vector length {n}, got {}",
                proof.num_rounds()
            )));
        }

        let ch = self.recompute_challenges(transcript, proof, p, c, padded_n)?;

        if ch.x.is_empty() {
            let expected = GroupElement::multiscalar_mul(
                [proof.a, proof.b],
                [self.generators.g_vec[0], self.generators.h_vec[0]],
            ) + ch.u_prime * (proof.a * proof.b);
            return Ok(ch.p_prime == expected);
        }

        let (s_l, s_r) = self.compute_s_scalars(&ch.x, &ch.x_inv, padded_n);

        let mut left_side = ch.p_prime;
        for (i, (l, r)) in ch.l_vec.iter().zip(ch.r_vec.iter()).enumerate() {
            let x_sq = ch.x[i] * ch.x[i];
            let x_inv_sq = ch.x_inv[i] * ch.x_inv[i];
            left_side = left_side + (*l * x_sq) + (*r * x_inv_sq);
        }

        let folded_g = GroupElement::multiscalar_mul(s_l.iter().cloned(), self.generators.g_vec[..padded_n].iter().cloned());
        let folded_h = GroupElement::multiscalar_mul(s_r.iter().cloned(), self.generators.h_vec[..padded_n].iter().cloned());
        let right_side = folded_g * proof.a + folded_h * proof.b + ch.u_prime * (proof.a * proof.b);

        Ok(left_side == right_side)
    }

    /// `s_l[i]`/`s_r[i]`: the coefficient that generator `i` carries in the
    /// fully-folded `G'`/`H'`, derived by reading each challenge's bit of
    /// `i` from most-significant round to least-significant.
    fn compute_s_scalars(&self, x: &[Scalar], x_inv: &[Scalar], n: usize) -> (Vec<Scalar>, Vec<Scalar>) {
        let rounds = x.len();
        (0..n)
            .into_par_iter()
            .map(|i| {
                let mut s_l = Scalar::ONE;
                let mut s_r = Scalar::ONE;
                for (round, (xi, xi_inv)) in x.iter().zip(x_inv.iter()).enumerate() {
                    let bit_position = rounds - 1 - round;
                    if (i >> bit_position) & 1 == 1 {
                        s_l *= xi;
                        s_r *= xi_inv;
                    } else {
                        s_l *= xi_inv;
                        s_r *= xi;
                    }
                }
                (s_l, s_r)
            })
            .unzip()
    }

    /// Recursive verifier: explicitly folds `G`, `H`, and `P'` one round at
    /// a time instead of computing closed-form `s` scalars. Slower, and
    /// provided as an independent cross-check of `verify`'s algebra rather
    /// than for production use.
    pub fn verify_recursive(
        &mut self,
        transcript: &mut Transcript,
        proof: &InnerProductProof,
        p: &GroupElement,
        c: &Scalar,
        n: usize,
    ) -> BulletproofsResult<bool> {
        proof.validate_structure()?;
        if n == 0 {
            return Err(BulletproofsError::InvalidParameters("Vector length cannot be zero".to_string()));
        }

        let padded_n = if is_power_of_two(n) { n } else { next_power_of_two(n) };
        let expected_rounds = Self::expected_rounds(padded_n);
        if proof.num_rounds() != expected_rounds {
            return Err(BulletproofsError::InvalidProof(format!(
                "Expected {expected_rounds} rounds for vector length {n}, got {}",
                proof.num_rounds()
            )));
        }

        let ch = self.recompute_challenges(transcript, proof, p, c, padded_n)?;

        let mut current_g = self.generators.g_vec[..padded_n].to_vec();
        let mut current_h = self.generators.h_vec[..padded_n].to_vec();
        let mut current_p = ch.p_prime;

        for round in 0..ch.x.len() {
            let m = current_g.len() / 2;
            let (g_l, g_r) = current_g.split_at(m);
            let (h_l, h_r) = current_h.split_at(m);
            let x = ch.x[round];
            let x_inv = ch.x_inv[round];

            let mut folded_g = Vec::with_capacity(m);
            let mut folded_h = Vec::with_capacity(m);
            for i in 0..m {
                folded_g.push(g_l[i] * x_inv + g_r[i] * x);
                folded_h.push(h_l[i] * x + h_r[i] * x_inv);
            }

            let x_sq = x * x;
            let x_inv_sq = x_inv * x_inv;
            current_p = current_p + (ch.l_vec[round] * x_sq) + (ch.r_vec[round] * x_inv_sq);

            current_g = folded_g;
            current_h = folded_h;
        }

        let expected = GroupElement::multiscalar_mul([proof.a, proof.b], [current_g[0], current_h[0]])
            + ch.u_prime * (proof.a * proof.b);

        Ok(current_p == expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InnerProductProver;
    use bulletproofs_core::bulletproofs_transcript;

    fn test_ipa_round_trip(vector_length: usize) {
        let generators = GeneratorSet::new(next_power_of_two(vector_length));

        let mut prover = InnerProductProver::new(generators.clone());
        let mut verifier = InnerProductVerifier::new(generators.clone());
        let mut recursive_verifier = InnerProductVerifier::new(generators.clone());

        let a: Vec<Scalar> = (0..vector_length).map(|i| Scalar::from((i + 1) as u64)).collect();
        let b: Vec<Scalar> = (0..vector_length).map(|i| Scalar::from((i + 10) as u64)).collect();

        let commitment = generators.vector_commit(&a, &b).unwrap();

        let mut prove_transcript = bulletproofs_transcript(b"ipa_test");
        let proof = prover.prove(&mut prove_transcript, &a, &b).unwrap();
        let c = inner_product(&a, &b).unwrap();

        let mut verify_transcript = bulletproofs_transcript(b"ipa_test");
        let result = verifier.verify(&mut verify_transcript, &proof, &commitment, &c, vector_length).unwrap();
        assert!(result, "fast verification failed for vector length {vector_length}");

        let mut recursive_transcript = bulletproofs_transcript(b"ipa_test");
        let recursive_result = recursive_verifier
            .verify_recursive(&mut recursive_transcript, &proof, &commitment, &c, vector_length)
            .unwrap();
        assert!(recursive_result, "recursive verification failed for vector length {vector_length}");
    }

    #[test]
    fn test_ipa_verification_length_1() {
        test_ipa_round_trip(1);
    }

    #[test]
    fn test_ipa_verification_length_2() {
        test_ipa_round_trip(2);
    }

    #[test]
    fn test_ipa_verification_length_4() {
        test_ipa_round_trip(4);
    }

    #[test]
    fn test_ipa_verification_length_8() {
        test_ipa_round_trip(8);
    }

    #[test]
    fn test_ipa_verification_non_power_of_two() {
        test_ipa_round_trip(3);
        test_ipa_round_trip(5);
        test_ipa_round_trip(7);
    }

    #[test]
    fn test_ipa_verification_larger_vectors() {
        test_ipa_round_trip(16);
        test_ipa_round_trip(32);
    }

    #[test]
    fn test_invalid_proof_wrong_rounds() {
        let generators = GeneratorSet::new(8);
        let mut verifier = InnerProductVerifier::new(generators);

        let l_vec = vec![GroupElement::identity(); 2]; // Should be 3 for n=8
        let r_vec = vec![GroupElement::identity(); 2];
        let proof = InnerProductProof::new(l_vec, r_vec, Scalar::from(1u64), Scalar::from(2u64));

        let commitment = GroupElement::identity();
        let mut transcript = bulletproofs_transcript(b"ipa_test");

        let result = verifier.verify(&mut transcript, &proof, &commitment, &Scalar::from(2u64), 8);
        assert!(result.is_err());
    }

    #[test]
    fn test_forge_proof_detection() {
        let generators = GeneratorSet::new(4);
        let mut verifier = InnerProductVerifier::new(generators.clone());

        let a = vec![Scalar::from(1u64), Scalar::from(2u64), Scalar::from(3u64), Scalar::from(4u64)];
        let b = vec![Scalar::from(5u64), Scalar::from(6u64), Scalar::from(7u64), Scalar::from(8u64)];
        let commitment = generators.vector_commit(&a, &b).unwrap();
        let c = inner_product(&a, &b).unwrap();

        let l_vec = vec![GroupElement::identity(); 2];
        let r_vec = vec![GroupElement::identity(); 2];
        let forged_proof = InnerProductProof::new(l_vec, r_vec, Scalar::from(99u64), Scalar::from(99u64));

        let mut transcript = bulletproofs_transcript(b"ipa_test");
        let result = verifier.verify(&mut transcript, &forged_proof, &commitment, &c, 4).unwrap();

        assert!(!result, "Forged proof should not verify");
    }
}
