//! Inner Product Argument prover implementation
//!
//! Proves knowledge of vectors `a`, `b` of length `n = 2^k` such that
//! `P = <a,G> + <b,H>` and `<a,b> = c` for a `c` the verifier already knows,
//! in `k` recursive folding rounds plus two final scalars. The commitment
//! `P` handed in by the caller carries no `u` term; the initial challenge
//! `x0 = H(P)` fixes `u' = x0*u` for the whole recursion and folds it into
//! `P' = P + c*u'` before folding begins, exactly as the reference prover's
//! `InnerProductProve`/`InnerProductProveSub` pair does it — this is what
//! lets the verifier recover the same `u'` without ever being told `c`
//! again after the first challenge.

use crate::InnerProductProof;
use bulletproofs_core::{
    utils::*, BulletproofsError, BulletproofsResult, GeneratorSet, GroupElement, TranscriptProtocol,
};
use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;
use rayon::prelude::*;

/// Inner Product Argument prover.
#[derive(Debug)]
pub struct InnerProductProver {
    generators: GeneratorSet,
}

impl InnerProductProver {
    /// Create a new IPA prover with the given generators.
    pub fn new(generators: GeneratorSet) -> Self {
        Self { generators }
    }

    /// Create an inner product proof for vectors `a`, `b` with known inner
    /// product `c = <a,b>`. The transcript must already reflect any prior
    /// protocol state (e.g. the range-proof challenges `y`, `z`, `x`); this
    /// call appends `P`, the initial challenge, and every round's `(L, R)`.
    pub fn prove(
        &mut self,
        transcript: &mut Transcript,
        a: &[Scalar],
        b: &[Scalar],
    ) -> BulletproofsResult<InnerProductProof> {
        if a.len() != b.len() {
            return Err(BulletproofsError::VectorLengthMismatch {
                expected: a.len(),
                actual: b.len(),
            });
        }

        let n = a.len();
        if n == 0 {
            return Err(BulletproofsError::InvalidParameters(
                "Vectors cannot be empty".to_string(),
            ));
        }

        let mut a_vec = a.to_vec();
        let mut b_vec = b.to_vec();
        if !is_power_of_two(n) {
            a_vec = pad_to_power_of_two(a_vec);
            b_vec = pad_to_power_of_two(b_vec);
        }
        let padded_n = a_vec.len();
        self.generators.ensure_capacity(padded_n);

        let mut current_g = self.generators.g_vec[..padded_n].to_vec();
        let mut current_h = self.generators.h_vec[..padded_n].to_vec();

        // P = <a,G> + <b,H>, without a u term yet.
        let p = self.generators.vector_commit(&a_vec, &b_vec)?;
        transcript.append_point(b"P", &p);

        let c = inner_product(&a_vec, &b_vec)?;
        let x0 = transcript.challenge_scalar(b"ipa_x0");
        if x0 == Scalar::ZERO {
            return Err(BulletproofsError::ZeroChallenge);
        }
        let u_prime = self.generators.u * x0;

        let mut current_a = a_vec;
        let mut current_b = b_vec;

        let mut l_vec = Vec::new();
        let mut r_vec = Vec::new();

        while current_a.len() > 1 {
            let m = current_a.len() / 2;

            let (a_l, a_r) = current_a.split_at(m);
            let (b_l, b_r) = current_b.split_at(m);
            let (g_l, g_r) = current_g.split_at(m);
            let (h_l, h_r) = current_h.split_at(m);

            let c_l = inner_product(a_l, b_r)?;
            let c_r = inner_product(a_r, b_l)?;

            // L = <a_L,G_R> + <b_R,H_L> + u'*<a_L,b_R>
            let l = GroupElement::multiscalar_mul(
                a_l.iter().cloned().chain(b_r.iter().cloned()).chain(std::iter::once(c_l)),
                g_r.iter().cloned().chain(h_l.iter().cloned()).chain(std::iter::once(u_prime)),
            );

            // R = <a_R,G_L> + <b_L,H_R> + u'*<a_R,b_L>
            let r = GroupElement::multiscalar_mul(
                a_r.iter().cloned().chain(b_l.iter().cloned()).chain(std::iter::once(c_r)),
                g_l.iter().cloned().chain(h_r.iter().cloned()).chain(std::iter::once(u_prime)),
            );

            transcript.append_point(b"L", &l);
            transcript.append_point(b"R", &r);

            l_vec.push(l);
            r_vec.push(r);

            let x = transcript.challenge_scalar(b"ipa_x");
            if x == Scalar::ZERO {
                return Err(BulletproofsError::ZeroChallenge);
            }
            let x_inv = x.invert();

            let folded_a: Vec<Scalar> = a_l.par_iter().zip(a_r.par_iter()).map(|(al, ar)| al * x + ar * x_inv).collect();
            let folded_b: Vec<Scalar> = b_l.par_iter().zip(b_r.par_iter()).map(|(bl, br)| bl * x_inv + br * x).collect();
            let folded_g: Vec<_> = g_l.par_iter().zip(g_r.par_iter()).map(|(gl, gr)| gl * x_inv + gr * x).collect();
            let folded_h: Vec<_> = h_l.par_iter().zip(h_r.par_iter()).map(|(hl, hr)| hl * x + hr * x_inv).collect();

            current_a = folded_a;
            current_b = folded_b;
            current_g = folded_g;
            current_h = folded_h;
        }

        let final_a = current_a[0];
        let final_b = current_b[0];

        debug_assert_eq!(final_a * final_b, c, "IPA folding changed the inner product");

        Ok(InnerProductProof::new(l_vec, r_vec, final_a, final_b))
    }
}
