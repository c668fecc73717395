//! Range proof structure and serialization.
//!
//! A `RangeProof` has the same shape whether it attests to one value or an
//! aggregate of `m` values — the difference lives entirely in how many bits
//! the inner product argument folded and in the externally-supplied
//! commitment list the verifier checks it against, not in this struct.

use bulletproofs_core::{BulletproofsError, BulletproofsResult, CompressedRistretto, Scalar};
use ipa::InnerProductProof;
use serde::{Deserialize, Serialize};

/// `(A, S, T1, T2, τ, t̂, μ, IPP)`, per the committed-polynomial range-proof
/// protocol. The Pedersen commitment(s) to the value(s) being proven are
/// supplied separately at verification time, not carried in the proof.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeProof {
    /// Commitment to the bit-decomposition vectors, blinded by `α`.
    pub a: CompressedRistretto,
    /// Commitment to the blinding vectors `s_L, s_R`, blinded by `ρ`.
    pub s: CompressedRistretto,
    /// Commitment to `t(X)`'s linear coefficient.
    pub t1: CompressedRistretto,
    /// Commitment to `t(X)`'s quadratic coefficient.
    pub t2: CompressedRistretto,
    /// Blinding factor for the `t̂`/`T1`/`T2` opening.
    pub tau: Scalar,
    /// `t̂ = ⟨l, r⟩`, the evaluated inner product.
    pub t_hat: Scalar,
    /// Blinding factor tying `A` and `S` together at the challenge point.
    pub mu: Scalar,
    /// Proof that `⟨l, r⟩ = t̂` against the reduced commitment.
    pub ipp: InnerProductProof,
}

impl RangeProof {
    pub fn validate_structure(&self) -> BulletproofsResult<()> {
        self.ipp.validate_structure()
    }

    pub fn size_bytes(&self) -> usize {
        4 * 32 + 3 * 32 + self.ipp.size_bytes()
    }

    /// Serialize to bytes: `A, S, T1, T2` compressed points, then
    /// `τ, t̂, μ` scalars, then the inner-product proof.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_bytes());
        for point in [&self.a, &self.s, &self.t1, &self.t2] {
            bytes.extend_from_slice(point.as_bytes());
        }
        bytes.extend_from_slice(self.tau.as_bytes());
        bytes.extend_from_slice(self.t_hat.as_bytes());
        bytes.extend_from_slice(self.mu.as_bytes());
        bytes.extend_from_slice(&self.ipp.to_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> BulletproofsResult<Self> {
        if bytes.len() < 4 * 32 + 3 * 32 {
            return Err(BulletproofsError::InvalidProof("Insufficient bytes for range proof".to_string()));
        }

        let read_point = |offset: usize| -> BulletproofsResult<CompressedRistretto> {
            let slice: [u8; 32] = bytes[offset..offset + 32]
                .try_into()
                .map_err(|_| BulletproofsError::MalformedPoint)?;
            Ok(CompressedRistretto(slice))
        };
        let read_scalar = |offset: usize| -> Scalar {
            let slice: [u8; 32] = bytes[offset..offset + 32].try_into().expect("fixed-size slice");
            Scalar::from_bytes_mod_order(slice)
        };

        let a = read_point(0)?;
        let s = read_point(32)?;
        let t1 = read_point(64)?;
        let t2 = read_point(96)?;
        let tau = read_scalar(128);
        let t_hat = read_scalar(160);
        let mu = read_scalar(192);
        let ipp = InnerProductProof::from_bytes(&bytes[224..])?;

        Ok(Self { a, s, t1, t2, tau, t_hat, mu, ipp })
    }
}
