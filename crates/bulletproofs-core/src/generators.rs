//! CRS generation (C3) and the Pedersen vector committer (C4).
//!
//! Generators are derived deterministically from a fixed public seed so that
//! no party — prover, verifier, or the implementer — ever learns a discrete-log
//! relation between any two of them. The derivation is a hash-and-decompress
//! loop: hash an incrementing counter, treat the digest as a candidate
//! compressed point, and keep it if it decompresses to a valid, non-identity
//! point, retrying on failure. Indices `0..n` alternate between `G_vec` and
//! `H_vec`, and the next three accepted points become `u`, `g`, `h`.

use crate::{BulletproofsError, BulletproofsResult, GroupElement};
use curve25519_dalek::{
    constants::RISTRETTO_BASEPOINT_COMPRESSED,
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::Identity,
};
use sha2::{Digest, Sha256};

/// Generator set for Bulletproofs operations: `2n+3` independent points
/// `(G_vec, H_vec, g, h, u)` for a vector length `n`.
#[derive(Debug, Clone)]
pub struct GeneratorSet {
    /// Primary generator, used for single-value Pedersen commitments.
    pub g: RistrettoPoint,
    /// Secondary generator, used for blinding factors.
    pub h: RistrettoPoint,
    /// Left-side vector generators, length `n`.
    pub g_vec: Vec<RistrettoPoint>,
    /// Right-side vector generators, length `n`.
    pub h_vec: Vec<RistrettoPoint>,
    /// Generator for the inner-product cross term.
    pub u: RistrettoPoint,
}

enum Slot {
    G(usize),
    H(usize),
    U,
    G0,
    H0,
}

impl GeneratorSet {
    /// Find the next point accepted by the search starting at `counter`,
    /// returning it and the counter just past it.
    fn next_point(mut counter: u64) -> (RistrettoPoint, u64) {
        loop {
            let mut hasher = Sha256::new();
            hasher.update(b"bulletproofs-crs-generator-v1");
            hasher.update(RISTRETTO_BASEPOINT_COMPRESSED.as_bytes());
            hasher.update(counter.to_le_bytes());
            let digest = hasher.finalize();
            counter += 1;

            let mut candidate_bytes = [0u8; 32];
            candidate_bytes.copy_from_slice(&digest);
            let candidate = CompressedRistretto(candidate_bytes);
            if let Some(point) = candidate.decompress() {
                if point != RistrettoPoint::identity() {
                    return (point, counter);
                }
            }
        }
    }

    fn acceptance_order(n: usize) -> Vec<Slot> {
        let mut order = Vec::with_capacity(2 * n + 3);
        for k in 0..(2 * n) {
            if k % 2 == 0 {
                order.push(Slot::G(k / 2));
            } else {
                order.push(Slot::H(k / 2));
            }
        }
        order.push(Slot::U);
        order.push(Slot::G0);
        order.push(Slot::H0);
        order
    }

    /// Build a generator set supporting vectors of length `vector_length`.
    /// Deterministic: the CRS is a public, reproducible construction with no
    /// trusted setup, so this takes no randomness source.
    pub fn new(vector_length: usize) -> Self {
        let mut g_vec = vec![RistrettoPoint::identity(); vector_length];
        let mut h_vec = vec![RistrettoPoint::identity(); vector_length];
        let mut g = RistrettoPoint::identity();
        let mut h = RistrettoPoint::identity();
        let mut u = RistrettoPoint::identity();

        let mut counter = 0u64;
        for slot in Self::acceptance_order(vector_length) {
            let (point, next_counter) = Self::next_point(counter);
            counter = next_counter;
            match slot {
                Slot::G(i) => g_vec[i] = point,
                Slot::H(i) => h_vec[i] = point,
                Slot::U => u = point,
                Slot::G0 => g = point,
                Slot::H0 => h = point,
            }
        }

        Self { g, h, g_vec, h_vec, u }
    }

    /// Number of vector generators on each side.
    pub fn vector_length(&self) -> usize {
        self.g_vec.len()
    }

    /// Grow the generator set to support at least `length`, by re-deriving
    /// from scratch (the derivation is cheap and deterministic, so there is
    /// no benefit to an incremental extension that risks drifting from
    /// `new`'s own ordering).
    ///
    /// Callers who have substituted `g_vec`/`h_vec` with derived generators
    /// (e.g. the range proof's `H'_i = y^{-i}·H_i`) must never let this grow
    /// past their substituted length — the rebuild replaces the substitution
    /// with fresh standard generators, silently proving a different
    /// statement than the one the verifier checks. Callers that do this must
    /// size their vectors to a power of two up front so this is a no-op.
    pub fn ensure_capacity(&mut self, length: usize) {
        if self.vector_length() >= length {
            return;
        }
        *self = Self::new(length);
    }

    pub fn g_generator(&self) -> GroupElement {
        GroupElement::from(self.g)
    }

    pub fn h_generator(&self) -> GroupElement {
        GroupElement::from(self.h)
    }

    pub fn u_generator(&self) -> GroupElement {
        GroupElement::from(self.u)
    }

    pub fn g_vec(&self) -> &[RistrettoPoint] {
        &self.g_vec
    }

    pub fn h_vec(&self) -> &[RistrettoPoint] {
        &self.h_vec
    }

    /// Pedersen single-value commitment: `v*g + gamma*h` (C4).
    pub fn commit_value(&self, v: &Scalar, gamma: &Scalar) -> GroupElement {
        GroupElement::multiscalar_mul([*v, *gamma], [self.g, self.h])
    }

    /// Two-vector Pedersen commitment: `<a,G_vec> + <b,H_vec>` (C4), using
    /// the first `a.len()` generators of each sequence.
    pub fn vector_commit(&self, a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<GroupElement> {
        if a.len() != b.len() {
            return Err(BulletproofsError::VectorLengthMismatch {
                expected: a.len(),
                actual: b.len(),
            });
        }
        if a.len() > self.vector_length() {
            return Err(BulletproofsError::InsufficientGenerators {
                needed: a.len(),
                available: self.vector_length(),
            });
        }

        let scalars = a.iter().chain(b.iter()).cloned();
        let points = self.g_vec[..a.len()].iter().chain(self.h_vec[..b.len()].iter()).cloned();
        Ok(GroupElement::multiscalar_mul(scalars, points))
    }

    /// `<a,G_vec> + <b,H_vec> + u*<a,b>`, the value the IPA proves knowledge
    /// of an opening for.
    pub fn inner_product_commit(&self, a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<GroupElement> {
        let vector_commit = self.vector_commit(a, b)?;
        let inner_product: Scalar = a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).sum();
        Ok(vector_commit + GroupElement::from(self.u * inner_product))
    }

    /// A CRS restricted to the first `length` generators of each sequence,
    /// used when a proof over a shorter vector runs against a CRS sized for
    /// the largest supported `n*m`.
    pub fn subset(&self, length: usize) -> BulletproofsResult<GeneratorSet> {
        if length > self.vector_length() {
            return Err(BulletproofsError::InsufficientGenerators {
                needed: length,
                available: self.vector_length(),
            });
        }
        Ok(GeneratorSet {
            g: self.g,
            h: self.h,
            g_vec: self.g_vec[..length].to_vec(),
            h_vec: self.h_vec[..length].to_vec(),
            u: self.u,
        })
    }
}
