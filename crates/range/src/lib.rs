//! # Bulletproofs Range Proofs
//!
//! This crate implements range proofs using the inner product argument.
//! Range proofs allow proving that a committed value lies within a specified range
//! without revealing the actual value.
//!
//! ## Mathematical Background
//!
//! A range proof for value `v` in range `[0, 2^n)` works by:
//!
//! 1. **Bit Decomposition**: Express `v = Σ(b_i * 2^i)` where `b_i ∈ {0,1}`
//! 2. **Vector Commitment**: Commit to bit vector using generators
//! 3. **Constraint System**: Use inner product argument to prove constraints:
//!    - Each `b_i` is binary: `b_i * (b_i - 1) = 0`
//!    - Bits sum to value: `Σ(b_i * 2^i) = v`
//!
//! Aggregate proofs (`m > 1` values in one proof) use the same machinery,
//! generalized by a per-slot challenge weighting `z^{2+j}` — see
//! [`AggregateRangeProver`]/[`AggregateRangeVerifier`].
//!
//! Callers that just want the four external operations (`configure`,
//! `prove_range`, `verify_range`, `prove_multi`, `verify_multi`) without
//! picking between the single-value and aggregate types directly can use
//! [`BulletproofsContext`] instead.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use range::{RangeProver, RangeVerifier};
//! use curve25519_dalek::scalar::Scalar;
//!
//! let mut rng = rand::thread_rng();
//! let bit_length = 8;
//!
//! let prover = RangeProver::new(bit_length);
//! let (proof, gamma) = prover.prove_range_random(&mut rng, 42).unwrap();
//! let commitment = prover.generators().commit_value(&Scalar::from(42u64), &gamma);
//!
//! let verifier = RangeVerifier::with_generators(prover.generators().clone(), bit_length);
//! assert!(verifier.verify_range(&commitment, &proof));
//! ```

pub mod proof;
pub mod prover;
pub mod verifier;
pub mod constraints;
pub mod context;


pub use proof::*;
pub use prover::*;
pub use verifier::*;
pub use constraints::*;
pub use context::*;