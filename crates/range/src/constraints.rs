//! Shared algebra for single-value and aggregate range proofs.
//!
//! A single-value proof is the `m = 1` case of the aggregate proof, so every
//! helper here is already generalized over a value count `m`: the
//! per-slot `z^{2+j}` weighting `DeltaMRP`/`CalculateRMRP` introduce in the
//! reference implementation collapses to the single-value `Delta`/`CalculateR`
//! formulas when `m = 1`.

use bulletproofs_core::{utils::*, BulletproofsResult};
use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};

/// `δ(y,z,m) = (z - z²)·Σy_vec - Σ_{j=0}^{m-1} z^{3+j}·(2^n - 1)`, `n` being
/// the per-value bit length.
pub fn delta(y_vec: &[Scalar], z: &Scalar, bits_per_value: usize, m: usize) -> Scalar {
    let z2 = z * z;
    let t1 = (z - z2) * sum(y_vec);

    let po2_sum = sum(&scalar_powers(&Scalar::from(2u64), bits_per_value));
    let mut t3 = Scalar::ZERO;
    let mut z_pow = z2;
    for _ in 0..m {
        z_pow *= z;
        t3 += z_pow * po2_sum;
    }

    t1 - t3
}

/// The concatenated per-slot vector `z^{2+j}·2^i` for slot `j ∈ [0,m)`,
/// bit `i ∈ [0,n)` — the additive term that enters `r(X)`'s constant part.
pub fn z_power_twos_vector(z: &Scalar, bits_per_value: usize, m: usize) -> Vec<Scalar> {
    let powers_of_two = scalar_powers(&Scalar::from(2u64), bits_per_value);
    let mut result = Vec::with_capacity(bits_per_value * m);
    let mut z_pow = *z * z; // z^2
    for _ in 0..m {
        for p in &powers_of_two {
            result.push(z_pow * p);
        }
        z_pow *= z;
    }
    result
}

/// `l(x) = (a_L - z·1) + s_L·x`.
pub fn calculate_l(a_l: &[Scalar], s_l: &[Scalar], z: &Scalar, x: &Scalar) -> BulletproofsResult<Vec<Scalar>> {
    let shifted = vector_add_scalar(a_l, &(-z));
    let scaled = vector_scale(s_l, x);
    vector_add(&shifted, &scaled)
}

/// `r(x) = y_vec ∘ ((a_R + z) + s_R·x) + z_pow_twos`.
pub fn calculate_r(
    a_r: &[Scalar],
    s_r: &[Scalar],
    y_vec: &[Scalar],
    z_pow_twos: &[Scalar],
    z: &Scalar,
    x: &Scalar,
) -> BulletproofsResult<Vec<Scalar>> {
    let shifted = vector_add_scalar(a_r, z);
    let scaled = vector_scale(s_r, x);
    let inner = vector_add(&shifted, &scaled)?;
    let hadamard = hadamard_product(y_vec, &inner)?;
    vector_add(&hadamard, z_pow_twos)
}

/// `H'_i = y^{-i}·H_i`, the generator substitution that absorbs the `y`
/// challenge into the right-hand generators before the IPA runs.
pub fn h_prime_vec(h_vec: &[RistrettoPoint], y_vec: &[Scalar]) -> Vec<RistrettoPoint> {
    h_vec.iter().zip(y_vec.iter()).map(|(h, y)| h * y.invert()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_matches_single_value_formula_when_m_is_one() {
        let y = Scalar::from(7u64);
        let z = Scalar::from(3u64);
        let n = 8;
        let y_vec = scalar_powers(&y, n);

        let generalized = delta(&y_vec, &z, n, 1);

        let z2 = z * z;
        let z3 = z2 * z;
        let po2_sum = sum(&scalar_powers(&Scalar::from(2u64), n));
        let direct = (z - z2) * sum(&y_vec) - z3 * po2_sum;

        assert_eq!(generalized, direct);
    }

    #[test]
    fn z_power_twos_vector_has_expected_length() {
        let z = Scalar::from(5u64);
        let v = z_power_twos_vector(&z, 4, 3);
        assert_eq!(v.len(), 12);
    }

    #[test]
    fn calculate_l_matches_manual_computation() {
        let a_l = vec![Scalar::from(1u64), Scalar::from(0u64)];
        let s_l = vec![Scalar::from(2u64), Scalar::from(3u64)];
        let z = Scalar::from(4u64);
        let x = Scalar::from(5u64);

        let l = calculate_l(&a_l, &s_l, &z, &x).unwrap();
        assert_eq!(l[0], (Scalar::from(1u64) - z) + Scalar::from(2u64) * x);
        assert_eq!(l[1], (Scalar::ZERO - z) + Scalar::from(3u64) * x);
    }
}
