//! Random polynomial construction and evaluation for one `create` run.

use std::collections::HashSet;

use num_bigint::BigUint;
use num_traits::Zero;
use rand_chacha::rand_core::RngCore;

use crate::error::{Result, SssError};
use crate::field::PrimeField;

/// Field elements already spent during one `create` run.
///
/// Seeded with {0} and fed every polynomial coefficient and every share
/// x-coordinate as it is drawn, so that no coefficient ever equals an
/// x-coordinate and no two x-coordinates collide, even across different
/// shares or chunks. Scoped to a single `create` call; never shared.
pub(crate) struct UsedNumbers(HashSet<BigUint>);

impl UsedNumbers {
    pub(crate) fn new() -> Self {
        let mut set = HashSet::new();
        set.insert(BigUint::zero());
        Self(set)
    }

    /// Draws a random field element not yet in the set and records it.
    pub(crate) fn draw_unique<R: RngCore>(
        &mut self,
        field: &PrimeField,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<BigUint> {
        for _ in 0..max_attempts {
            let candidate = field.random_element(rng, max_attempts)?;
            if self.0.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }

        Err(SssError::ArithmeticFailure(
            "exhausted attempts to draw a distinct field element".into(),
        ))
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, value: &BigUint) -> bool {
        self.0.contains(value)
    }
}

/// Builds one random polynomial of degree `minimum - 1` per chunk.
///
/// Coefficient 0 carries the chunk value; the remaining `minimum - 1`
/// coefficients are distinct random field elements recorded in `used`.
pub(crate) fn build_polynomials<R: RngCore>(
    minimum: usize,
    chunks: &[BigUint],
    field: &PrimeField,
    rng: &mut R,
    used: &mut UsedNumbers,
    max_attempts: usize,
) -> Result<Vec<Vec<BigUint>>> {
    let mut polynomials = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        let mut coeffs = Vec::with_capacity(minimum);
        coeffs.push(chunk.clone());
        for _ in 1..minimum {
            coeffs.push(used.draw_unique(field, rng, max_attempts)?);
        }
        polynomials.push(coeffs);
    }

    Ok(polynomials)
}

/// Evaluates a polynomial at `x` using Horner's method.
///
/// The accumulator starts at the highest-degree coefficient; each step
/// computes `accum = accum * x + coeffs[i] (mod P)`.
pub(crate) fn evaluate(coeffs: &[BigUint], x: &BigUint, field: &PrimeField) -> BigUint {
    let mut accum = coeffs[coeffs.len() - 1].clone() % field.prime();
    for coeff in coeffs.iter().rev().skip(1) {
        accum = field.add(&field.mul(&accum, x), coeff);
    }
    accum
}

/// Generates `shares` points per chunk: `points[share][chunk] = (x, y)`.
///
/// Every x is drawn fresh through `used`, so it never equals 0, any
/// coefficient, or any previously issued x-coordinate.
pub(crate) fn generate_points<R: RngCore>(
    polynomials: &[Vec<BigUint>],
    shares: usize,
    field: &PrimeField,
    rng: &mut R,
    used: &mut UsedNumbers,
    max_attempts: usize,
) -> Result<Vec<Vec<(BigUint, BigUint)>>> {
    let mut points = Vec::with_capacity(shares);

    for _ in 0..shares {
        let mut share_points = Vec::with_capacity(polynomials.len());
        for coeffs in polynomials {
            let x = used.draw_unique(field, rng, max_attempts)?;
            let y = evaluate(coeffs, &x, field);
            share_points.push((x, y));
        }
        points.push(share_points);
    }

    Ok(points)
}
