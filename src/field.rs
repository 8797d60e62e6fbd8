use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use rand_chacha::rand_core::RngCore;

use crate::error::{Result, SssError};

/// P = 2^256 - 189, the smallest-offset 256-bit prime used by the default field.
static PRIME_256: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"115792089237316195423570985008687907853269984665640564039457584007913129639747",
        10,
    )
    .expect("valid decimal literal")
});

/// The 12th Mersenne prime, 2^127 - 1.
static MERSENNE_127: Lazy<BigUint> = Lazy::new(|| (BigUint::one() << 127u32) - BigUint::one());

/// A prime field together with the fixed byte widths of its encoded elements
/// and its secret chunk windows.
///
/// The two widths are distinct: encoded tokens carry arbitrary elements of
/// [0, P) and span `element_bytes`, while secret windows must parse to values
/// below P and therefore span at most `prime.bits() - 1` whole bytes. For the
/// 256-bit field both are 32 bytes; for the 127-bit Mersenne field tokens are
/// 16 bytes but chunks are 15.
///
/// All polynomial and interpolation logic is generic over this type, so the
/// 256-bit multi-chunk scheme and the single-value 127-bit scheme share one
/// engine.
///
/// # Example
/// ```
/// use shamir_sss::PrimeField;
/// use num_bigint::BigUint;
///
/// let field = PrimeField::f256();
/// let a = BigUint::from(7u32);
/// let inv = field.inverse(&a).unwrap();
/// assert_eq!(field.mul(&a, &inv), BigUint::from(1u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    prime: BigUint,
    element_bytes: usize,
    chunk_bytes: usize,
}

impl PrimeField {
    /// The default field: P = 2^256 - 189, 32-byte elements and chunks.
    pub fn f256() -> Self {
        Self {
            prime: PRIME_256.clone(),
            element_bytes: 32,
            chunk_bytes: 32,
        }
    }

    /// The 127-bit Mersenne field (2^127 - 1), 16-byte elements, 15-byte
    /// chunks.
    ///
    /// Suitable for short secrets; kept for parity with the smaller
    /// historical scheme. Chunks are one byte narrower than tokens because a
    /// full 16-byte window could exceed P.
    pub fn mersenne127() -> Self {
        Self {
            prime: MERSENNE_127.clone(),
            element_bytes: 16,
            chunk_bytes: 15,
        }
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Width of one element in its big-endian byte form.
    pub fn element_bytes(&self) -> usize {
        self.element_bytes
    }

    /// Width of one secret chunk window.
    ///
    /// At most `element_bytes`; strictly less when P has fewer significant
    /// bits than the element width, so every window parses to a value in
    /// [0, P).
    pub fn chunk_bytes(&self) -> usize {
        self.chunk_bytes
    }

    /// Byte width used for Base64URL tokens. Padded up to a multiple of 3 so
    /// the unpadded encoding has a fixed character count.
    pub fn b64_element_bytes(&self) -> usize {
        self.element_bytes.div_ceil(3) * 3
    }

    /// Modular addition, result reduced into [0, P).
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.prime
    }

    /// Modular subtraction for operands already in [0, P).
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        ((a + &self.prime) - b) % &self.prime
    }

    /// Additive inverse: (0 - a) mod P.
    pub fn neg(&self, a: &BigUint) -> BigUint {
        if a.is_zero() {
            BigUint::zero()
        } else {
            &self.prime - (a % &self.prime)
        }
    }

    /// Modular multiplication, result reduced into [0, P).
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.prime
    }

    /// Multiplicative inverse mod P via the extended Euclidean algorithm.
    ///
    /// Fails when `a` is congruent to zero, which has no inverse. During
    /// reconstruction this is exactly the duplicate-x-coordinate case.
    pub fn inverse(&self, a: &BigUint) -> Result<BigUint> {
        let reduced = a % &self.prime;
        if reduced.is_zero() {
            return Err(SssError::ArithmeticFailure(
                "zero has no multiplicative inverse".into(),
            ));
        }

        let a_int = BigInt::from_biguint(Sign::Plus, reduced);
        let m_int = BigInt::from_biguint(Sign::Plus, self.prime.clone());

        let (gcd, x, _) = extended_gcd(a_int, m_int.clone());
        if gcd != BigInt::one() {
            return Err(SssError::ArithmeticFailure(
                "value is not invertible".into(),
            ));
        }

        let mut x_mod = x % &m_int;
        if x_mod.sign() == Sign::Minus {
            x_mod += &m_int;
        }
        Ok(x_mod.to_biguint().expect("non-negative after reduction"))
    }

    /// Draws a uniformly random element of [0, P) from `rng`.
    ///
    /// Uses rejection sampling: a candidate of `prime.bits()` random bits is
    /// redrawn while >= P. A plain modulo would bias the distribution since
    /// 2^256 is not a multiple of P. The attempt cap turns an implausible
    /// rejection streak into an error instead of an unbounded loop.
    pub fn random_element<R: RngCore>(&self, rng: &mut R, max_attempts: usize) -> Result<BigUint> {
        let bits = self.prime.bits() as usize;
        let bytes_len = bits.div_ceil(8);
        let top_bits = bits % 8;

        for _ in 0..max_attempts {
            let mut buf = vec![0u8; bytes_len];
            rng.fill_bytes(&mut buf);

            // Mask excess high bits so the candidate has at most `bits` bits.
            if top_bits != 0 {
                buf[0] &= (1u8 << top_bits) - 1;
            }

            let candidate = BigUint::from_bytes_be(&buf);
            if candidate < self.prime {
                return Ok(candidate);
            }
        }

        Err(SssError::ArithmeticFailure(
            "exhausted random draw attempts".into(),
        ))
    }
}

/// Extended Euclidean algorithm: returns (gcd, x, y) with a*x + b*y = gcd.
fn extended_gcd(a: BigInt, b: BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a, BigInt::one(), BigInt::zero());
    }

    let (gcd, x1, y1) = extended_gcd(b.clone(), &a % &b);
    let x = y1.clone();
    let y = x1 - (&a / &b) * y1;

    (gcd, x, y)
}
