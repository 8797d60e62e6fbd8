use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use rayon::prelude::*;

use crate::chunker;
use crate::codec;
use crate::config::{Config, ShareEncoding};
use crate::error::{Result, SssError};
use crate::field::PrimeField;
use crate::polynomial::{self, UsedNumbers};

/// Main implementation of Shamir's Secret Sharing over a prime field
///
/// Secrets are chunked into 256-bit field elements, one random polynomial of
/// degree `minimum - 1` is built per chunk, and each share carries one freshly
/// drawn (x, y) point per chunk, serialized as one fixed-width text string.
/// Reconstruction Lagrange-interpolates each chunk at x = 0.
///
/// Polynomial coefficients and x-coordinates are drawn from a ChaCha20 CSPRNG
/// seeded from the operating system and are globally distinct within one
/// `create` call.
///
/// # Example
/// ```
/// use shamir_sss::{ShamirSss, ShareEncoding};
///
/// // Any 3 of 6 shares reconstruct the secret
/// let mut scheme = ShamirSss::new(3, 6).unwrap();
/// let shares = scheme.create(b"my secret data").unwrap();
///
/// let secret = ShamirSss::combine(&shares[0..3], ShareEncoding::Base64).unwrap();
/// assert_eq!(secret, b"my secret data");
/// ```
pub struct ShamirSss {
    /// Minimum number of shares needed for reconstruction
    minimum: usize,
    /// Total number of shares to generate
    shares: usize,
    /// Configuration options for the sharing scheme
    config: Config,
    /// Cryptographically secure random number generator
    rng: ChaCha20Rng,
}

/// Builder for creating ShamirSss instances with custom configuration
///
/// # Example
/// ```
/// use shamir_sss::{ShamirSss, Config, ShareEncoding};
///
/// let config = Config::new().with_encoding(ShareEncoding::Hex);
/// let scheme = ShamirSss::builder(3, 6).with_config(config).build().unwrap();
/// ```
#[derive(Debug)]
pub struct ShamirSssBuilder {
    minimum: usize,
    shares: usize,
    config: Config,
}

impl ShamirSssBuilder {
    /// Creates a new builder with the specified parameters and default configuration
    ///
    /// # Arguments
    /// * `minimum` - Minimum shares required for reconstruction (>= 1)
    /// * `shares` - Total number of shares to create (>= minimum)
    pub fn new(minimum: usize, shares: usize) -> Self {
        Self {
            minimum,
            shares,
            config: Config::default(),
        }
    }

    /// Sets a custom configuration for the ShamirSss instance
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Builds the ShamirSss instance with validation
    ///
    /// # Errors
    /// Returns `SssError::InvalidParameters` if `minimum` or `shares` is zero
    /// or `minimum > shares`, and `SssError::InvalidConfig` if the
    /// configuration fails validation.
    pub fn build(self) -> Result<ShamirSss> {
        if self.minimum == 0 || self.shares == 0 || self.minimum > self.shares {
            return Err(SssError::InvalidParameters {
                minimum: self.minimum,
                shares: self.shares,
            });
        }

        self.config.validate()?;

        Ok(ShamirSss {
            minimum: self.minimum,
            shares: self.shares,
            config: self.config,
            rng: ChaCha20Rng::try_from_rng(&mut OsRng).unwrap(),
        })
    }
}

impl ShamirSss {
    /// Creates a builder for configuring a ShamirSss instance
    pub fn builder(minimum: usize, shares: usize) -> ShamirSssBuilder {
        ShamirSssBuilder::new(minimum, shares)
    }

    /// Creates a ShamirSss instance with the default configuration
    pub fn new(minimum: usize, shares: usize) -> Result<Self> {
        Self::builder(minimum, shares).build()
    }

    /// Minimum number of shares needed for reconstruction
    pub fn minimum(&self) -> usize {
        self.minimum
    }

    /// Total number of shares generated per `create` call
    pub fn shares(&self) -> usize {
        self.shares
    }

    /// Splits a secret into share strings
    ///
    /// One polynomial per chunk carries the chunk value in its constant term;
    /// the remaining coefficients and every x-coordinate are random field
    /// elements kept globally distinct for the duration of this call, so no
    /// x ever equals 0, a coefficient, or another issued x.
    ///
    /// # Errors
    /// Returns `SssError::EmptySecret` for an empty secret and
    /// `SssError::ArithmeticFailure` if the capped redraw loop is exhausted
    /// (practically impossible at 256 bits).
    ///
    /// # Example
    /// ```
    /// use shamir_sss::ShamirSss;
    ///
    /// let mut scheme = ShamirSss::new(3, 6).unwrap();
    /// let shares = scheme.create(b"secret").unwrap();
    /// assert_eq!(shares.len(), 6);
    /// // 1 chunk, 88 Base64URL chars per chunk
    /// assert_eq!(shares[0].len(), 88);
    /// ```
    pub fn create(&mut self, secret: &[u8]) -> Result<Vec<String>> {
        let field = self.config.field.clone();
        let attempts = self.config.max_draw_attempts;

        let chunks = chunker::split_secret(secret, &field)?;

        let mut used = UsedNumbers::new();
        let polynomials = polynomial::build_polynomials(
            self.minimum,
            &chunks,
            &field,
            &mut self.rng,
            &mut used,
            attempts,
        )?;
        let points = polynomial::generate_points(
            &polynomials,
            self.shares,
            &field,
            &mut self.rng,
            &mut used,
            attempts,
        )?;

        Ok(points
            .iter()
            .map(|share_points| codec::encode_share(share_points, self.config.encoding, &field))
            .collect())
    }

    /// Reconstructs a secret from share strings in the default 256-bit field
    ///
    /// Note: the share count is NOT checked against the original `minimum`;
    /// that threshold is not recoverable from the shares themselves. Supplying
    /// fewer shares interpolates *some* polynomial through the given points
    /// and silently yields a wrong secret. This is a property of the scheme,
    /// not a defect.
    ///
    /// # Errors
    /// - `SssError::EmptyShareList` for an empty slice
    /// - `SssError::MalformedShare` for bad length/alphabet or a chunk-count
    ///   mismatch across shares
    /// - `SssError::OutOfRangeValue` for decoded elements outside (0, P)
    /// - `SssError::ArithmeticFailure` for duplicate x-coordinates
    pub fn combine<S: AsRef<str>>(shares: &[S], encoding: ShareEncoding) -> Result<Vec<u8>> {
        Self::combine_in_field(shares, encoding, &PrimeField::f256())
    }

    /// Reconstructs a secret from share strings in an explicit field
    pub fn combine_in_field<S: AsRef<str>>(
        shares: &[S],
        encoding: ShareEncoding,
        field: &PrimeField,
    ) -> Result<Vec<u8>> {
        if shares.is_empty() {
            return Err(SssError::EmptyShareList);
        }

        let points = shares
            .iter()
            .map(|share| codec::decode_share(share.as_ref(), encoding, field))
            .collect::<Result<Vec<_>>>()?;

        let chunk_count = points[0].len();
        if !points.iter().all(|p| p.len() == chunk_count) {
            return Err(SssError::MalformedShare(
                "shares encode different chunk counts".into(),
            ));
        }

        // Chunks interpolate independently; the share points are read-only
        // from here on.
        let chunks = (0..chunk_count)
            .into_par_iter()
            .map(|chunk| interpolate_at_zero(&points, chunk, field))
            .collect::<Result<Vec<_>>>()?;

        Ok(chunker::merge_chunks(&chunks, field))
    }

    /// Checks whether `text` is a well-formed share in the default 256-bit field
    ///
    /// Never errors: malformed input and well-formed-but-out-of-range values
    /// both return `false`.
    pub fn is_valid_share(text: &str, encoding: ShareEncoding) -> bool {
        codec::is_valid_share(text, encoding, &PrimeField::f256())
    }

    /// Checks whether `text` is a well-formed share in an explicit field
    pub fn is_valid_share_in_field(
        text: &str,
        encoding: ShareEncoding,
        field: &PrimeField,
    ) -> bool {
        codec::is_valid_share(text, encoding, field)
    }
}

/// Lagrange interpolation of one chunk's value at x = 0.
///
/// For each share i the numerator accumulates `(0 - x_k) mod P` and the
/// denominator `(x_i - x_k) mod P` over all k != i; the share's term is
/// `y_i * numerator * denominator^-1`. A duplicate x-coordinate makes some
/// denominator zero, which surfaces as `ArithmeticFailure` from the inverse.
fn interpolate_at_zero(
    points: &[Vec<(BigUint, BigUint)>],
    chunk: usize,
    field: &PrimeField,
) -> Result<BigUint> {
    let mut secret = BigUint::zero();

    for (i, share_points) in points.iter().enumerate() {
        let (x_i, y_i) = &share_points[chunk];

        let mut numerator = BigUint::from(1u32);
        let mut denominator = BigUint::from(1u32);
        for (k, other_points) in points.iter().enumerate() {
            if k == i {
                continue;
            }
            let (x_k, _) = &other_points[chunk];
            numerator = field.mul(&numerator, &field.neg(x_k));
            denominator = field.mul(&denominator, &field.sub(x_i, x_k));
        }

        let term = field.mul(&field.mul(y_i, &numerator), &field.inverse(&denominator)?);
        secret = field.add(&secret, &term);
    }

    Ok(secret)
}
