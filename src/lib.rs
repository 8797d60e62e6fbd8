//! Shamir's Secret Sharing over a 256-bit prime field
//!
//! This library splits an arbitrary byte-string secret into N share strings
//! such that any M of them (the threshold) reconstruct the exact secret,
//! while fewer than M reveal nothing. Arithmetic happens in the prime field
//! modulo P = 2^256 - 189; shares serialize as fixed-width Base64URL or hex
//! text (88 or 128 chars per 32-byte chunk of the secret).
//!
//! # Quick Start
//!
//! ```
//! use shamir_sss::{ShamirSss, ShareEncoding};
//!
//! // Create a scheme producing 6 shares, any 3 of which reconstruct
//! let mut scheme = ShamirSss::new(3, 6).unwrap();
//!
//! // Split a secret
//! let secret = b"my secret data";
//! let shares = scheme.create(secret).unwrap();
//!
//! // Reconstruct from any 3 shares
//! let recovered = ShamirSss::combine(&shares[2..5], ShareEncoding::Base64).unwrap();
//! assert_eq!(recovered, secret);
//! ```
//!
//! # Caveats
//!
//! - Reconstruction cannot verify that enough shares were supplied: the
//!   original threshold is not recoverable from the shares, so an
//!   under-threshold `combine` silently yields a wrong secret.
//! - Secrets whose last meaningful byte is `0x00` lose that byte on
//!   reconstruction; the chunk format pads and trims on the right.

mod chunker;
mod codec;
mod config;
mod error;
mod field;
mod polynomial;
mod shamir;

pub use codec::{decode_share, encode_share};
pub use config::{Config, ShareEncoding};
pub use error::{Result, SssError};
pub use field::PrimeField;
pub use shamir::{ShamirSss, ShamirSssBuilder};

// Re-export common types for convenience
pub mod prelude {
    pub use super::{Config, PrimeField, Result, ShamirSss, ShareEncoding, SssError};
}
