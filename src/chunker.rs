//! Mapping between arbitrary-length secrets and fixed-width field-element chunks.
//!
//! A secret is hex-encoded (two hex chars per byte) and partitioned into
//! windows of `2 * chunk_bytes` hex chars; the last window is right-padded
//! with `'0'` nibbles. Each window parses as one big-endian field element.
//! The window width is the field's chunk width, not its token width, so a
//! window can never silently wrap past the modulus; windows that still parse
//! to a value >= P (possible only when the chunk fills the full element
//! width, as in the 256-bit field) are rejected outright.
//!
//! Because padding is right-side and trimming on merge is also right-side, a
//! secret whose last meaningful byte is `0x00` loses that byte on
//! reconstruction. This is a known property of the format, kept as-is.

use num_bigint::BigUint;
use num_traits::One;
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::error::{Result, SssError};
use crate::field::PrimeField;

/// Splits a secret into an ordered sequence of field-element chunks.
pub fn split_secret(secret: &[u8], field: &PrimeField) -> Result<Vec<BigUint>> {
    if secret.is_empty() {
        return Err(SssError::EmptySecret);
    }

    let width = field.chunk_bytes() * 2;
    let mut hex_data = hex::encode(secret);

    let mut chunks = Vec::with_capacity(hex_data.len().div_ceil(width));
    for window in hex_data.as_bytes().chunks(width) {
        let chunk = if window.len() == width {
            BigUint::parse_bytes(window, 16)
        } else {
            let mut padded = window.to_vec();
            padded.resize(width, b'0');
            let parsed = BigUint::parse_bytes(&padded, 16);
            #[cfg(feature = "zeroize")]
            padded.zeroize();
            parsed
        };
        let chunk = chunk.expect("window is valid hex");
        if &chunk >= field.prime() {
            return Err(SssError::OutOfRangeValue);
        }
        chunks.push(chunk);
    }

    #[cfg(feature = "zeroize")]
    hex_data.zeroize();

    Ok(chunks)
}

/// Merges recovered chunks back into the secret bytes, stripping the
/// right-side zero padding introduced by `split_secret`.
pub fn merge_chunks(chunks: &[BigUint], field: &PrimeField) -> Vec<u8> {
    let width = field.chunk_bytes() * 2;

    let mut hex_data = String::with_capacity(chunks.len() * width);
    // Values wider than the window only arise from under-threshold garbage
    // when the chunk width is narrower than the element width; mask them so
    // the rendered width stays fixed.
    let cap = BigUint::one() << (field.chunk_bytes() * 8);
    for chunk in chunks {
        let windowed = chunk % &cap;
        hex_data.push_str(&format!("{windowed:0width$x}"));
    }

    let mut bytes = hex::decode(&hex_data).expect("chunks render as valid hex");
    #[cfg(feature = "zeroize")]
    hex_data.zeroize();

    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(
            split_secret(b"", &PrimeField::f256()),
            Err(SssError::EmptySecret)
        ));
    }

    #[test]
    fn test_short_secret_right_padded() {
        let field = PrimeField::f256();
        let chunks = split_secret(b"ab", &field).unwrap();
        assert_eq!(chunks.len(), 1);

        // "ab" -> hex "6162", padded with 60 zero nibbles on the right.
        let expected = BigUint::parse_bytes(
            b"6162000000000000000000000000000000000000000000000000000000000000",
            16,
        )
        .unwrap();
        assert_eq!(chunks[0], expected);
    }

    #[test]
    fn test_exact_window_no_padding() {
        let field = PrimeField::f256();
        let secret = [0xabu8; 32];
        let chunks = split_secret(&secret, &field).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], BigUint::from_bytes_be(&secret));
    }

    #[test]
    fn test_chunk_count() {
        let field = PrimeField::f256();
        assert_eq!(split_secret(&[1u8; 32], &field).unwrap().len(), 1);
        assert_eq!(split_secret(&[1u8; 33], &field).unwrap().len(), 2);
        assert_eq!(split_secret(&[1u8; 64], &field).unwrap().len(), 2);
        assert_eq!(split_secret(&[1u8; 65], &field).unwrap().len(), 3);
    }

    #[test]
    fn test_roundtrip() {
        let field = PrimeField::f256();
        let secret = "a moderately long secret that spans multiple 32-byte chunks".as_bytes();
        let chunks = split_secret(secret, &field).unwrap();
        assert_eq!(merge_chunks(&chunks, &field), secret);
    }

    #[test]
    fn test_roundtrip_mersenne127() {
        let field = PrimeField::mersenne127();
        let secret = b"sixteen-byte-ish window test";
        let chunks = split_secret(secret, &field).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(merge_chunks(&chunks, &field), secret);
    }

    #[test]
    fn test_high_bit_secret_roundtrip_mersenne127() {
        // 0xFF..FF would exceed 2^127 - 1 as a single 16-byte window; the
        // 15-byte windows keep every chunk below the modulus.
        let field = PrimeField::mersenne127();
        let secret = [0xffu8; 16];
        let chunks = split_secret(&secret, &field).unwrap();
        assert_eq!(chunks.len(), 2);
        for chunk in &chunks {
            assert!(chunk < field.prime());
        }
        assert_eq!(merge_chunks(&chunks, &field), secret);
    }

    #[test]
    fn test_window_at_or_above_prime_rejected() {
        // In the 256-bit field the window fills the full element width, so
        // 2^256 - 1 parses but lies outside the field.
        let field = PrimeField::f256();
        assert!(matches!(
            split_secret(&[0xffu8; 32], &field),
            Err(SssError::OutOfRangeValue)
        ));
    }

    #[test]
    fn test_trailing_null_byte_lost() {
        // Documented limitation: right-side padding and right-side trimming
        // cannot distinguish a meaningful trailing 0x00 from padding.
        let field = PrimeField::f256();
        let secret = b"ends in null\x00";
        let chunks = split_secret(secret, &field).unwrap();
        assert_eq!(merge_chunks(&chunks, &field), b"ends in null");
    }

    #[test]
    fn test_interior_null_bytes_survive() {
        let field = PrimeField::f256();
        let secret = b"null\x00in\x00the\x00middle";
        let chunks = split_secret(secret, &field).unwrap();
        assert_eq!(merge_chunks(&chunks, &field), secret);
    }
}
