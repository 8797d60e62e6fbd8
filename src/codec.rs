//! Fixed-width text serialization of (x, y) field-element pairs.
//!
//! Each field element renders to an exact character count per encoding, so a
//! share string is an exact multiple of the per-chunk token width and can be
//! windowed without delimiters. For the 256-bit field that is 44 Base64URL
//! chars or 64 hex chars per element, 88 or 128 per chunk.

use base64ct::{Base64UrlUnpadded, Encoding};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::config::ShareEncoding;
use crate::error::{Result, SssError};
use crate::field::PrimeField;

/// Character count of one encoded field element.
pub fn element_width(encoding: ShareEncoding, field: &PrimeField) -> usize {
    match encoding {
        // Unpadded Base64URL of the zero-padded big-endian form; the byte
        // width is a multiple of 3 so the character count is exact.
        ShareEncoding::Base64 => field.b64_element_bytes() * 4 / 3,
        ShareEncoding::Hex => field.element_bytes() * 2,
    }
}

/// Encodes one field element at its fixed width.
pub fn encode_element(value: &BigUint, encoding: ShareEncoding, field: &PrimeField) -> String {
    match encoding {
        ShareEncoding::Base64 => {
            let width = field.b64_element_bytes();
            let bytes = value.to_bytes_be();
            let mut buf = vec![0u8; width];
            buf[width - bytes.len()..].copy_from_slice(&bytes);
            Base64UrlUnpadded::encode_string(&buf)
        }
        ShareEncoding::Hex => {
            let width = field.element_bytes() * 2;
            format!("{value:0width$x}")
        }
    }
}

/// Decodes one fixed-width token into a field element.
///
/// Rejects bad alphabets as `MalformedShare` and any value outside the open
/// interval (0, P) as `OutOfRangeValue`. Zero is excluded because neither a
/// valid x-coordinate nor an issued y for a distinct x is ever zero by
/// construction.
pub fn decode_element(
    token: &str,
    encoding: ShareEncoding,
    field: &PrimeField,
) -> Result<BigUint> {
    let value = match encoding {
        ShareEncoding::Base64 => {
            let bytes = Base64UrlUnpadded::decode_vec(token)
                .map_err(|_| SssError::MalformedShare("invalid base64url token".into()))?;
            BigUint::from_bytes_be(&bytes)
        }
        ShareEncoding::Hex => {
            if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(SssError::MalformedShare("invalid hex token".into()));
            }
            BigUint::parse_bytes(token.as_bytes(), 16)
                .ok_or_else(|| SssError::MalformedShare("invalid hex token".into()))?
        }
    };

    if value.is_zero() || &value >= field.prime() {
        return Err(SssError::OutOfRangeValue);
    }
    Ok(value)
}

/// Serializes one share: the concatenation of `encode(x) || encode(y)` for
/// each chunk, in chunk order.
pub fn encode_share(
    points: &[(BigUint, BigUint)],
    encoding: ShareEncoding,
    field: &PrimeField,
) -> String {
    let width = element_width(encoding, field);
    let mut out = String::with_capacity(points.len() * width * 2);
    for (x, y) in points {
        out.push_str(&encode_element(x, encoding, field));
        out.push_str(&encode_element(y, encoding, field));
    }
    out
}

/// Deserializes one share string into its per-chunk (x, y) pairs.
pub fn decode_share(
    text: &str,
    encoding: ShareEncoding,
    field: &PrimeField,
) -> Result<Vec<(BigUint, BigUint)>> {
    let width = element_width(encoding, field);
    let chunk_width = width * 2;

    if !text.is_ascii() {
        return Err(SssError::MalformedShare(
            "share contains non-ascii characters".into(),
        ));
    }
    if text.is_empty() || text.len() % chunk_width != 0 {
        return Err(SssError::MalformedShare(format!(
            "share length {} is not a positive multiple of {}",
            text.len(),
            chunk_width
        )));
    }

    let mut points = Vec::with_capacity(text.len() / chunk_width);
    for window in text.as_bytes().chunks(chunk_width) {
        let window = std::str::from_utf8(window).expect("ascii checked above");
        let x = decode_element(&window[..width], encoding, field)?;
        let y = decode_element(&window[width..], encoding, field)?;
        points.push((x, y));
    }
    Ok(points)
}

/// Checks whether `text` is a well-formed share in the given encoding.
///
/// Same checks as [`decode_share`], but boolean: out-of-range values yield
/// `false` rather than an error.
pub fn is_valid_share(text: &str, encoding: ShareEncoding, field: &PrimeField) -> bool {
    decode_share(text, encoding, field).is_ok()
}
