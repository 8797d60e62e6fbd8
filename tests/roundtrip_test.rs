use shamir_sss::{Config, PrimeField, ShamirSss, ShareEncoding};

#[test]
fn test_roundtrip_across_thresholds() {
    let secret = b"parameter sweep secret";

    for shares_count in 1..=5usize {
        for minimum in 1..=shares_count {
            let mut scheme = ShamirSss::new(minimum, shares_count).unwrap();
            let shares = scheme.create(secret).unwrap();
            assert_eq!(shares.len(), shares_count);

            let recovered =
                ShamirSss::combine(&shares[0..minimum], ShareEncoding::Base64).unwrap();
            assert_eq!(recovered, secret, "m={minimum} n={shares_count}");
        }
    }
}

#[test]
fn test_threshold_equivalence_windows() {
    // With create(3, 6), any window of >= 3 shares yields the same secret.
    let secret = b"threshold equivalence";
    let mut scheme = ShamirSss::new(3, 6).unwrap();
    let shares = scheme.create(secret).unwrap();

    for subset in [&shares[0..3], &shares[1..5], &shares[3..6]] {
        let recovered = ShamirSss::combine(subset, ShareEncoding::Base64).unwrap();
        assert_eq!(recovered, secret);
    }
}

#[test]
fn test_single_byte_secret() {
    let mut scheme = ShamirSss::new(2, 3).unwrap();
    let shares = scheme.create(b"x").unwrap();
    assert_eq!(
        ShamirSss::combine(&shares[0..2], ShareEncoding::Base64).unwrap(),
        b"x"
    );
}

#[test]
fn test_multi_chunk_secret() {
    // 100 bytes -> 4 chunks of 32 bytes (last one padded).
    let secret: Vec<u8> = (1..=100u8).collect();
    let mut scheme = ShamirSss::new(3, 5).unwrap();
    let shares = scheme.create(&secret).unwrap();

    for share in &shares {
        assert_eq!(share.len(), 4 * 88);
    }

    let recovered = ShamirSss::combine(&shares[1..4], ShareEncoding::Base64).unwrap();
    assert_eq!(recovered, secret);
}

#[test]
fn test_exact_chunk_boundary_secret() {
    let secret = [0xa5u8; 64]; // exactly 2 chunks, no padding
    let mut scheme = ShamirSss::new(2, 4).unwrap();
    let shares = scheme.create(&secret).unwrap();
    let recovered = ShamirSss::combine(&shares[2..4], ShareEncoding::Base64).unwrap();
    assert_eq!(recovered, secret);
}

#[test]
fn test_utf8_text_roundtrip() {
    let secret = "日本語テキストと emoji 🔑 survive the trip".as_bytes();
    let mut scheme = ShamirSss::new(3, 6).unwrap();
    let shares = scheme.create(secret).unwrap();
    let recovered = ShamirSss::combine(&shares[0..3], ShareEncoding::Base64).unwrap();
    assert_eq!(recovered, secret);
    assert!(std::str::from_utf8(&recovered).is_ok());
}

#[test]
fn test_trailing_null_byte_documented_loss() {
    // Right-side padding and right-side trimming make a trailing 0x00
    // indistinguishable from padding. The byte is lost; this is the
    // documented behavior, not a round-trip failure.
    let secret = b"trailing\x00";
    let mut scheme = ShamirSss::new(2, 3).unwrap();
    let shares = scheme.create(secret).unwrap();
    let recovered = ShamirSss::combine(&shares[0..2], ShareEncoding::Base64).unwrap();
    assert_eq!(recovered, b"trailing");
}

#[test]
fn test_hex_and_base64_recover_identically() {
    let secret = b"same secret, both encodings";

    let mut b64_scheme = ShamirSss::new(2, 3).unwrap();
    let b64_shares = b64_scheme.create(secret).unwrap();

    let hex_config = Config::new().with_encoding(ShareEncoding::Hex);
    let mut hex_scheme = ShamirSss::builder(2, 3).with_config(hex_config).build().unwrap();
    let hex_shares = hex_scheme.create(secret).unwrap();

    assert_eq!(
        ShamirSss::combine(&b64_shares[0..2], ShareEncoding::Base64).unwrap(),
        ShamirSss::combine(&hex_shares[0..2], ShareEncoding::Hex).unwrap(),
    );
}

#[test]
fn test_mersenne127_field_end_to_end() {
    let field = PrimeField::mersenne127();
    let config = Config::new()
        .with_field(field.clone())
        .with_encoding(ShareEncoding::Hex);
    let mut scheme = ShamirSss::builder(3, 5).with_config(config).build().unwrap();

    let secret = b"fits in small chunks";
    let shares = scheme.create(secret).unwrap();
    // 15-byte chunk windows, 32 hex chars per element
    assert_eq!(shares[0].len() % 64, 0);

    let recovered =
        ShamirSss::combine_in_field(&shares[0..3], ShareEncoding::Hex, &field).unwrap();
    assert_eq!(recovered, secret);
}
