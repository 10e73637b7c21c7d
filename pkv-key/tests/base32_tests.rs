use pkv_key::KeyError;
use pkv_key::base32::{decode, encode};

/// RFC 4648 vectors plus a few mixed lengths.
const VECTORS: [(&str, &str); 9] = [
    ("f", "MY"),
    ("fo", "MZXQ"),
    ("foo", "MZXW6"),
    ("foob", "MZXW6YQ"),
    ("fooba", "MZXW6YTB"),
    ("foobar", "MZXW6YTBOI"),
    ("A", "IE"),
    ("AB", "IFBA"),
    ("ABC", "IFBEG"),
];

#[test]
fn empty_round_trip() {
    assert_eq!(encode(b""), "");
    assert!(decode("").unwrap().is_empty());
}

#[test]
fn encode_known_vectors() {
    for (plain, encoded) in VECTORS {
        assert_eq!(encode(plain.as_bytes()), encoded, "{plain}");
    }
}

#[test]
fn decode_known_vectors() {
    for (plain, encoded) in VECTORS {
        assert_eq!(decode(encoded).unwrap(), plain.as_bytes(), "{encoded}");
    }
}

#[test]
fn round_trip_binary_lengths() {
    for len in [0usize, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 16, 31, 32, 33, 64, 100, 256, 1024] {
        let data: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
        let encoded = encode(&data);
        assert_eq!(encoded.len(), (len * 8).div_ceil(5));
        assert_eq!(decode(&encoded).unwrap(), data);
    }
}

#[test]
fn decode_then_encode_is_idempotent() {
    let original = "MZXW6YTBOI";
    assert_eq!(encode(&decode(original).unwrap()), original);
}

#[test]
fn rejects_lowercase() {
    let err = decode("mzxw6ytboi").unwrap_err();
    assert!(matches!(err, KeyError::LowercaseBase32 { position: 0 }));

    let err = decode("MZXW6Ytboi").unwrap_err();
    assert!(matches!(err, KeyError::LowercaseBase32 { position: 6 }));
}

#[test]
fn rejects_characters_outside_alphabet() {
    for (text, bad, at) in [("MZ1W", '1', 2), ("MZ8W", '8', 2), ("M=", '=', 1), ("MZ-W", '-', 2)] {
        match decode(text).unwrap_err() {
            KeyError::InvalidBase32Character {
                character,
                position,
            } => {
                assert_eq!(character, bad);
                assert_eq!(position, at);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn reports_position_in_characters() {
    let err = decode("AB\u{e9}").unwrap_err();
    assert!(matches!(
        err,
        KeyError::InvalidBase32Character {
            character: '\u{e9}',
            position: 2
        }
    ));
}

#[test]
fn nonzero_trailing_bits_are_tolerated() {
    // "MZ" is the canonical encoding of "f"; "M3" sets both discarded bits.
    assert_eq!(decode("M3").unwrap(), b"f");
}
