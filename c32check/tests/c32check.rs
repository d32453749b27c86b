// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

use foundation_c32check::{c32check_decode, c32check_encode, Error};
use foundation_test_vectors::C32CheckVector;

#[test]
pub fn test_encode_decode() {
    for vector in C32CheckVector::new() {
        let encoded = c32check_encode(vector.version, &vector.hex).unwrap();
        assert_eq!(
            encoded, vector.encoded,
            "version={} {}",
            vector.version, vector.hex
        );

        let expected_hex = if vector.hex.len() % 2 == 0 {
            vector.hex.clone()
        } else {
            format!("0{}", vector.hex)
        };

        let (version, hex) = c32check_decode(&encoded).unwrap();
        assert_eq!(version, vector.version);
        assert_eq!(hex, expected_hex);
    }
}

#[test]
pub fn test_decode_homoglyphs() {
    for vector in C32CheckVector::new() {
        let expected = c32check_decode(&vector.encoded).unwrap();

        let homoglyphs = [
            vector.encoded.replace('1', "I"),
            vector.encoded.replace('1', "i"),
            vector.encoded.replace('1', "L"),
            vector.encoded.replace('1', "l"),
            vector.encoded.replace('0', "O"),
            vector.encoded.replace('0', "o"),
            vector.encoded.to_lowercase(),
        ];

        for homoglyph in homoglyphs {
            assert_eq!(c32check_decode(&homoglyph).unwrap(), expected, "{homoglyph}");
        }
    }
}

#[test]
pub fn test_decode_altered_checksum() {
    for vector in C32CheckVector::new() {
        let mut altered = vector.encoded.clone();
        let last = altered.pop().unwrap();
        altered.push(if last == 'X' { 'Y' } else { 'X' });

        assert_eq!(
            c32check_decode(&altered),
            Err(Error::ChecksumMismatch),
            "{altered}"
        );
    }
}
