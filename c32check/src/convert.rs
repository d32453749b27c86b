// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion between hex and c32 strings.
//!
//! Both directions walk the input from the least significant digit and move
//! bits through a small carry, 5 bits per c32 symbol and 4 bits per hex
//! digit. Leading zeros are not part of the numeric value so they are
//! counted separately: every leading zero byte of the hex string becomes a
//! leading `0` symbol and the other way around.

use alloc::{string::String, vec::Vec};
use core::iter;

use crate::{
    alphabet::{self, normalize_char, C32_SYMBOLS, HEX_ALPHABET, ZERO},
    hex, Error,
};

/// Calculate the maximum length of the c32 encoding of `len` bytes.
///
/// Without leading zeros the numeric conversion needs one symbol per 5 bits,
/// rounded up. A leading zero byte is a single `0` symbol instead of 8 bits,
/// so it can only shorten the result. Padding from a minimum length is not
/// taken into account.
pub const fn c32_max_len(len: usize) -> usize {
    (len * 8 + 4) / 5
}

/// Number of padding digits needed to reach `min` from `len`.
fn padding(min: Option<usize>, len: usize) -> usize {
    min.map_or(0, |min| min.saturating_sub(len))
}

/// Encode a hex string as a c32 string.
///
/// The hex string is big-endian and may use both lowercase and uppercase
/// digits. An odd number of digits is left-padded with a `0`.
///
/// If `min_length` is given the result is left-padded with `0` symbols up to
/// that many symbols. The result is never truncated.
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] if `hex` is not a hex string.
///
/// # Example
///
/// ```
/// # use foundation_c32check::c32_encode;
/// let c32 = c32_encode("a46ff88886c2ef9762d970b4d2c63678835bd39d", None).unwrap();
/// assert_eq!(c32, "MHQZH246RBQSERPSE2TD5HHPF21NQMWX");
///
/// assert_eq!(c32_encode("", Some(20)).unwrap(), "00000000000000000000");
/// ```
pub fn c32_encode(hex: &str, min_length: Option<usize>) -> Result<String, Error> {
    let nibbles = hex::nibbles(hex)?;

    // Least significant symbol first.
    let mut symbols = Vec::with_capacity(nibbles.len() * 4 / 5 + 1);
    let mut carry: u8 = 0;
    for i in (0..nibbles.len()).rev() {
        if carry < 4 {
            let current = nibbles[i] >> carry;
            let next = if i != 0 { nibbles[i - 1] } else { 0 };
            let next_bits = carry + 1;
            let next_low_bits = (next % (1 << next_bits)) << (5 - next_bits);
            symbols.push(C32_SYMBOLS[usize::from(current + next_low_bits)]);
            carry = next_bits;
        } else {
            // The previous symbol already consumed all the bits of this
            // nibble.
            carry = 0;
        }
    }

    while symbols.last() == Some(&b'0') {
        symbols.pop();
    }

    let leading_zero_bytes = nibbles
        .chunks(2)
        .take_while(|byte| byte.iter().all(|&n| n == 0))
        .count();

    let len = leading_zero_bytes + symbols.len();
    let padding = padding(min_length, len);

    log::trace!(
        "c32 encode: {} nibbles, {leading_zero_bytes} leading zero bytes, {padding} padding symbols",
        nibbles.len(),
    );

    let mut encoded = String::with_capacity(padding + len);
    encoded.extend(iter::repeat(ZERO).take(padding + leading_zero_bytes));
    encoded.extend(symbols.iter().rev().map(|&s| char::from(s)));
    Ok(encoded)
}

/// Decode a c32 string to a lowercase hex string.
///
/// The input is normalized first, see [`normalize`](crate::normalize). The
/// result always has an even number of digits.
///
/// If `min_length` (in bytes) is given the result is left-padded with `00`
/// up to that many bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] if `c32` has characters outside of the
/// c32 alphabet after normalization.
///
/// # Example
///
/// ```
/// # use foundation_c32check::c32_decode;
/// let hex = c32_decode("MHQZH246RBQSERPSE2TD5HHPF21NQMWX", None).unwrap();
/// assert_eq!(hex, "a46ff88886c2ef9762d970b4d2c63678835bd39d");
///
/// assert_eq!(c32_decode("01", Some(4)).unwrap(), "00000001");
/// ```
pub fn c32_decode(c32: &str, min_length: Option<usize>) -> Result<String, Error> {
    let values = c32
        .chars()
        .map(|c| alphabet::value(normalize_char(c)).ok_or(Error::InvalidEncoding))
        .collect::<Result<Vec<u8>, _>>()?;

    let leading_zero_symbols = values.iter().take_while(|&&v| v == 0).count();

    // Least significant nibble first.
    let mut nibbles = Vec::with_capacity(values.len() * 5 / 4 + 2);
    let mut carry: u16 = 0;
    let mut carry_bits = 0;
    for &value in values.iter().rev() {
        if carry_bits == 4 {
            nibbles.push(carry as u8);
            carry_bits = 0;
            carry = 0;
        }

        let current = (u16::from(value) << carry_bits) + carry;
        nibbles.push((current % 16) as u8);
        carry_bits += 1;
        carry = current >> 4;

        debug_assert!(
            carry <= 1 << carry_bits,
            "c32 decoder carry {carry} overflows {carry_bits} bits"
        );
    }
    nibbles.push(carry as u8);

    if nibbles.len() % 2 != 0 {
        nibbles.push(0);
    }

    // Drop the zero bytes that come from the numeric conversion, the leading
    // zero symbols are added back below.
    let hex_leading_zeros = nibbles.iter().rev().take_while(|&&n| n == 0).count();
    nibbles.truncate(nibbles.len() - (hex_leading_zeros - hex_leading_zeros % 2));

    let len = leading_zero_symbols * 2 + nibbles.len();
    // The minimum length is in bytes.
    let padding = padding(min_length.map(|min| min.saturating_mul(2)), len);

    log::trace!(
        "c32 decode: {} symbols, {leading_zero_symbols} leading zero symbols, {padding} padding digits",
        values.len(),
    );

    let mut decoded = String::with_capacity(padding + len);
    decoded.extend(iter::repeat('0').take(padding + leading_zero_symbols * 2));
    decoded.extend(
        nibbles
            .iter()
            .rev()
            .map(|&n| char::from(HEX_ALPHABET[usize::from(n)])),
    );
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH160: &str = "a46ff88886c2ef9762d970b4d2c63678835bd39d";
    const HASH160_C32: &str = "MHQZH246RBQSERPSE2TD5HHPF21NQMWX";

    #[test]
    fn test_encode() {
        assert_eq!(c32_encode(HASH160, None).unwrap(), HASH160_C32);
        assert_eq!(
            c32_encode(&HASH160.to_uppercase(), None).unwrap(),
            HASH160_C32
        );
        assert_eq!(c32_encode("", None).unwrap(), "");
        assert_eq!(c32_encode("", Some(20)).unwrap(), "00000000000000000000");
        assert_eq!(c32_encode("1", None).unwrap(), "1");
        assert_eq!(c32_encode("10", None).unwrap(), "G");
        assert_eq!(c32_encode("100", None).unwrap(), "80");
    }

    #[test]
    fn test_encode_leading_zeros() {
        // One symbol per leading zero byte, odd digits are padded first.
        assert_eq!(c32_encode("001", None).unwrap(), "01");
        assert_eq!(c32_encode("0001", None).unwrap(), "01");
        assert_eq!(c32_encode("00001", None).unwrap(), "001");
        assert_eq!(c32_encode("00000001", None).unwrap(), "0001");
        assert_eq!(
            c32_encode("0000000000000000000000000000000000000000", None).unwrap(),
            "00000000000000000000"
        );
        assert_eq!(
            c32_encode("0000000000000000000000000000000000000001", Some(20)).unwrap(),
            "00000000000000000001"
        );
    }

    #[test]
    fn test_encode_min_length() {
        assert_eq!(c32_encode("22", Some(7)).unwrap(), "0000012");
        // Never truncates.
        assert_eq!(c32_encode(HASH160, Some(2)).unwrap(), HASH160_C32);
        assert_eq!(c32_encode(HASH160, Some(0)).unwrap(), HASH160_C32);
    }

    #[test]
    fn test_max_len() {
        assert_eq!(c32_max_len(0), 0);
        assert_eq!(c32_max_len(1), 2);
        assert_eq!(c32_max_len(5), 8);
        assert_eq!(c32_max_len(20), HASH160_C32.len());

        for hex in ["ff", "00ff", "0000", "ffffffffff", "8000000000000000000000"] {
            let c32 = c32_encode(hex, None).unwrap();
            assert!(c32.len() <= c32_max_len(hex.len() / 2), "{hex}");
        }
    }

    #[test]
    fn test_encode_invalid() {
        assert_eq!(c32_encode("abcdefg", None), Err(Error::InvalidEncoding));
        assert_eq!(c32_encode("0x12", None), Err(Error::InvalidEncoding));
        assert_eq!(c32_encode(" 12", None), Err(Error::InvalidEncoding));
    }

    #[test]
    fn test_decode() {
        assert_eq!(c32_decode(HASH160_C32, None).unwrap(), HASH160);
        assert_eq!(c32_decode("", None).unwrap(), "");
        assert_eq!(c32_decode("1", None).unwrap(), "01");
        assert_eq!(c32_decode("12", None).unwrap(), "22");
        assert_eq!(c32_decode("01", None).unwrap(), "0001");
        assert_eq!(c32_decode("0001", None).unwrap(), "00000001");
        assert_eq!(c32_decode("G0000", None).unwrap(), "01000000");
        assert_eq!(
            c32_decode("00000000000000000000", None).unwrap(),
            "0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_decode_min_length() {
        assert_eq!(c32_decode("12", Some(6)).unwrap(), "000000000022");
        assert_eq!(c32_decode("", Some(2)).unwrap(), "0000");
        assert_eq!(c32_decode(HASH160_C32, Some(1)).unwrap(), HASH160);
    }

    #[test]
    fn test_padding() {
        assert_eq!(padding(None, 4), 0);
        assert_eq!(padding(Some(2), 4), 0);
        assert_eq!(padding(Some(6), 4), 2);
        assert_eq!(padding(Some(usize::MAX), 4), usize::MAX - 4);
        // Byte lengths past usize::MAX / 2 saturate instead of overflowing.
        let min = Some(usize::MAX / 2 + 1).map(|min: usize| min.saturating_mul(2));
        assert_eq!(padding(min, 2), usize::MAX - 2);
    }

    #[test]
    fn test_decode_homoglyphs() {
        assert_eq!(
            c32_decode(&HASH160_C32.to_lowercase(), None).unwrap(),
            HASH160
        );
        assert_eq!(
            c32_decode("MHQZH246RBQSERPSE2TD5HHPF2INQMWX", None).unwrap(),
            HASH160
        );
        assert_eq!(
            c32_decode("MHQZH246RBQSERPSE2TD5HHPF2lNQMWX", None).unwrap(),
            HASH160
        );
        assert_eq!(c32_decode("oo", None).unwrap(), "0000");
    }

    #[test]
    fn test_decode_invalid() {
        assert_eq!(c32_decode("U", None), Err(Error::InvalidEncoding));
        assert_eq!(c32_decode("MHQZ-H246", None), Err(Error::InvalidEncoding));
        assert_eq!(c32_decode("12 ", None), Err(Error::InvalidEncoding));
        assert_eq!(c32_decode("ñ", None), Err(Error::InvalidEncoding));
    }

    #[test]
    fn test_roundtrip() {
        let inputs = [
            "00",
            "ff",
            "00ff",
            "0000ff00",
            "ffffffffffffffffffff",
            "000102030405060708090a0b0c0d0e0f",
            "8000000000000000000000000000000000000000000000000000000000000001",
        ];

        for hex in inputs {
            let c32 = c32_encode(hex, None).unwrap();
            assert_eq!(c32_decode(&c32, None).unwrap(), hex, "{c32}");

            let padded = c32_encode(hex, Some(c32.len() + 3)).unwrap();
            assert_eq!(padded, format!("000{c32}"));
            assert_eq!(c32_decode(&padded, None).unwrap(), format!("000000{hex}"));
        }
    }
}
