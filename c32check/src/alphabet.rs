// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

//! The c32 alphabet and input normalization.
//!
//! The alphabet leaves out `I`, `L`, `O` and `U`. The first three are
//! accepted on input as typos of `1`, `1` and `0`, see [`normalize`].

use alloc::string::String;

/// The c32 alphabet, the symbol at index `i` has the value `i`.
pub const C32_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// The c32 alphabet as bytes.
pub const C32_SYMBOLS: [u8; 32] = *b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Lowercase hex alphabet used for decoded output.
pub const HEX_ALPHABET: [u8; 16] = *b"0123456789abcdef";

/// The zero symbol, used for padding.
pub const ZERO: char = '0';

const INVALID: u8 = 0xff;

/// Symbol to value lookup table, only valid for the normalized alphabet.
static C32_VALUES: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < C32_SYMBOLS.len() {
        table[C32_SYMBOLS[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the c32 alphabet as a string.
pub fn alphabet() -> &'static str {
    C32_ALPHABET
}

/// Returns the c32 symbol of a value in the `0..32` range.
pub fn symbol(value: u8) -> Option<char> {
    C32_SYMBOLS.get(usize::from(value)).map(|&b| char::from(b))
}

/// Returns the value of an already normalized c32 symbol.
pub fn value(symbol: char) -> Option<u8> {
    let index = usize::try_from(u32::from(symbol)).ok()?;
    match C32_VALUES.get(index) {
        Some(&INVALID) | None => None,
        Some(&v) => Some(v),
    }
}

/// Returns the value of a hex digit, accepting both cases.
pub fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Normalize a single character, see [`normalize`].
pub fn normalize_char(c: char) -> char {
    match c.to_ascii_uppercase() {
        'O' => '0',
        'I' | 'L' => '1',
        c => c,
    }
}

/// Normalize a c32 string.
///
/// Converts the input to uppercase and replaces the commonly mistyped `O`
/// with `0`, and `I` and `L` with `1`. No other substitution is made so a
/// string with characters outside of the alphabet stays invalid.
///
/// # Example
///
/// ```
/// # use foundation_c32check::normalize;
/// assert_eq!(normalize("sp2j6zy48gv1ez5v2v5rb9mp66sw86pykknrv9ej7"),
///            "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7");
/// assert_eq!(normalize("oIl"), "011");
/// ```
pub fn normalize(input: &str) -> String {
    input.chars().map(normalize_char).collect()
}
