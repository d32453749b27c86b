// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hex string helpers.

use alloc::{string::String, vec, vec::Vec};

use crate::{alphabet::hex_value, Error};

/// Parse a hex string into its nibbles, left-padded with a zero nibble when
/// the number of digits is odd.
pub(crate) fn nibbles(hex: &str) -> Result<Vec<u8>, Error> {
    let digits = hex.as_bytes();
    let mut nibbles = Vec::with_capacity(digits.len() + 1);

    if digits.len() % 2 != 0 {
        nibbles.push(0);
    }

    for &digit in digits {
        nibbles.push(hex_value(digit).ok_or(Error::InvalidEncoding)?);
    }

    Ok(nibbles)
}

/// Returns a lowercase, even length, copy of a hex string.
pub(crate) fn normalize(hex: &str) -> Result<String, Error> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidEncoding);
    }

    let mut normalized = String::with_capacity(hex.len() + 1);
    if hex.len() % 2 != 0 {
        normalized.push('0');
    }
    normalized.extend(hex.chars().map(|c| c.to_ascii_lowercase()));

    Ok(normalized)
}

/// Decode a hex string to bytes.
pub(crate) fn decode(hex: &str) -> Result<Vec<u8>, Error> {
    let hex = normalize(hex)?;
    let mut bytes = vec![0; hex.len() / 2];
    faster_hex::hex_decode(hex.as_bytes(), &mut bytes).map_err(|_| Error::InvalidEncoding)?;
    Ok(bytes)
}

/// Encode bytes as a lowercase hex string.
pub(crate) fn encode(bytes: &[u8]) -> String {
    let mut buf = vec![0; bytes.len() * 2];
    let hex = faster_hex::hex_encode(bytes, &mut buf)
        .expect("buffer should be twice the length of the input");
    String::from(&*hex)
}
