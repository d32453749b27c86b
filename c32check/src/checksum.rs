// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

//! The c32check envelope.
//!
//! A c32check string is the version symbol followed by the c32 encoding of
//! the payload and a 4-byte checksum:
//!
//! ```text
//! C32[version] || c32_encode(payload || sha256d(version || payload)[..4])
//! ```

use alloc::{format, string::String};

use bitcoin_hashes::sha256d;

use crate::{
    alphabet::{self, normalize},
    convert::{c32_decode, c32_encode},
    hex, Error, MAX_VERSION,
};

/// Length of the checksum, in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Calculate the c32check checksum of a hex string.
///
/// Returns the first [`CHECKSUM_LEN`] bytes of the double SHA-256 of the
/// data as a lowercase hex string.
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] if `data_hex` is not a hex string.
pub fn c32_checksum(data_hex: &str) -> Result<String, Error> {
    let data = hex::decode(data_hex)?;
    let hash = sha256d::Hash::hash(&data);
    Ok(hex::encode(&hash.to_byte_array()[..CHECKSUM_LEN]))
}

/// Convert an integer to a c32check version.
///
/// # Errors
///
/// Returns [`Error::InvalidVersion`] if `version` is negative or bigger than
/// [`MAX_VERSION`].
///
/// # Example
///
/// ```
/// # use foundation_c32check::{checked_version, Error};
/// assert_eq!(checked_version(22i64), Ok(22));
/// assert_eq!(checked_version(-1i64), Err(Error::InvalidVersion));
/// ```
pub fn checked_version<T: TryInto<u8>>(version: T) -> Result<u8, Error> {
    version
        .try_into()
        .ok()
        .filter(|&v| v <= MAX_VERSION)
        .ok_or(Error::InvalidVersion)
}

/// Encode a hex string as a c32check string with the given version.
///
/// # Errors
///
/// - [`Error::InvalidVersion`] if `version` is bigger than
///   [`MAX_VERSION`](crate::MAX_VERSION).
/// - [`Error::InvalidEncoding`] if `data` is not a hex string.
///
/// # Example
///
/// ```
/// # use foundation_c32check::{c32check_encode, Error};
/// let encoded = c32check_encode(22, "a46ff88886c2ef9762d970b4d2c63678835bd39d").unwrap();
/// assert_eq!(encoded, "P2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7");
///
/// assert_eq!(c32check_encode(32, "ab"), Err(Error::InvalidVersion));
/// ```
pub fn c32check_encode(version: u8, data: &str) -> Result<String, Error> {
    let version = checked_version(version)?;
    let version_symbol = alphabet::symbol(version).ok_or(Error::InvalidVersion)?;
    let data = hex::normalize(data)?;

    let checksum = c32_checksum(&format!("{version:02x}{data}"))?;
    let c32 = c32_encode(&format!("{data}{checksum}"), None)?;

    let mut encoded = String::with_capacity(1 + c32.len());
    encoded.push(version_symbol);
    encoded.push_str(&c32);
    Ok(encoded)
}

/// Decode a c32check string into its version and hex payload.
///
/// The input is normalized first, so lowercase strings and the `O`, `I` and
/// `L` typos are accepted.
///
/// # Errors
///
/// - [`Error::InvalidFormat`] if the input is too short or the first
///   character is not a c32 symbol.
/// - [`Error::InvalidEncoding`] if the rest of the input is not a c32 string.
/// - [`Error::ChecksumMismatch`] if the checksum does not match.
///
/// # Example
///
/// ```
/// # use foundation_c32check::c32check_decode;
/// let (version, data) = c32check_decode("P2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7").unwrap();
/// assert_eq!(version, 22);
/// assert_eq!(data, "a46ff88886c2ef9762d970b4d2c63678835bd39d");
/// ```
pub fn c32check_decode(input: &str) -> Result<(u8, String), Error> {
    let normalized = normalize(input);

    let mut chars = normalized.chars();
    let version_symbol = chars.next().ok_or(Error::InvalidFormat)?;
    let data = chars.as_str();
    if data.is_empty() {
        return Err(Error::InvalidFormat);
    }

    let version = alphabet::value(version_symbol).ok_or(Error::InvalidFormat)?;
    let data_hex = c32_decode(data, None)?;

    // Not even room for the checksum, so it can't match.
    if data_hex.len() < CHECKSUM_LEN * 2 {
        log::debug!("c32check data too short for a checksum: {} digits", data_hex.len());
        return Err(Error::ChecksumMismatch);
    }

    let (payload, checksum) = data_hex.split_at(data_hex.len() - CHECKSUM_LEN * 2);
    let expected = c32_checksum(&format!("{version:02x}{payload}"))?;
    if checksum != expected {
        log::debug!("c32check checksum mismatch: expected {expected}, got {checksum}");
        return Err(Error::ChecksumMismatch);
    }

    Ok((version, String::from(payload)))
}
