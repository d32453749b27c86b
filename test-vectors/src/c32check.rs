// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

/// c32 encoding of a hex string.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct C32Vector {
    pub hex: String,
    pub c32: String,
    pub c32_min_length: Option<usize>,
    /// In bytes.
    pub hex_min_length: Option<usize>,
}

impl C32Vector {
    pub fn new() -> Vec<Self> {
        serde_json::from_slice(include_bytes!("../data/c32.json"))
            .expect("file should be valid JSON")
    }
}

/// c32check encoding of a hex string with a version.
#[derive(Debug, serde::Deserialize)]
pub struct C32CheckVector {
    pub version: u8,
    pub hex: String,
    pub encoded: String,
}

impl C32CheckVector {
    pub fn new() -> Vec<Self> {
        serde_json::from_slice(include_bytes!("../data/c32check.json"))
            .expect("file should be valid JSON")
    }
}

/// A Stacks address and its base58check counterpart.
#[derive(Debug, serde::Deserialize)]
pub struct AddressVector {
    pub version: u8,
    #[serde(with = "faster_hex::nopfx_ignorecase")]
    pub hash160: Vec<u8>,
    pub c32: String,
    pub base58: String,
}

impl AddressVector {
    /// The base58check version byte is the same number as the c32check
    /// version.
    pub fn new() -> Vec<Self> {
        serde_json::from_slice(include_bytes!("../data/c32-address.json"))
            .expect("file should be valid JSON")
    }

    /// The base58check version byte is the Bitcoin equivalent of the
    /// c32check version.
    pub fn equivalent() -> Vec<Self> {
        serde_json::from_slice(include_bytes!("../data/c32-address-equivalent.json"))
            .expect("file should be valid JSON")
    }
}
