// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stacks addresses.
//!
//! A Stacks address is a c32check string of a HASH160 prefixed with the
//! letter `S`, the version symbol selects the network and the kind of
//! address.
//!
//! With the `base58` feature enabled, addresses can be converted to and from
//! the equivalent Bitcoin base58check addresses.

use alloc::string::String;
use core::{fmt, str::FromStr};

use crate::{
    alphabet, c32check_decode, c32check_encode, checksum::CHECKSUM_LEN, convert::c32_max_len,
    hex, Error, MAX_VERSION,
};

/// First character of every Stacks address.
pub const PREFIX: char = 'S';

/// Length of a HASH160, in bytes.
pub const HASH160_LEN: usize = 20;

/// Maximum length of an encoded address.
///
/// This is the prefix, the version symbol and the c32 encoding of the
/// HASH160 plus the checksum.
pub const C32_ADDRESS_MAX_LEN: usize = 2 + c32_max_len(HASH160_LEN + CHECKSUM_LEN);

/// Mainnet pay to public key hash, `P`.
pub const MAINNET_P2PKH: u8 = 22;
/// Mainnet pay to script hash, `M`.
pub const MAINNET_P2SH: u8 = 20;
/// Testnet pay to public key hash, `T`.
pub const TESTNET_P2PKH: u8 = 26;
/// Testnet pay to script hash, `N`.
pub const TESTNET_P2SH: u8 = 21;

/// Bitcoin mainnet P2PKH version byte.
pub const BITCOIN_MAINNET_P2PKH: u8 = 0;
/// Bitcoin mainnet P2SH version byte.
pub const BITCOIN_MAINNET_P2SH: u8 = 5;
/// Bitcoin testnet P2PKH version byte.
pub const BITCOIN_TESTNET_P2PKH: u8 = 111;
/// Bitcoin testnet P2SH version byte.
pub const BITCOIN_TESTNET_P2SH: u8 = 196;

/// Network of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Main network.
    Mainnet,
    /// Test network.
    Testnet,
}

/// Kind of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// Pay to public key hash.
    P2PKH,
    /// Pay to script hash.
    P2SH,
}

/// Returns the c32check version of an address.
pub const fn version(network: Network, kind: AddressType) -> u8 {
    match (network, kind) {
        (Network::Mainnet, AddressType::P2PKH) => MAINNET_P2PKH,
        (Network::Mainnet, AddressType::P2SH) => MAINNET_P2SH,
        (Network::Testnet, AddressType::P2PKH) => TESTNET_P2PKH,
        (Network::Testnet, AddressType::P2SH) => TESTNET_P2SH,
    }
}

/// Returns the network and kind of a c32check version, if known.
pub const fn network(version: u8) -> Option<(Network, AddressType)> {
    match version {
        MAINNET_P2PKH => Some((Network::Mainnet, AddressType::P2PKH)),
        MAINNET_P2SH => Some((Network::Mainnet, AddressType::P2SH)),
        TESTNET_P2PKH => Some((Network::Testnet, AddressType::P2PKH)),
        TESTNET_P2SH => Some((Network::Testnet, AddressType::P2SH)),
        _ => None,
    }
}

/// Map a Bitcoin version byte to the equivalent c32check version.
///
/// Unknown versions are returned as is.
pub const fn bitcoin_to_stacks_version(version: u8) -> u8 {
    match version {
        BITCOIN_MAINNET_P2PKH => MAINNET_P2PKH,
        BITCOIN_MAINNET_P2SH => MAINNET_P2SH,
        BITCOIN_TESTNET_P2PKH => TESTNET_P2PKH,
        BITCOIN_TESTNET_P2SH => TESTNET_P2SH,
        v => v,
    }
}

/// Map a c32check version to the equivalent Bitcoin version byte.
///
/// Unknown versions are returned as is.
pub const fn stacks_to_bitcoin_version(version: u8) -> u8 {
    match version {
        MAINNET_P2PKH => BITCOIN_MAINNET_P2PKH,
        MAINNET_P2SH => BITCOIN_MAINNET_P2SH,
        TESTNET_P2PKH => BITCOIN_TESTNET_P2PKH,
        TESTNET_P2SH => BITCOIN_TESTNET_P2SH,
        v => v,
    }
}

/// Encode a HASH160 as a Stacks address.
///
/// # Errors
///
/// - [`AddressError::InvalidHash160`] if `hash160_hex` is not exactly 40 hex
///   digits.
/// - [`AddressError::C32`] if the version is invalid.
///
/// # Example
///
/// ```
/// # use foundation_c32check::address::c32_address;
/// let address = c32_address(22, "a46ff88886c2ef9762d970b4d2c63678835bd39d").unwrap();
/// assert_eq!(address, "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7");
/// ```
pub fn c32_address(version: u8, hash160_hex: &str) -> Result<String, AddressError> {
    if hash160_hex.len() != HASH160_LEN * 2 || !hash160_hex.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(AddressError::InvalidHash160);
    }

    let encoded = c32check_encode(version, hash160_hex)?;

    let mut address = String::with_capacity(1 + encoded.len());
    address.push(PREFIX);
    address.push_str(&encoded);
    Ok(address)
}

/// Decode a Stacks address into its version and HASH160.
///
/// The `S` prefix is case sensitive, the rest of the address is normalized
/// like any c32check string.
///
/// # Errors
///
/// - [`AddressError::InvalidLength`] if the address is too short.
/// - [`AddressError::MissingPrefix`] if it doesn't start with `S`.
/// - [`AddressError::C32`] if the c32check string is invalid.
pub fn c32_address_decode(address: &str) -> Result<(u8, String), AddressError> {
    if address.len() <= 5 {
        return Err(AddressError::InvalidLength);
    }

    let c32 = address
        .strip_prefix(PREFIX)
        .ok_or(AddressError::MissingPrefix)?;

    Ok(c32check_decode(c32)?)
}

/// Convert a Bitcoin base58check address to a Stacks address.
///
/// If `version` is not given the Bitcoin version is mapped with
/// [`bitcoin_to_stacks_version`].
///
/// # Example
///
/// ```
/// # use foundation_c32check::address::b58_to_c32;
/// let address = b58_to_c32("16EMaNw3pkn3v6f2BgnSSs53zAKH4Q8YJg", None).unwrap();
/// assert_eq!(address, "SPWNYDJ3STG7XH7ERWXMV6MQ7Q6EATWVY5Q1QMP8");
/// ```
#[cfg(feature = "base58")]
pub fn b58_to_c32(b58: &str, version: Option<u8>) -> Result<String, AddressError> {
    let decoded = bs58::decode(b58).with_check(None).into_vec()?;
    let (&prefix, hash160) = decoded
        .split_first()
        .ok_or(AddressError::InvalidBase58Payload)?;

    let version = version.unwrap_or(bitcoin_to_stacks_version(prefix));
    log::debug!("base58 version {prefix} to c32check version {version}");

    c32_address(version, &hex::encode(hash160))
}

/// Convert a Stacks address to a Bitcoin base58check address.
///
/// If `version` is not given the c32check version is mapped with
/// [`stacks_to_bitcoin_version`].
///
/// # Example
///
/// ```
/// # use foundation_c32check::address::c32_to_b58;
/// let address = c32_to_b58("SPWNYDJ3STG7XH7ERWXMV6MQ7Q6EATWVY5Q1QMP8", None).unwrap();
/// assert_eq!(address, "16EMaNw3pkn3v6f2BgnSSs53zAKH4Q8YJg");
/// ```
#[cfg(feature = "base58")]
pub fn c32_to_b58(c32: &str, version: Option<u8>) -> Result<String, AddressError> {
    let (stacks_version, hash160_hex) = c32_address_decode(c32)?;
    let version = version.unwrap_or(stacks_to_bitcoin_version(stacks_version));
    log::debug!("c32check version {stacks_version} to base58 version {version}");

    let hash160 = hex::decode(&hash160_hex)?;
    Ok(bs58::encode(hash160)
        .with_check_version(version)
        .into_string())
}

/// A Stacks address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    version: u8,
    hash160: [u8; HASH160_LEN],
}

impl Address {
    /// Construct an address from a c32check version and a HASH160.
    pub fn new(version: u8, hash160: [u8; HASH160_LEN]) -> Result<Self, AddressError> {
        if version > MAX_VERSION {
            return Err(AddressError::C32(Error::InvalidVersion));
        }

        Ok(Self { version, hash160 })
    }

    /// Construct an address for a network and address kind.
    pub fn from_network(network: Network, kind: AddressType, hash160: [u8; HASH160_LEN]) -> Self {
        Self {
            version: version(network, kind),
            hash160,
        }
    }

    /// The c32check version of the address.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The HASH160 of the address.
    pub fn hash160(&self) -> &[u8; HASH160_LEN] {
        &self.hash160
    }

    /// The network and kind of the address, if the version is a known one.
    pub fn network(&self) -> Option<(Network, AddressType)> {
        network(self.version)
    }

    /// Parse a Bitcoin base58check address, mapping its version.
    #[cfg(feature = "base58")]
    pub fn from_base58(s: &str) -> Result<Self, AddressError> {
        b58_to_c32(s, None)?.parse()
    }

    /// Encode as a Bitcoin base58check address.
    ///
    /// If `version` is not given the c32check version is mapped with
    /// [`stacks_to_bitcoin_version`].
    #[cfg(feature = "base58")]
    pub fn to_base58(&self, version: Option<u8>) -> String {
        let version = version.unwrap_or(stacks_to_bitcoin_version(self.version));
        bs58::encode(self.hash160)
            .with_check_version(version)
            .into_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let address =
            c32_address(self.version, &hex::encode(&self.hash160)).map_err(|_| fmt::Error)?;
        f.write_str(&address)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (version, hash160_hex) = c32_address_decode(s)?;
        let hash160 = hex::decode(&hash160_hex)?
            .try_into()
            .map_err(|_| AddressError::InvalidHash160)?;

        Ok(Self { version, hash160 })
    }
}

/// Errors of Stacks addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The address is too short.
    InvalidLength,
    /// The address doesn't start with `S`.
    MissingPrefix,
    /// The HASH160 is not 20 bytes.
    InvalidHash160,
    /// The c32check string is invalid.
    C32(Error),
    /// The base58check string is invalid.
    #[cfg(feature = "base58")]
    Base58(bs58::decode::Error),
    /// The base58check string has no version byte.
    InvalidBase58Payload,
}

impl From<Error> for AddressError {
    fn from(e: Error) -> Self {
        AddressError::C32(e)
    }
}

#[cfg(feature = "base58")]
impl From<bs58::decode::Error> for AddressError {
    fn from(e: bs58::decode::Error) -> Self {
        AddressError::Base58(e)
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidLength => write!(f, "invalid c32 address: invalid length"),
            AddressError::MissingPrefix => {
                write!(f, "invalid c32 address: must start with \"{PREFIX}\"")
            }
            AddressError::InvalidHash160 => write!(f, "not a hash160 hex string"),
            AddressError::C32(e) => write!(f, "invalid c32 address: {e}"),
            #[cfg(feature = "base58")]
            AddressError::Base58(e) => write!(f, "invalid base58check address: {e}"),
            AddressError::InvalidBase58Payload => {
                write!(f, "invalid base58check address: missing version")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddressError {}

// Keeps the version symbol of the known networks in sync with the constants.
const _: () = {
    assert!(alphabet::C32_SYMBOLS[MAINNET_P2PKH as usize] == b'P');
    assert!(alphabet::C32_SYMBOLS[MAINNET_P2SH as usize] == b'M');
    assert!(alphabet::C32_SYMBOLS[TESTNET_P2PKH as usize] == b'T');
    assert!(alphabet::C32_SYMBOLS[TESTNET_P2SH as usize] == b'N');
};

#[cfg(test)]
mod tests {
    use super::*;

    const HASH160: &str = "a46ff88886c2ef9762d970b4d2c63678835bd39d";

    #[test]
    fn test_version() {
        assert_eq!(version(Network::Mainnet, AddressType::P2PKH), 22);
        assert_eq!(version(Network::Mainnet, AddressType::P2SH), 20);
        assert_eq!(version(Network::Testnet, AddressType::P2PKH), 26);
        assert_eq!(version(Network::Testnet, AddressType::P2SH), 21);
        assert_eq!(network(22), Some((Network::Mainnet, AddressType::P2PKH)));
        assert_eq!(network(0), None);

        for v in [0, 5, 111, 196] {
            assert_eq!(stacks_to_bitcoin_version(bitcoin_to_stacks_version(v)), v);
        }
        assert_eq!(bitcoin_to_stacks_version(3), 3);
        assert_eq!(stacks_to_bitcoin_version(31), 31);
    }

    #[test]
    fn test_c32_address_invalid() {
        assert_eq!(
            c32_address(32, HASH160),
            Err(AddressError::C32(Error::InvalidVersion))
        );

        for hash160 in [
            "a46ff88886c2ef9762d970b4d2c63678835bd39d00",
            "a46ff88886c2ef9762d970b4d2c63678835bd3",
            "a46ff88886c2ef9762d970b4d2c63678835bd39d0",
            "a46ff88886c2ef9762d970b4d2c63678835bd39",
            "g46ff88886c2ef9762d970b4d2c63678835bd39d",
        ] {
            assert_eq!(c32_address(5, hash160), Err(AddressError::InvalidHash160));
        }
    }

    #[test]
    fn test_c32_address_decode_invalid() {
        assert_eq!(c32_address_decode("ST2J"), Err(AddressError::InvalidLength));
        assert_eq!(
            c32_address_decode("bP2CT665Q0JB7P39TZ7BST0QYCAQSMJWBZK8QT35J"),
            Err(AddressError::MissingPrefix)
        );

        for address in [
            "ST2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKQYAC0RQ0",
            "ST2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKQYAC0RR",
            "ST2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKQYAC0R",
        ] {
            assert!(matches!(
                c32_address_decode(address),
                Err(AddressError::C32(_))
            ));
        }
    }

    #[test]
    fn test_address() {
        let mut hash160 = [0; HASH160_LEN];
        faster_hex::hex_decode(HASH160.as_bytes(), &mut hash160).unwrap();

        let address = Address::from_network(Network::Mainnet, AddressType::P2PKH, hash160);
        assert_eq!(address.version(), 22);
        assert_eq!(
            address.network(),
            Some((Network::Mainnet, AddressType::P2PKH))
        );
        assert_eq!(
            address.to_string(),
            "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7"
        );
        assert_eq!(
            "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7".parse::<Address>(),
            Ok(address)
        );
        assert_eq!(
            Address::new(32, hash160),
            Err(AddressError::C32(Error::InvalidVersion))
        );
    }

    #[test]
    fn test_address_max_len() {
        for version in 0..=MAX_VERSION {
            for hash160 in [[0xff; HASH160_LEN], [0x80; HASH160_LEN], [0; HASH160_LEN]] {
                let address = Address::new(version, hash160).unwrap().to_string();
                assert!(address.len() <= C32_ADDRESS_MAX_LEN, "{address}");
            }
        }
    }

    #[test]
    fn test_address_wrong_payload_length() {
        // A valid c32check string with a 1 byte payload.
        let address = "SP4VKEFGY";
        assert_eq!(c32_address_decode(address).unwrap(), (22, String::from("01")));
        assert_eq!(
            address.parse::<Address>(),
            Err(AddressError::InvalidHash160)
        );
    }

    #[cfg(feature = "base58")]
    #[test]
    fn test_base58() {
        let b58 = "3D2oetdNuZUqQHPJmcMDDHYoqkyNVsFk9r";
        let c32 = "SM1Y6EXF21RZ9739DFTEQKB1H044BMM0XVCM4A4NY";

        assert_eq!(b58_to_c32(b58, None).unwrap(), c32);
        assert_eq!(c32_to_b58(c32, None).unwrap(), b58);

        let address = Address::from_base58(b58).unwrap();
        assert_eq!(address.version(), MAINNET_P2SH);
        assert_eq!(address.to_base58(None), b58);
        assert_eq!(address.to_string(), c32);
    }

    #[cfg(feature = "base58")]
    #[test]
    fn test_base58_invalid() {
        // Last character changed.
        assert!(matches!(
            b58_to_c32("3D2oetdNuZUqQHPJmcMDDHYoqkyNVsFk9s", None),
            Err(AddressError::Base58(_))
        ));
        // The payload of a base58check string must be a HASH160.
        let short = bs58::encode([0xab; 4]).with_check_version(0).into_string();
        assert_eq!(b58_to_c32(&short, None), Err(AddressError::InvalidHash160));
    }
}
