// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

//! # Foundation c32check
//!
//! Implementation of the Stacks _c32_ and _c32check_ encodings.
//!
//! c32 is a base-32 encoding of big-endian hex strings using the
//! Crockford-style alphabet `0123456789ABCDEFGHJKMNPQRSTVWXYZ`. Unlike a big
//! integer conversion it keeps the number of leading zero bytes, one `0`
//! symbol per zero byte.
//!
//! c32check wraps the c32 encoding in a versioned envelope protected by a
//! 4-byte double SHA-256 checksum, in the same spirit as base58check.
//!
//! ```
//! # use foundation_c32check::{c32check_decode, c32check_encode};
//! let encoded = c32check_encode(22, "a46ff88886c2ef9762d970b4d2c63678835bd39d").unwrap();
//! assert_eq!(encoded, "P2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7");
//!
//! let (version, data) = c32check_decode(&encoded).unwrap();
//! assert_eq!(version, 22);
//! assert_eq!(data, "a46ff88886c2ef9762d970b4d2c63678835bd39d");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod address;
pub mod alphabet;
pub mod checksum;
pub mod convert;
mod error;
mod hex;

pub use alphabet::{alphabet, normalize};
pub use checksum::{c32_checksum, c32check_decode, c32check_encode, checked_version};
pub use convert::{c32_decode, c32_encode, c32_max_len};
pub use error::Error;

/// Maximum value of a c32check version, inclusive.
pub const MAX_VERSION: u8 = 31;
