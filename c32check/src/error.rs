// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

/// Errors from the c32 and c32check codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The input contains characters outside of the hex or c32 alphabet.
    InvalidEncoding,
    /// The version is not in the `0..=31` range.
    InvalidVersion,
    /// The c32check string is too short or has no valid version character.
    InvalidFormat,
    /// The checksum of the c32check string does not match its payload.
    ChecksumMismatch,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidEncoding => write!(f, "invalid encoding"),
            Error::InvalidVersion => write!(
                f,
                "invalid version (must be between 0 and {})",
                crate::MAX_VERSION
            ),
            Error::InvalidFormat => write!(f, "invalid c32check string format"),
            Error::ChecksumMismatch => write!(f, "invalid c32check string: checksum mismatch"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
