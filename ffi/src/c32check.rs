// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

use alloc::string::ToString;

use foundation_c32check::address::{Address, HASH160_LEN};

/// Maximum length of an encoded Stacks address in bytes.
pub const C32_ADDRESS_MAX_LEN: usize = 41;

/// Encode a HASH160 as a Stacks address.
///
/// Returns the number of bytes written to `output`, or 0 if the version is
/// bigger than 31.
#[export_name = "foundation_encode_c32_address"]
pub extern "C" fn encode_c32_address(
    version: u8,
    hash160: &[u8; HASH160_LEN],
    output: &mut [u8; C32_ADDRESS_MAX_LEN],
) -> usize {
    let Ok(address) = Address::new(version, *hash160) else {
        return 0;
    };

    let address = address.to_string();
    output[..address.len()].copy_from_slice(address.as_bytes());
    address.len()
}
