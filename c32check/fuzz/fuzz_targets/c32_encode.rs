// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let hex: String = data.iter().map(|b| format!("{b:02x}")).collect();

    let c32 = foundation_c32check::c32_encode(&hex, None).unwrap();
    let decoded = foundation_c32check::c32_decode(&c32, None).unwrap();
    assert_eq!(hex, decoded);

    for version in [0, 22, 31] {
        let encoded = foundation_c32check::c32check_encode(version, &hex).unwrap();
        let (decoded_version, decoded) = foundation_c32check::c32check_decode(&encoded).unwrap();
        assert_eq!(version, decoded_version);
        assert_eq!(hex, decoded);
    }
});
