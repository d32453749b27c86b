// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    foundation_c32check::c32_decode(data, None).ok();
    foundation_c32check::c32check_decode(data).ok();
    foundation_c32check::address::c32_address_decode(data).ok();
});
