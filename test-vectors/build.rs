// SPDX-FileCopyrightText: © 2023 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data/c32.json");
    println!("cargo:rerun-if-changed=data/c32check.json");
    println!("cargo:rerun-if-changed=data/c32-address.json");
    println!("cargo:rerun-if-changed=data/c32-address-equivalent.json");
}
