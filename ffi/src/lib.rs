// SPDX-FileCopyrightText: © 2023 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! C bindings to the Foundation crates.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod c32check;
