// SPDX-FileCopyrightText: © 2023 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

#[cfg(feature = "c32check")]
pub mod c32check;

#[cfg(feature = "c32check")]
pub use c32check::{AddressVector, C32CheckVector, C32Vector};
