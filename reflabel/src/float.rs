// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::abs` lives in `std`, not `core`. This trait routes it through `libm`
//! when `std` is off.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn abs(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn abs(self) -> Self {
        libm::fabs(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("reflabel requires either the `std` or `libm` feature");
