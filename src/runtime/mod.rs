// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings.
//!
//! The widget core is platform-free; this is where it meets the browser.

#[cfg(feature = "wasm")]
pub mod wasm;
