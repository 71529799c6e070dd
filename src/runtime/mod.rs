// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser bindings.
//!
//! The core crate never touches the DOM. Everything page-specific (fetching
//! the index, wiring the input box, timers, the live page tree) lives behind
//! the `wasm` feature in [`wasm`].

#[cfg(feature = "wasm")]
pub mod wasm;
