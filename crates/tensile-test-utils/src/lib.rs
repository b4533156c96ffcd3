// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Tensile crates.
//!
//! [`Tracked`] is an element type that reports every construction, clone and
//! drop to a per-thread [`ledger`], and can be armed to panic on a chosen
//! clone or default construction. Tests use it to prove that containers
//! neither leak nor double-drop on any failure path.
//!
//! ## License
//!
//! GPL-3.0-only

pub mod ledger;
mod tracked;

pub use ledger::LedgerSnapshot;
pub use tracked::{InjectedFailure, Tracked, assert_panics, tracked};
