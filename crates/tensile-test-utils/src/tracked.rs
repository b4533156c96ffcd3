// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::ledger;

/// Element type whose lifecycle is recorded in the thread's [`ledger`].
///
/// # Example
///
/// ```
/// use tensile_test_utils::{Tracked, ledger};
///
/// ledger::reset();
/// {
///     let a = Tracked::new(7);
///     let _b = a.clone();
///     assert_eq!(ledger::live(), 2);
/// }
/// assert_eq!(ledger::live(), 0);
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tracked {
    value: u32,
}

impl Tracked {
    /// Creates a tracked value.
    pub fn new(value: u32) -> Self {
        ledger::on_construct();
        Self { value }
    }

    /// The payload.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Overwrites the payload.
    pub fn set(&mut self, value: u32) {
        self.value = value;
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        ledger::on_clone();
        Self { value: self.value }
    }
}

impl Default for Tracked {
    fn default() -> Self {
        ledger::on_default();
        Self { value: 0 }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        ledger::on_drop();
    }
}

/// Shorthand for a vector of tracked values.
pub fn tracked(values: &[u32]) -> Vec<Tracked> {
    values.iter().copied().map(Tracked::new).collect()
}

/// Error payload returned by fallible constructors in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectedFailure;

/// Runs `f` and asserts that it panicked.
pub fn assert_panics<R>(f: impl FnOnce() -> R) {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));
    assert!(result.is_err(), "expected the closure to panic");
}
