// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-thread accounting of [`Tracked`](crate::Tracked) lifecycles.
//!
//! Every test runs on its own thread, so the ledger is isolated per test.
//! Call [`reset`] at the start of a test (or of each proptest case).

use std::cell::Cell;

/// Counters captured by [`snapshot`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSnapshot {
    /// Values created by `Tracked::new` or `Default`.
    pub constructed: usize,
    /// Values created by `Clone`.
    pub cloned: usize,
    /// Values dropped.
    pub dropped: usize,
}

impl LedgerSnapshot {
    /// Values currently alive.
    pub fn live(&self) -> usize {
        self.constructed + self.cloned - self.dropped
    }
}

struct Ledger {
    constructed: Cell<usize>,
    cloned: Cell<usize>,
    dropped: Cell<usize>,
    clone_budget: Cell<Option<usize>>,
    default_budget: Cell<Option<usize>>,
}

impl Ledger {
    const fn new() -> Self {
        Self {
            constructed: Cell::new(0),
            cloned: Cell::new(0),
            dropped: Cell::new(0),
            clone_budget: Cell::new(None),
            default_budget: Cell::new(None),
        }
    }
}

thread_local! {
    static LEDGER: Ledger = const { Ledger::new() };
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

/// Consumes one unit of `budget`; returns `true` when the armed operation
/// must fail now. Firing disarms the budget.
fn spend(budget: &Cell<Option<usize>>) -> bool {
    match budget.get() {
        None => false,
        Some(0) => {
            budget.set(None);
            true
        }
        Some(n) => {
            budget.set(Some(n - 1));
            false
        }
    }
}

/// Zeroes all counters and disarms pending failures.
pub fn reset() {
    LEDGER.with(|ledger| {
        ledger.constructed.set(0);
        ledger.cloned.set(0);
        ledger.dropped.set(0);
        ledger.clone_budget.set(None);
        ledger.default_budget.set(None);
    });
}

/// Current counters.
pub fn snapshot() -> LedgerSnapshot {
    LEDGER.with(|ledger| LedgerSnapshot {
        constructed: ledger.constructed.get(),
        cloned: ledger.cloned.get(),
        dropped: ledger.dropped.get(),
    })
}

/// Values currently alive on this thread.
pub fn live() -> usize {
    snapshot().live()
}

/// Lets `n` clones succeed, then panics on the next one.
pub fn fail_clone_after(n: usize) {
    LEDGER.with(|ledger| ledger.clone_budget.set(Some(n)));
}

/// Lets `n` default constructions succeed, then panics on the next one.
pub fn fail_default_after(n: usize) {
    LEDGER.with(|ledger| ledger.default_budget.set(Some(n)));
}

/// Cancels armed failures without touching the counters.
pub fn disarm() {
    LEDGER.with(|ledger| {
        ledger.clone_budget.set(None);
        ledger.default_budget.set(None);
    });
}

pub(crate) fn on_construct() {
    LEDGER.with(|ledger| bump(&ledger.constructed));
}

pub(crate) fn on_default() {
    let fire = LEDGER.with(|ledger| spend(&ledger.default_budget));

    if fire {
        panic!("Tracked::default: injected failure");
    }

    on_construct();
}

pub(crate) fn on_clone() {
    let fire = LEDGER.with(|ledger| spend(&ledger.clone_budget));

    if fire {
        panic!("Tracked::clone: injected failure");
    }

    LEDGER.with(|ledger| bump(&ledger.cloned));
}

pub(crate) fn on_drop() {
    LEDGER.with(|ledger| bump(&ledger.dropped));
}
