// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem;
use core::ptr;

use tensile_buffer::RawBuffer;

/// Uncommitted run of elements being constructed into `buffer[start..]`.
///
/// Until [`commit`](Self::commit) is called, dropping the guard (on an early
/// return or while unwinding) drops every element written so far, leaving
/// the slots uninitialized again.
pub(crate) struct Staging<'a, T> {
    buffer: &'a mut RawBuffer<T>,
    start: usize,
    written: usize,
}

impl<'a, T> Staging<'a, T> {
    pub(crate) fn new(buffer: &'a mut RawBuffer<T>, start: usize) -> Self {
        Self {
            buffer,
            start,
            written: 0,
        }
    }

    #[inline]
    pub(crate) fn written(&self) -> usize {
        self.written
    }

    /// Constructs `value` in the next slot.
    ///
    /// # Safety
    ///
    /// `start + written` must be below the buffer's capacity and the slot
    /// must be uninitialized.
    #[inline]
    pub(crate) unsafe fn write(&mut self, value: T) {
        debug_assert!(self.start + self.written < self.buffer.capacity());

        // SAFETY: guaranteed by the caller.
        unsafe { ptr::write(self.buffer.slot_mut(self.start + self.written), value) };
        self.written += 1;
    }

    /// Keeps the written elements alive and returns how many there are.
    pub(crate) fn commit(self) -> usize {
        let written = self.written;
        mem::forget(self);
        written
    }
}

impl<T> Drop for Staging<'_, T> {
    fn drop(&mut self) {
        let run = ptr::slice_from_raw_parts_mut(self.buffer.slot_mut(self.start), self.written);

        // SAFETY: exactly `written` contiguous slots from `start` were
        // initialized by `write` and nothing else owns them yet.
        unsafe { ptr::drop_in_place(run) };
    }
}
