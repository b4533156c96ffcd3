// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::{ptr, slice};

use tensile_buffer::RawBuffer;

/// Owning iterator over the elements of a [`DynamicArray`](crate::DynamicArray).
///
/// Elements not yielded are dropped with the iterator.
pub struct IntoIter<T> {
    storage: RawBuffer<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    /// `storage[0..len)` must be live and owned by the iterator from now on.
    pub(crate) fn new(storage: RawBuffer<T>, len: usize) -> Self {
        Self {
            storage,
            front: 0,
            back: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [front, back) are live.
        unsafe { slice::from_raw_parts(self.storage.slot(self.front), self.back - self.front) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        // SAFETY: slot `front` is live; advancing front hands ownership out.
        let item = unsafe { ptr::read(self.storage.slot(self.front)) };
        self.front += 1;

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;

        // SAFETY: slot `back` was live; shrinking back hands ownership out.
        Some(unsafe { ptr::read(self.storage.slot(self.back)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining =
            ptr::slice_from_raw_parts_mut(self.storage.slot_mut(self.front), self.back - self.front);
        self.front = self.back;

        // SAFETY: the remaining slots are live and no longer reachable.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
