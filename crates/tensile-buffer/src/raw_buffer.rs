// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RawBuffer - exclusively-owned block of uninitialized `T` slots.

use alloc::alloc::{Layout, alloc, dealloc};
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use crate::error::RawBufferError;

/// A block of uninitialized storage for `capacity` values of `T`.
///
/// The buffer never constructs, reads or drops a `T`. Whoever writes into a
/// slot is responsible for dropping that value before the buffer is released.
///
/// When `capacity == 0` (or `T` is zero-sized) the pointer is a dangling,
/// well-aligned sentinel and no memory is owned.
pub struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates an empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Acquires storage for `capacity` elements.
    ///
    /// `capacity == 0` returns the empty buffer without calling the allocator.
    ///
    /// # Errors
    ///
    /// - [`RawBufferError::CapacityOverflow`] if `capacity * size_of::<T>()`
    ///   does not fit in a valid layout.
    /// - [`RawBufferError::AllocationFailure`] if the allocator returns null.
    ///
    /// On error nothing has been allocated.
    pub fn create(capacity: usize) -> Result<Self, RawBufferError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout =
            Layout::array::<T>(capacity).map_err(|_| RawBufferError::CapacityOverflow { capacity })?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: layout has a non-zero size.
        let raw = unsafe { alloc(layout) };

        let ptr = NonNull::new(raw.cast::<T>()).ok_or(RawBufferError::AllocationFailure {
            size: layout.size(),
            align: layout.align(),
        })?;

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Number of elements the block can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the buffer holds no storage.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Start of the block (dangling when empty).
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable start of the block (dangling when empty).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `offset`.
    ///
    /// Computing the pointer is always safe. Reading through it requires
    /// `offset < capacity` and an initialized slot.
    #[inline]
    pub fn slot(&self, offset: usize) -> *const T {
        debug_assert!(offset <= self.capacity);
        self.ptr.as_ptr().wrapping_add(offset)
    }

    /// Mutable pointer to slot `offset`.
    ///
    /// Writing through it requires `offset < capacity`.
    #[inline]
    pub fn slot_mut(&mut self, offset: usize) -> *mut T {
        debug_assert!(offset <= self.capacity);
        self.ptr.as_ptr().wrapping_add(offset)
    }

    /// Exchanges the blocks owned by `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Moves the block out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Returns the block to the allocator and resets to the empty state.
    ///
    /// Values still constructed in the block are leaked, not dropped.
    /// Calling this on an empty buffer is a no-op.
    pub fn release(&mut self) {
        let capacity = mem::replace(&mut self.capacity, 0);
        let ptr = mem::replace(&mut self.ptr, NonNull::dangling());

        if capacity == 0 || mem::size_of::<T>() == 0 {
            return;
        }

        // SAFETY: `Layout::array::<T>(capacity)` succeeded in `create`, so the
        // size cannot overflow and the alignment is a power of two.
        let layout = unsafe {
            Layout::from_size_align_unchecked(mem::size_of::<T>() * capacity, mem::align_of::<T>())
        };

        // SAFETY: ptr was returned by `alloc` with this exact layout and
        // ownership was exclusive, so it has not been freed yet.
        unsafe { dealloc(ptr.as_ptr().cast::<u8>(), layout) };
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Safety: RawBuffer owns its block exclusively; sending or sharing it is
// sound whenever the `T` values it may hold could be sent or shared.
unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> core::fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawBuffer")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
