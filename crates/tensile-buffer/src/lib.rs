// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Uninitialized, exclusively-owned storage blocks sized in elements.
//!
//! [`RawBuffer<T>`] owns a block of correctly-aligned memory large enough for
//! `capacity` values of `T`, without ever constructing or dropping a `T`
//! itself. It is the leaf layer underneath `tensile-array`'s `DynamicArray`:
//! the array decides which slots are live, the buffer only acquires and
//! releases the memory.
//!
//! # Guarantees
//!
//! - **Exclusive ownership**: a block belongs to exactly one `RawBuffer`.
//!   Moving or [`take`](RawBuffer::take)-ing transfers it; there is no `Clone`.
//! - **No allocation for empty requests**: `create(0)` and zero-sized `T`
//!   never call the allocator, so they cannot fail.
//! - **Fallible acquisition**: allocator refusals and layout overflows are
//!   reported as [`RawBufferError`] instead of aborting.
//! - **Release on drop**: the block is returned to the allocator when the
//!   buffer is dropped. Elements still living in the block are *not* dropped.
//!
//! # Example
//!
//! ```rust
//! use tensile_buffer::{RawBuffer, RawBufferError};
//!
//! fn example() -> Result<(), RawBufferError> {
//!     let mut buffer = RawBuffer::<u32>::create(4)?;
//!     assert_eq!(buffer.capacity(), 4);
//!
//!     // SAFETY: slot 0 is inside the block; u32 needs no drop.
//!     unsafe {
//!         buffer.slot_mut(0).write(42);
//!         assert_eq!(buffer.slot(0).read(), 42);
//!     }
//!
//!     let moved = buffer.take();
//!     assert_eq!(buffer.capacity(), 0);
//!     assert_eq!(moved.capacity(), 4);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod raw_buffer;

pub use error::RawBufferError;
pub use raw_buffer::RawBuffer;
