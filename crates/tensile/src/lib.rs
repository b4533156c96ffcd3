// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Growable arrays that fail cleanly.</em></p>
//!
//! ---
//!
//! Tensile is a contiguous growable array for Rust whose every mutation
//! either completes or leaves the array exactly as it was. Allocation
//! failures are returned as values, element constructors may fail or panic,
//! and no path leaks or double-drops an element.
//!
//! # Features
//!
//! - **Strong guarantee**: `reserve`, `push_back`, `insert`, `resize` and
//!   friends are all-or-nothing
//! - **Fallible everything**: allocation failures surface as
//!   [`DynamicArrayError`] instead of aborting
//! - **Fallible constructors**: `try_emplace_back`, `try_emplace` and
//!   `try_resize_with` accept constructors returning `Result`
//! - **`no_std` compatible**: only `alloc` is required
//!
//! # Quick Start
//!
//! ```rust
//! use tensile::{DynamicArray, DynamicArrayError};
//!
//! fn main() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::new();
//!     array.push_back(1)?;
//!     array.push_back(2)?;
//!     array.push_back(3)?;
//!
//!     array.insert(1, 99)?;
//!     assert_eq!(array, [1, 99, 2, 3]);
//!
//!     array.erase(0);
//!     assert_eq!(array, [99, 2, 3]);
//!
//!     array.pop_back();
//!     array.pop_back();
//!     assert_eq!(array, [99]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Layers
//!
//! | Crate | Provides |
//! |-------|----------|
//! | [`buffer`] | [`RawBuffer<T>`](buffer::RawBuffer): an owned block of uninitialized slots |
//! | [`array`] | [`DynamicArray<T>`]: live-element tracking, growth and failure safety |
//!
//! `RawBuffer` never constructs or drops elements; `DynamicArray` is the
//! only authority over which slots hold live values.
//!
//! # Growth
//!
//! A full array grows to `max(1, 2 * capacity)`. `reserve(n)` and
//! `resize(n)` allocate exactly `n`. Erasing and shrinking never reallocate.
//!
//! ```rust
//! use tensile::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! for i in 0..5u8 {
//!     array.push_back(i).unwrap();
//! }
//! assert_eq!(array.capacity(), 8);
//!
//! let defaults = DynamicArray::<u8>::with_len(5).unwrap();
//! assert_eq!(defaults.capacity(), 5);
//! ```
//!
//! # Testing
//!
//! Enable the `test-utils` feature to inject allocation failures into your
//! own tests:
//!
//! ```rust,ignore
//! use tensile::support::test_utils::array::DynamicArrayBehaviour;
//!
//! let mut array = tensile::DynamicArray::<u8>::new();
//! array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
//!
//! assert!(array.push_back(1).is_err());
//! assert!(array.is_empty());
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub mod support;

pub use tensile_array as array;
pub use tensile_buffer as buffer;

pub use tensile_array::{DynamicArray, DynamicArrayError, IntoIter};
pub use tensile_buffer::{RawBuffer, RawBufferError};
