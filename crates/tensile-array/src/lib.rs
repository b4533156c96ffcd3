// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with strong failure-safety guarantees.
//!
//! `DynamicArray<T>` owns a [`RawBuffer<T>`](tensile_buffer::RawBuffer) and
//! is the only authority over which of its slots hold live values. All
//! capacity changes go through fallible acquisition, so running out of memory
//! is an error value rather than an abort.
//!
//! # Core Guarantees
//!
//! - **Strong guarantee**: `reserve`, `push_back`, `emplace_back`, `insert`,
//!   `emplace`, `resize` and `extend_from_slice` either succeed or leave the
//!   elements exactly as they were, whether the failure is an allocation
//!   error, an `Err` from a constructor closure, or a panic.
//! - **Build aside, then commit**: growth constructs into fresh storage and
//!   swaps it in only after every fallible step is done.
//! - **Exactly-once drops**: no failure path leaks or double-drops an element.
//! - **Doubling growth**: a full array grows to `max(1, 2 * capacity)`.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use tensile_array::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::new();
//!
//!     for i in 1..=3 {
//!         array.push_back(i)?;
//!     }
//!     assert_eq!(array, [1, 2, 3]);
//!     assert!(array.capacity() >= 3);
//!
//!     let index = array.insert(1, 99)?;
//!     assert_eq!(array[index], 99);
//!     assert_eq!(array, [1, 99, 2, 3]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Fallible Construction
//!
//! ```rust
//! use tensile_array::{DynamicArray, DynamicArrayError};
//!
//! fn parse_all(inputs: &[&str]) -> Result<DynamicArray<u16>, DynamicArrayError> {
//!     let mut array = DynamicArray::with_capacity(inputs.len())?;
//!
//!     for input in inputs {
//!         array.try_emplace_back(|| input.parse::<u16>())?;
//!     }
//!     Ok(array)
//! }
//!
//! assert_eq!(parse_all(&["1", "2"]).unwrap(), [1, 2]);
//!
//! let err = parse_all(&["1", "x"]).unwrap_err();
//! assert!(err.is_element_operation());
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! tensile-array = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`DynamicArrayBehaviour`] to test error scenarios:
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use tensile_array::{DynamicArray, DynamicArrayBehaviour};
//!
//!     #[test]
//!     fn test_handles_reserve_failure() {
//!         let mut array = DynamicArray::<u8>::new();
//!         array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
//!
//!         assert!(array.reserve(16).is_err());
//!         assert_eq!(array.capacity(), 0);
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod dynamic_array;
mod error;
mod into_iter;
mod staging;

#[cfg(test)]
mod tests;

pub use dynamic_array::DynamicArray;
pub use error::DynamicArrayError;
pub use into_iter::IntoIter;
pub use tensile_buffer::RawBufferError;

#[cfg(any(test, feature = "test_utils"))]
pub use dynamic_array::DynamicArrayBehaviour;
