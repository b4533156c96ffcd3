// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for tensile-array.
use alloc::boxed::Box;
use thiserror::Error;

use tensile_buffer::RawBufferError;

/// Errors that can occur when mutating a [`DynamicArray`](crate::DynamicArray).
///
/// Whatever the variant, the array is left as it was before the failing call
/// (see each operation for the exact guarantee).
#[derive(Debug, Error)]
pub enum DynamicArrayError {
    /// Storage for the new capacity could not be acquired.
    #[error("allocation failure: {0}")]
    Allocation(#[from] RawBufferError),

    /// A fallible element constructor returned an error.
    #[error("element operation failed: {0:?}")]
    ElementOperation(Box<dyn core::fmt::Debug + Send + Sync + 'static>),
}

impl DynamicArrayError {
    /// Creates an ElementOperation error from any Debug + Send + Sync error.
    pub fn element_failure<E: core::fmt::Debug + Send + Sync + 'static>(e: E) -> Self {
        Self::ElementOperation(Box::new(e))
    }

    /// Returns `true` for [`DynamicArrayError::Allocation`].
    pub fn is_allocation(&self) -> bool {
        matches!(self, Self::Allocation(_))
    }

    /// Returns `true` for [`DynamicArrayError::ElementOperation`].
    pub fn is_element_operation(&self) -> bool {
        matches!(self, Self::ElementOperation(_))
    }
}
