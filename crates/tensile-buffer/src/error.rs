// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for tensile-buffer.
use thiserror::Error;

/// Errors that can occur when acquiring a [`RawBuffer`](crate::RawBuffer).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum RawBufferError {
    /// The requested capacity does not fit in a valid allocation layout
    /// (total size would exceed `isize::MAX` bytes).
    #[error("capacity overflow: {capacity} elements do not fit in a single allocation")]
    CapacityOverflow {
        /// The element count that was requested.
        capacity: usize,
    },

    /// The global allocator could not satisfy the request.
    #[error("allocation of {size} bytes (align {align}) failed")]
    AllocationFailure {
        /// Size of the refused request, in bytes.
        size: usize,
        /// Alignment of the refused request, in bytes.
        align: usize,
    },
}
