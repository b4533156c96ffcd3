// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tensile_test_utils::{Tracked, ledger};

use crate::{RawBuffer, RawBufferError};

// =============================================================================
// new() / default()
// =============================================================================

#[test]
fn test_new_is_empty() {
    let buffer: RawBuffer<u64> = RawBuffer::new();

    assert_eq!(buffer.capacity(), 0);
    assert!(buffer.is_empty());
    assert_eq!(buffer.as_ptr(), core::ptr::NonNull::<u64>::dangling().as_ptr().cast_const());
}

#[test]
fn test_default_matches_new() {
    let buffer: RawBuffer<u8> = RawBuffer::default();

    assert_eq!(buffer.capacity(), 0);
    assert!(buffer.is_empty());
}

// =============================================================================
// create()
// =============================================================================

#[test]
fn test_create_zero_does_not_allocate() {
    let buffer = RawBuffer::<u32>::create(0).expect("Failed to create(0)");

    assert!(buffer.is_empty());
    assert_eq!(buffer.as_ptr(), core::ptr::NonNull::<u32>::dangling().as_ptr().cast_const());
}

#[test]
fn test_create_allocates_aligned_block() {
    #[repr(align(64))]
    struct Wide([u8; 64]);

    let buffer = RawBuffer::<Wide>::create(3).expect("Failed to create(3)");

    assert_eq!(buffer.capacity(), 3);
    assert!(!buffer.is_empty());
    assert_eq!(buffer.as_ptr() as usize % 64, 0);
}

#[test]
fn test_create_zero_sized_type() {
    let buffer = RawBuffer::<()>::create(1_000).expect("Failed to create(1_000)");

    assert_eq!(buffer.capacity(), 1_000);
    assert_eq!(buffer.as_ptr(), core::ptr::NonNull::<()>::dangling().as_ptr().cast_const());
}

#[test]
fn test_create_capacity_overflow() {
    let result = RawBuffer::<u64>::create(usize::MAX);

    assert!(matches!(
        result,
        Err(RawBufferError::CapacityOverflow {
            capacity: usize::MAX
        })
    ));
}

#[test]
fn test_create_capacity_overflow_just_above_isize_max() {
    let capacity = (isize::MAX as usize) / 2 + 1;
    let result = RawBuffer::<u16>::create(capacity);

    assert_eq!(result.err(), Some(RawBufferError::CapacityOverflow { capacity }));
}

// =============================================================================
// slot() / slot_mut()
// =============================================================================

#[test]
fn test_slots_are_contiguous() {
    let mut buffer = RawBuffer::<u32>::create(4).expect("Failed to create(4)");

    for i in 0..4 {
        assert_eq!(buffer.slot(i), buffer.as_ptr().wrapping_add(i));
    }

    unsafe {
        // SAFETY: every slot below capacity is written before being read.
        for i in 0..4 {
            buffer.slot_mut(i).write(i as u32 * 10);
        }
        for i in 0..4 {
            assert_eq!(buffer.slot(i).read(), i as u32 * 10);
        }
    }
}

#[test]
fn test_slot_one_past_the_end() {
    let buffer = RawBuffer::<u8>::create(8).expect("Failed to create(8)");

    assert_eq!(buffer.slot(8) as usize - buffer.as_ptr() as usize, 8);
}

// =============================================================================
// swap() / take()
// =============================================================================

#[test]
fn test_swap_exchanges_blocks() {
    let mut a = RawBuffer::<u64>::create(2).expect("Failed to create(2)");
    let mut b = RawBuffer::<u64>::create(5).expect("Failed to create(5)");

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    a.swap(&mut b);

    assert_eq!(a.capacity(), 5);
    assert_eq!(b.capacity(), 2);
    assert_eq!(a.as_ptr(), b_ptr);
    assert_eq!(b.as_ptr(), a_ptr);
}

#[test]
fn test_swap_with_empty() {
    let mut a = RawBuffer::<u64>::create(2).expect("Failed to create(2)");
    let mut b = RawBuffer::<u64>::new();

    a.swap(&mut b);

    assert!(a.is_empty());
    assert_eq!(b.capacity(), 2);
}

#[test]
fn test_take_leaves_source_empty() {
    let mut source = RawBuffer::<u16>::create(7).expect("Failed to create(7)");
    let ptr = source.as_ptr();

    let taken = source.take();

    assert!(source.is_empty());
    assert_eq!(taken.capacity(), 7);
    assert_eq!(taken.as_ptr(), ptr);
}

// =============================================================================
// release()
// =============================================================================

#[test]
fn test_release_is_idempotent() {
    let mut buffer = RawBuffer::<u32>::create(16).expect("Failed to create(16)");

    buffer.release();
    assert!(buffer.is_empty());

    buffer.release();
    assert!(buffer.is_empty());
}

#[test]
fn test_release_does_not_drop_elements() {
    ledger::reset();

    let mut buffer = RawBuffer::<Tracked>::create(2).expect("Failed to create(2)");

    unsafe {
        // SAFETY: slot 0 is inside the block.
        buffer.slot_mut(0).write(Tracked::new(1));
    }

    // Move the value back out before the block goes away.
    let value = unsafe { buffer.slot(0).read() };
    drop(buffer);

    assert_eq!(ledger::snapshot().dropped, 0);
    assert_eq!(value.value(), 1);

    drop(value);
    assert_eq!(ledger::live(), 0);
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_reports_capacity_only() {
    let buffer = RawBuffer::<u8>::create(3).expect("Failed to create(3)");
    let rendered = format!("{:?}", buffer);

    assert_eq!(rendered, "RawBuffer { capacity: 3, .. }");
}

// =============================================================================
// RawBufferError
// =============================================================================

#[test]
fn test_error_messages() {
    let overflow = RawBufferError::CapacityOverflow { capacity: 9 };
    let failure = RawBufferError::AllocationFailure { size: 32, align: 8 };

    assert_eq!(
        overflow.to_string(),
        "capacity overflow: 9 elements do not fit in a single allocation"
    );
    assert_eq!(failure.to_string(), "allocation of 32 bytes (align 8) failed");
}
