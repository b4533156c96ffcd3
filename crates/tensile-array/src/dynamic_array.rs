// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::convert::Infallible;
use core::fmt::Debug;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::{ptr, slice};

use tensile_buffer::{RawBuffer, RawBufferError};

use crate::error::DynamicArrayError;
use crate::into_iter::IntoIter;
use crate::staging::Staging;

/// Test behaviour for injecting failures in `DynamicArray` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to exercise the allocation-failure paths of their own code.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use tensile_array::{DynamicArray, DynamicArrayBehaviour, DynamicArrayError};
///
///     #[test]
///     fn test_handles_allocation_failure() -> Result<(), DynamicArrayError> {
///         let mut array = DynamicArray::with_capacity(1)?;
///         array.push_back(1u8)?;
///
///         // Inject failure
///         array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
///
///         // Growing now fails and leaves the array untouched
///         assert!(array.push_back(2u8).is_err());
///         assert_eq!(array, [1]);
///
///         // Reset to normal behaviour
///         array.change_behaviour(DynamicArrayBehaviour::None);
///         array.push_back(2u8)?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour - no injected failures.
    None,
    /// Every storage acquisition with non-zero capacity fails with
    /// `RawBufferError::AllocationFailure`.
    FailAtAllocation,
}

#[cfg(any(test, feature = "test_utils"))]
impl Default for DynamicArrayBehaviour {
    fn default() -> Self {
        Self::None
    }
}

/// Moves `count` live elements from `src` to `dst`.
///
/// A Rust move is a bitwise copy and cannot fail, so this is the relocation
/// path for every `T`. Afterwards the `src` slots are logically uninitialized.
///
/// # Safety
///
/// `src` must hold `count` live elements, `dst` must have room for `count`
/// elements, and the two regions must not overlap.
#[inline]
unsafe fn relocate<T>(src: *const T, dst: *mut T, count: usize) {
    // SAFETY: guaranteed by the caller.
    unsafe { ptr::copy_nonoverlapping(src, dst, count) };
}

/// A contiguous growable array built on [`RawBuffer`].
///
/// Slots `[0, len)` of the buffer hold live values, slots `[len, capacity)`
/// are uninitialized. Every mutation that can fail either completes or leaves
/// the array exactly as it was: replacement storage is built on the side and
/// only swapped in once nothing else can fail.
///
/// # Example
///
/// ```rust
/// use tensile_array::{DynamicArray, DynamicArrayError};
///
/// fn example() -> Result<(), DynamicArrayError> {
///     let mut array = DynamicArray::new();
///     array.push_back(1)?;
///     array.push_back(2)?;
///     array.push_back(3)?;
///
///     array.insert(1, 99)?;
///     assert_eq!(array, [1, 99, 2, 3]);
///
///     array.erase(0);
///     assert_eq!(array, [99, 2, 3]);
///
///     array.pop_back();
///     array.pop_back();
///     assert_eq!(array, [99]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DynamicArray<T> {
    storage: RawBuffer<T>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DynamicArrayBehaviour,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array. Does not allocate.
    pub const fn new() -> Self {
        Self::from_parts(RawBuffer::new(), 0)
    }

    const fn from_parts(storage: RawBuffer<T>, len: usize) -> Self {
        Self {
            storage,
            len,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::None,
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::Allocation`] if the storage cannot be acquired.
    pub fn with_capacity(capacity: usize) -> Result<Self, DynamicArrayError> {
        let mut array = Self::new();
        array.reserve(capacity)?;

        Ok(array)
    }

    /// Creates an array of `len` default-valued elements with capacity `len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tensile_array::DynamicArray;
    ///
    /// let array = DynamicArray::<u32>::with_len(5).unwrap();
    /// assert_eq!(array.len(), 5);
    /// assert_eq!(array.capacity(), 5);
    /// assert!(array.iter().all(|v| *v == 0));
    /// ```
    pub fn with_len(len: usize) -> Result<Self, DynamicArrayError>
    where
        T: Default,
    {
        let mut array = Self::with_capacity(len)?;
        array.resize(len)?;

        Ok(array)
    }

    /// Creates an array holding clones of `src`, with capacity `src.len()`.
    pub fn from_slice(src: &[T]) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
    {
        let array = Self::new();
        array.clone_slice(src)
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the array can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized and the pointer is non-null
        // and aligned even when the buffer is empty.
        unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.storage.as_mut_ptr(), self.len) }
    }

    /// Raw pointer to the first slot (dangling when the capacity is zero).
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Mutable raw pointer to the first slot (dangling when the capacity is zero).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    fn acquire(&self, capacity: usize) -> Result<RawBuffer<T>, DynamicArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if capacity > 0 && matches!(self.behaviour, DynamicArrayBehaviour::FailAtAllocation) {
            return Err(RawBufferError::AllocationFailure {
                size: capacity.saturating_mul(mem::size_of::<T>()),
                align: mem::align_of::<T>(),
            }
            .into());
        }

        Ok(RawBuffer::create(capacity)?)
    }

    /// Capacity after one growth step: `max(1, 2 * capacity)`.
    fn grown_capacity(&self) -> Result<usize, DynamicArrayError> {
        match self.capacity() {
            0 => Ok(1),
            capacity => capacity.checked_mul(2).ok_or(
                RawBufferError::CapacityOverflow {
                    capacity: usize::MAX,
                }
                .into(),
            ),
        }
    }

    /// Builds a new array (with this array's behaviour governing allocation)
    /// holding clones of `items`, with capacity `items.len()`.
    fn clone_slice(&self, items: &[T]) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
    {
        let mut storage = self.acquire(items.len())?;

        let mut staging = Staging::new(&mut storage, 0);
        for item in items {
            // SAFETY: storage has room for items.len() elements.
            unsafe { staging.write(item.clone()) };
        }
        let len = staging.commit();

        Ok(Self::from_parts(storage, len))
    }

    /// Ensures the capacity is at least `new_capacity`.
    ///
    /// Does nothing if `new_capacity <= capacity()`. Otherwise storage of
    /// exactly `new_capacity` elements is acquired, every element is moved
    /// into it and the old block is released.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::Allocation`] if the storage cannot be
    /// acquired. The array is left unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tensile_array::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::<u8>::new();
    ///     array.reserve(10)?;
    ///     assert_eq!(array.capacity(), 10);
    ///
    ///     // Smaller requests are ignored
    ///     array.reserve(4)?;
    ///     assert_eq!(array.capacity(), 10);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), DynamicArrayError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        let mut new_storage = self.acquire(new_capacity)?;

        // SAFETY: [0, len) is live in the old block, the new block has room
        // for new_capacity > len elements, and the blocks are distinct.
        unsafe { relocate(self.storage.as_ptr(), new_storage.as_mut_ptr(), self.len) };

        // The old block only holds moved-from slots now; dropping it releases
        // the memory without touching them.
        self.storage.swap(&mut new_storage);

        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// See [`try_resize_with`](Self::try_resize_with) for the failure contract.
    pub fn resize(&mut self, new_len: usize) -> Result<(), DynamicArrayError>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resizes to `new_len`, filling new slots with values returned by `f`.
    ///
    /// See [`try_resize_with`](Self::try_resize_with) for the failure contract.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), DynamicArrayError>
    where
        F: FnMut() -> T,
    {
        self.try_resize_with(new_len, || Ok::<T, Infallible>(f()))
    }

    /// Resizes to `new_len`, filling new slots with values produced by the
    /// fallible constructor `f`.
    ///
    /// Shrinking drops the trailing elements and never fails. Growing first
    /// reserves exactly `new_len`, then constructs the new elements.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::Allocation`] if the storage cannot be acquired.
    /// - [`DynamicArrayError::ElementOperation`] if `f` returns an error.
    ///
    /// On error (or if `f` panics) the elements constructed so far are
    /// dropped and `len()` is unchanged. Capacity may have grown.
    pub fn try_resize_with<E, F>(&mut self, new_len: usize, mut f: F) -> Result<(), DynamicArrayError>
    where
        E: Debug + Send + Sync + 'static,
        F: FnMut() -> Result<T, E>,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        self.reserve(new_len)?;

        let additional = new_len - self.len;
        let mut staging = Staging::new(&mut self.storage, self.len);

        while staging.written() < additional {
            let value = f().map_err(DynamicArrayError::element_failure)?;

            // SAFETY: reserve made room for new_len elements.
            unsafe { staging.write(value) };
        }

        self.len += staging.commit();

        Ok(())
    }

    /// Drops the elements at and after `len`. No-op if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let tail = ptr::slice_from_raw_parts_mut(self.storage.slot_mut(len), self.len - len);

        // Shorten first: a panicking destructor must not lead to a second drop.
        self.len = len;

        // SAFETY: the tail slots were live and are no longer reachable.
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends `value`.
    ///
    /// When full, the capacity grows to `max(1, 2 * capacity())`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::Allocation`] if growth fails; the array
    /// is left unchanged and `value` is dropped.
    pub fn push_back(&mut self, value: T) -> Result<(), DynamicArrayError> {
        self.emplace_back(move || value)?;

        Ok(())
    }

    /// Appends the value returned by `f` and returns a reference to it.
    ///
    /// The reference stays valid until the next capacity-changing operation.
    pub fn emplace_back<F>(&mut self, f: F) -> Result<&mut T, DynamicArrayError>
    where
        F: FnOnce() -> T,
    {
        self.try_emplace_back(|| Ok::<T, Infallible>(f()))
    }

    /// Appends the value produced by the fallible constructor `f` and returns
    /// a reference to it.
    ///
    /// When growth is needed, the new element is constructed directly in its
    /// final slot of the new storage before the existing elements are moved
    /// across, so a failure of `f` never touches the current storage.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::Allocation`] if growth fails.
    /// - [`DynamicArrayError::ElementOperation`] if `f` returns an error.
    ///
    /// The array is unchanged on every error path, and when `f` panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tensile_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::<String>::new();
    ///
    /// let result = array.try_emplace_back(|| Err::<String, _>("refused"));
    /// assert!(result.is_err());
    /// assert!(array.is_empty());
    ///
    /// let value = array.try_emplace_back(|| Ok::<_, &str>(String::from("ok"))).unwrap();
    /// value.push('!');
    /// assert_eq!(array[0], "ok!");
    /// ```
    pub fn try_emplace_back<E, F>(&mut self, f: F) -> Result<&mut T, DynamicArrayError>
    where
        E: Debug + Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        let index = self.len;

        if self.len == self.capacity() {
            let mut new_storage = self.acquire(self.grown_capacity()?)?;
            let value = f().map_err(DynamicArrayError::element_failure)?;

            // SAFETY: the new block has room for len + 1 elements and is
            // distinct from the old one.
            unsafe {
                ptr::write(new_storage.slot_mut(index), value);
                relocate(self.storage.as_ptr(), new_storage.as_mut_ptr(), self.len);
            }

            self.storage.swap(&mut new_storage);
        } else {
            let value = f().map_err(DynamicArrayError::element_failure)?;

            // SAFETY: len < capacity, so slot `len` is inside the block and
            // uninitialized.
            unsafe { ptr::write(self.storage.slot_mut(index), value) };
        }

        self.len += 1;

        // SAFETY: slot `index` was just initialized.
        Ok(unsafe { &mut *self.storage.slot_mut(index) })
    }

    /// Drops the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) {
        assert!(self.len > 0, "pop_back on an empty DynamicArray");

        self.len -= 1;

        // SAFETY: slot `len` was the last live element and is no longer reachable.
        unsafe { ptr::drop_in_place(self.storage.slot_mut(self.len)) };
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;

        // SAFETY: slot `len` was live; ownership moves to the caller.
        Some(unsafe { ptr::read(self.storage.slot(self.len)) })
    }

    /// Inserts `value` at `index`, shifting the following elements right.
    ///
    /// Returns the index of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, DynamicArrayError> {
        self.emplace(index, move || value)
    }

    /// Inserts the value returned by `f` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn emplace<F>(&mut self, index: usize, f: F) -> Result<usize, DynamicArrayError>
    where
        F: FnOnce() -> T,
    {
        self.try_emplace(index, || Ok::<T, Infallible>(f()))
    }

    /// Inserts the value produced by the fallible constructor `f` at `index`.
    ///
    /// Without reallocation the value is constructed first, then the tail
    /// `[index, len)` is shifted one slot right and the value written into
    /// the gap. With reallocation the value is constructed at its final
    /// offset in the new storage and the prefix and suffix are moved around
    /// it.
    ///
    /// Returns the index of the inserted element.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::Allocation`] if growth fails.
    /// - [`DynamicArrayError::ElementOperation`] if `f` returns an error.
    ///
    /// The array is unchanged on every error path, and when `f` panics.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn try_emplace<E, F>(&mut self, index: usize, f: F) -> Result<usize, DynamicArrayError>
    where
        E: Debug + Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );

        if self.len == self.capacity() {
            let mut new_storage = self.acquire(self.grown_capacity()?)?;
            let value = f().map_err(DynamicArrayError::element_failure)?;

            // SAFETY: the new block has room for len + 1 elements and is
            // distinct from the old one; [0, len) is live in the old block.
            unsafe {
                let src = self.storage.as_ptr();
                let dst = new_storage.as_mut_ptr();

                ptr::write(dst.add(index), value);
                relocate(src, dst, index);
                relocate(src.add(index), dst.add(index + 1), self.len - index);
            }

            self.storage.swap(&mut new_storage);
        } else {
            let value = f().map_err(DynamicArrayError::element_failure)?;

            // SAFETY: len < capacity, so [index, len] is inside the block;
            // after the shift slot `index` holds a moved-from copy that is
            // overwritten without being dropped.
            unsafe {
                let slot = self.storage.slot_mut(index);

                ptr::copy(slot, slot.add(1), self.len - index);
                ptr::write(slot, value);
            }
        }

        self.len += 1;

        Ok(index)
    }

    /// Drops the element at `index`, shifting the following elements left.
    ///
    /// Returns `index`, which now holds the element that followed the erased
    /// one (or equals `len()` if the last element was erased). Never
    /// reallocates.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        // The array is consistent again before the element's destructor runs.
        drop(self.remove(index));

        index
    }

    /// Removes the element at `index` and returns it, shifting the following
    /// elements left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {index}) should be < len (is {})",
            self.len
        );

        // SAFETY: index < len; the removed value is read out before its slot
        // is overwritten by the shift, and len shrinks to cover the vacated
        // last slot.
        unsafe {
            let slot = self.storage.slot_mut(index);
            let removed = ptr::read(slot);

            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;

            removed
        }
    }

    /// Appends clones of every element of `src`.
    ///
    /// Either every clone is appended or none is: if a clone panics the
    /// clones made so far are dropped and `len()` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::Allocation`] if growth fails; the array
    /// is left unchanged.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), DynamicArrayError>
    where
        T: Clone,
    {
        let needed = self
            .len
            .checked_add(src.len())
            .ok_or(RawBufferError::CapacityOverflow {
                capacity: usize::MAX,
            })?;

        if needed > self.capacity() {
            self.reserve(needed.max(self.capacity().saturating_mul(2)))?;
        }

        let mut staging = Staging::new(&mut self.storage, self.len);
        for item in src {
            // SAFETY: capacity >= len + src.len().
            unsafe { staging.write(item.clone()) };
        }

        self.len += staging.commit();

        Ok(())
    }

    /// Returns a deep copy with capacity `len()`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::Allocation`] if the storage cannot be acquired.
    /// A panicking `T::clone` drops the clones made so far and propagates.
    pub fn try_clone(&self) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
    {
        self.clone_slice(self.as_slice())
    }

    /// Replaces the contents with clones of `source`.
    ///
    /// When `source` is longer than the current capacity, a complete copy is
    /// built first and swapped in (copy-and-swap): any failure leaves `self`
    /// untouched. Otherwise the existing storage is reused: the common prefix
    /// is assigned element-wise with `clone_from`, then the surplus is
    /// dropped or the missing tail appended.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::Allocation`] if the copy-and-swap storage
    /// cannot be acquired; `self` is left unchanged.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), DynamicArrayError>
    where
        T: Clone,
    {
        if source.len > self.capacity() {
            let mut copy = self.clone_slice(source.as_slice())?;

            mem::swap(&mut self.storage, &mut copy.storage);
            mem::swap(&mut self.len, &mut copy.len);

            return Ok(());
        }

        let common = self.len.min(source.len);
        self.as_mut_slice()[..common].clone_from_slice(&source.as_slice()[..common]);

        if self.len > source.len {
            self.truncate(source.len);
        } else {
            let mut staging = Staging::new(&mut self.storage, common);
            for item in &source.as_slice()[common..] {
                // SAFETY: source.len <= capacity.
                unsafe { staging.write(item.clone()) };
            }

            self.len += staging.commit();
        }

        Ok(())
    }

    /// Exchanges contents with `other` in O(1). Never fails.
    ///
    /// Test behaviours stay with their arrays.
    pub fn swap_with(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Changes the test behaviour for this array.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// failures for testing error handling paths.
    ///
    /// # Example
    ///
    /// ```rust
    /// // test_utils feature required in dev-dependencies
    /// #[cfg(test)]
    /// mod tests {
    ///     use tensile_array::{DynamicArray, DynamicArrayBehaviour};
    ///
    ///     #[test]
    ///     fn test_error_handling() {
    ///         let mut array = DynamicArray::new();
    ///         array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
    ///
    ///         // First push needs storage, so it fails
    ///         assert!(array.push_back(1u8).is_err());
    ///     }
    /// }
    /// ```
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // Elements first; the RawBuffer field releases the block afterwards.
        self.clear();
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// # Panics
    ///
    /// Panics if the storage cannot be acquired; use
    /// [`try_clone`](DynamicArray::try_clone) to handle that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(e) => panic!("DynamicArray::clone: {e}"),
        }
    }

    /// # Panics
    ///
    /// Panics if the storage cannot be acquired; use
    /// [`try_clone_from`](DynamicArray::try_clone_from) to handle that case.
    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.try_clone_from(source) {
            panic!("DynamicArray::clone_from: {e}");
        }
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for DynamicArray<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut this = ManuallyDrop::new(self);
        let len = mem::replace(&mut this.len, 0);
        let storage = this.storage.take();

        IntoIter::new(storage, len)
    }
}
