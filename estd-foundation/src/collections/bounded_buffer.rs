// ESTD - estd-foundation
// Module: BoundedBuffer - Fixed-capacity contiguous storage
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001, REQ_TEMPORAL_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity contiguous buffer that never reallocates.
//!
//! `BoundedBuffer<T>` is the storage every dynamic estd container is built
//! on. It owns exactly one allocation of `capacity` slots made at
//! construction and tracks how many of them are populated. Insertion and
//! removal are expressed as element shifts inside that allocation.
//!
//! # Characteristics
//!
//! - **Single allocation**: Capacity is fixed at construction
//! - **Fallible allocation**: Allocation failure is an `Err`, not an abort
//! - **Checked shifts**: A rejected shift leaves the buffer untouched
//! - **Index positions**: Positions are indices into the populated extent

use alloc::{boxed::Box, vec::Vec};
use core::{
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Bound, Index, IndexMut, RangeBounds},
    slice,
};

use estd_error::{Error, Result};

use crate::limits;

/// A contiguous buffer with a capacity fixed at construction.
///
/// # Invariants
///
/// 1. `len <= slots.len()` always holds
/// 2. `slots.len()` (the capacity) never changes after construction
/// 3. Only `slots[..len]` is observable; slots past `len` hold default or
///    stale values and are dropped with the allocation
///
/// # Examples
///
/// ```
/// use estd_foundation::BoundedBuffer;
///
/// let mut buffer = BoundedBuffer::from_slice(10, &[0u8, 1, 2, 3, 4])?;
/// buffer.shift_right(2, 3)?;
/// assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4, 2, 3, 4]);
///
/// buffer.shift_left(5, 3)?;
/// assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4]);
/// # Ok::<(), estd_error::Error>(())
/// ```
pub struct BoundedBuffer<T> {
    /// Every allocated slot, populated or not
    slots: Box<[T]>,

    /// Number of populated slots
    /// Invariant: len <= slots.len()
    len: usize,
}

/// Allocate `capacity` default-initialized slots without aborting on failure.
fn allocate_slots<T: Default>(capacity: usize) -> Result<Box<[T]>> {
    limits::check_capacity(capacity)?;

    enter_span!(crate::tracing::BufferTrace::allocating(
        capacity,
        mem::size_of::<T>()
    ));

    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| Error::allocation_failed("Failed to allocate bounded buffer"))?;
    slots.resize_with(capacity, T::default);

    trace_trace!(capacity, "bounded buffer allocated");
    Ok(slots.into_boxed_slice())
}

impl<T: Clone + Default> BoundedBuffer<T> {
    /// Creates an empty buffer with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns an invalid-capacity error when `capacity` exceeds the
    /// platform limit, or an allocation error when the allocator fails.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            slots: allocate_slots(capacity)?,
            len: 0,
        })
    }

    /// Creates a buffer with `capacity` slots populated from `values`.
    ///
    /// # Errors
    ///
    /// Returns a capacity error when `values` does not fit, plus the errors
    /// of [`BoundedBuffer::new`].
    pub fn from_slice(capacity: usize, values: &[T]) -> Result<Self> {
        if values.len() > capacity {
            return Err(Error::capacity_exceeded(
                "Initial values exceed buffer capacity",
            ));
        }
        let mut buffer = Self::new(capacity)?;
        buffer.slots[..values.len()].clone_from_slice(values);
        buffer.len = values.len();
        Ok(buffer)
    }

    /// Deep copy into a new allocation of the same capacity.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when the allocator fails.
    pub fn try_clone(&self) -> Result<Self> {
        Self::from_slice(self.capacity(), self.as_slice())
    }

    /// Moves the contents out, leaving `self` empty with its capacity intact.
    ///
    /// The returned buffer owns the original allocation. `self` receives a
    /// fresh allocation of the same capacity so it stays usable.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when the replacement allocation fails;
    /// nothing is moved in that case.
    pub fn take(&mut self) -> Result<Self> {
        let fresh = Self::new(self.capacity())?;
        Ok(mem::replace(self, fresh))
    }

    /// Copy-assigns `other`: afterwards `self` has the capacity, size and
    /// contents of `other`.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when capacities differ and the new
    /// allocation fails; `self` is unchanged in that case.
    pub fn assign(&mut self, other: &Self) -> Result<()> {
        if self.capacity() == other.capacity() {
            self.slots[..other.len].clone_from_slice(other.as_slice());
            self.len = other.len;
        } else {
            *self = other.try_clone()?;
        }
        Ok(())
    }

    /// Move-assigns `other` into `self`.
    ///
    /// `self` drops its previous allocation and adopts `other`'s; `other`
    /// is left empty with its former capacity.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when `other`'s replacement allocation
    /// fails; both buffers are unchanged in that case.
    pub fn move_assign(&mut self, other: &mut Self) -> Result<()> {
        *self = other.take()?;
        Ok(())
    }

    /// Removes the `count` elements ending at `position` (exclusive).
    ///
    /// Elements from `position` onward move down by `count` slots and the
    /// size shrinks by `count`.
    ///
    /// # Errors
    ///
    /// - out of bounds when `position > len`
    /// - insufficient elements when `count > position`
    ///
    /// The buffer is unchanged on error.
    pub fn shift_left(&mut self, position: usize, count: usize) -> Result<()> {
        enter_span!(crate::tracing::BufferTrace::shifting("left", position, count));

        if position > self.len {
            trace_debug!(position, len = self.len, "shift_left rejected: position past end");
            return Err(Error::out_of_bounds("Shift position past end of buffer"));
        }
        if count > position {
            trace_debug!(position, count, "shift_left rejected: too few preceding elements");
            return Err(Error::insufficient_elements(
                "Not enough elements before shift position",
            ));
        }
        if count == 0 {
            return Ok(());
        }

        // Removed elements end up past the new end
        self.slots[position - count..self.len].rotate_left(count);
        self.len -= count;
        Ok(())
    }

    /// Opens a gap of `count` slots at `position`.
    ///
    /// Elements from `position` onward are copied up by `count` slots and
    /// the size grows by `count`. The gap keeps its previous contents, so
    /// callers overwrite it afterwards.
    ///
    /// # Errors
    ///
    /// - out of bounds when `position > len`
    /// - capacity exceeded when fewer than `count` slots are free
    ///
    /// The buffer is unchanged on error.
    pub fn shift_right(&mut self, position: usize, count: usize) -> Result<()> {
        enter_span!(crate::tracing::BufferTrace::shifting("right", position, count));

        if position > self.len {
            trace_debug!(position, len = self.len, "shift_right rejected: position past end");
            return Err(Error::out_of_bounds("Shift position past end of buffer"));
        }
        if count > self.remaining() {
            trace_debug!(count, remaining = self.remaining(), "shift_right rejected: buffer full");
            return Err(Error::capacity_exceeded(
                "Not enough free capacity for shift",
            ));
        }
        if count == 0 {
            return Ok(());
        }

        // Back to front: source and destination ranges may overlap
        for source in (position..self.len).rev() {
            let (head, tail) = self.slots.split_at_mut(source + count);
            tail[0].clone_from(&head[source]);
        }
        self.len += count;
        Ok(())
    }

    /// Erases the element at `position`.
    ///
    /// Returns the position now holding the element that followed, which
    /// equals `len()` when the last element was erased.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when `position >= len`.
    pub fn erase(&mut self, position: usize) -> Result<usize> {
        if position >= self.len {
            return Err(Error::out_of_bounds("Erase position past end of buffer"));
        }
        self.shift_left(position + 1, 1)?;
        Ok(position)
    }

    /// Erases every element in `range`.
    ///
    /// Accepts inclusive and exclusive ranges. Returns the start of the
    /// range, now holding the first element after it. An empty range is a
    /// successful no-op.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when the range is inverted or reaches
    /// past `len`.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize> {
        let (first, end) = self.resolve_range(&range)?;
        self.shift_left(end, end - first)?;
        Ok(first)
    }

    /// Turns `range` into a checked half-open `[first, end)` pair.
    fn resolve_range<R: RangeBounds<usize>>(&self, range: &R) -> Result<(usize, usize)> {
        let overflow = || Error::out_of_bounds("Range bound overflows");
        let first = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.checked_add(1).ok_or_else(overflow)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&last) => last.checked_add(1).ok_or_else(overflow)?,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };
        if first > end || end > self.len {
            return Err(Error::out_of_bounds("Range outside populated extent"));
        }
        Ok((first, end))
    }
}

impl<T> BoundedBuffer<T> {
    /// Returns the number of populated slots.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the fixed number of allocated slots.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of free slots.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.slots.len() - self.len
    }

    /// Returns `true` if no slot is populated.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is populated.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Empties the buffer in O(1). Capacity and allocation are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchanges allocations and sizes with `other` in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns the populated elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    /// Returns the populated elements mutably.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    /// Returns the element at `position`, if populated.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.as_slice().get(position)
    }

    /// Returns the element at `position` mutably, if populated.
    #[inline]
    #[must_use]
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(position)
    }

    /// Iterates over the populated elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates mutably over the populated elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Makes `len` slots observable.
    ///
    /// Crate containers use this after they have written every newly
    /// exposed slot themselves.
    pub(crate) fn set_len(&mut self, len: usize) -> Result<()> {
        if len > self.capacity() {
            return Err(Error::capacity_exceeded("Length exceeds buffer capacity"));
        }
        self.len = len;
        Ok(())
    }

    /// Every allocated slot, including those past `len`.
    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

impl<T: Clone + Default> Clone for BoundedBuffer<T> {
    /// Deep copy through the global allocator's aborting path, like `Vec`.
    /// Use [`BoundedBuffer::try_clone`] to observe allocation failure.
    fn clone(&self) -> Self {
        let mut slots = Vec::with_capacity(self.capacity());
        slots.extend_from_slice(self.as_slice());
        slots.resize_with(self.capacity(), T::default);
        Self {
            slots: slots.into_boxed_slice(),
            len: self.len,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.capacity() == source.capacity() {
            self.slots[..source.len].clone_from_slice(source.as_slice());
            self.len = source.len;
        } else {
            *self = source.clone();
        }
    }
}

// Size mismatch short-circuits; otherwise element-wise in index order
impl<T: PartialEq> PartialEq for BoundedBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for BoundedBuffer<T> {}

impl<T: Hash> Hash for BoundedBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T> Index<usize> for BoundedBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, position: usize) -> &T {
        &self.as_slice()[position]
    }
}

impl<T> IndexMut<usize> for BoundedBuffer<T> {
    #[inline]
    fn index_mut(&mut self, position: usize) -> &mut T {
        &mut self.as_mut_slice()[position]
    }
}

impl<'a, T> IntoIterator for &'a BoundedBuffer<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BoundedBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_shift_right_never_exceeds_capacity() {
        let mut buffer: BoundedBuffer<u8> = BoundedBuffer::new(4).unwrap();
        let position: usize = kani::any();
        let count: usize = kani::any();
        kani::assume(count <= 5);

        let before = buffer.len();
        if buffer.shift_right(position, count).is_ok() {
            assert!(buffer.len() == before + count);
        } else {
            assert!(buffer.len() == before);
        }
        assert!(buffer.len() <= buffer.capacity());
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_shift_left_rejection_is_side_effect_free() {
        let mut buffer = BoundedBuffer::from_slice(4, &[1u8, 2, 3]).unwrap();
        let position: usize = kani::any();
        let count: usize = kani::any();

        if buffer.shift_left(position, count).is_err() {
            assert!(buffer.as_slice() == [1, 2, 3]);
        } else {
            assert!(buffer.len() == 3 - count);
        }
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_take_preserves_capacity() {
        let mut buffer = BoundedBuffer::from_slice(4, &[7u8, 8]).unwrap();
        let moved = buffer.take().unwrap();
        assert!(moved.len() == 2);
        assert!(buffer.is_empty());
        assert!(buffer.capacity() == 4);
    }
}

// ============================================================================
// Tests
// ============================================================================
