// ESTD - estd-foundation
// Module: BoundedVec - Fixed-capacity sequence
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity vector on top of [`BoundedBuffer`].
//!
//! `BoundedVec<T>` adds the familiar sequence operations (push, pop,
//! positional insert and erase, resize) and dereferences to `[T]` so slice
//! methods work directly. Growth past the capacity chosen at construction
//! is an error.

use core::{
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut, RangeBounds},
};

use estd_error::{Error, Result};

use super::{BoundedBuffer, Iter, IterMut};

/// A vector whose capacity is fixed at construction.
///
/// # Examples
///
/// ```
/// use estd_foundation::BoundedVec;
///
/// let mut vec = BoundedVec::new(3)?;
/// vec.push(1u32)?;
/// vec.push(3)?;
/// vec.insert(1, 2)?;
/// assert_eq!(&vec[..], &[1, 2, 3]);
/// assert!(vec.push(4).is_err());
/// # Ok::<(), estd_error::Error>(())
/// ```
pub struct BoundedVec<T> {
    buffer: BoundedBuffer<T>,
}

impl<T: Clone + Default> BoundedVec<T> {
    /// Creates an empty vector able to hold `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns an invalid-capacity or allocation error.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            buffer: BoundedBuffer::new(capacity)?,
        })
    }

    /// Creates a vector of `capacity` slots holding a copy of `values`.
    ///
    /// # Errors
    ///
    /// Returns a capacity error when `values` does not fit.
    pub fn from_slice(capacity: usize, values: &[T]) -> Result<Self> {
        Ok(Self {
            buffer: BoundedBuffer::from_slice(capacity, values)?,
        })
    }

    /// Deep copy with observable allocation failure.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when the allocator fails.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            buffer: self.buffer.try_clone()?,
        })
    }

    /// Moves the contents out, leaving `self` empty with its capacity.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when the replacement allocation fails.
    pub fn take(&mut self) -> Result<Self> {
        Ok(Self {
            buffer: self.buffer.take()?,
        })
    }

    /// Copy-assigns `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns an allocation error; `self` is unchanged in that case.
    pub fn assign(&mut self, other: &Self) -> Result<()> {
        self.buffer.assign(&other.buffer)
    }

    /// Move-assigns `other` into `self`, leaving `other` empty.
    ///
    /// # Errors
    ///
    /// Returns an allocation error; both are unchanged in that case.
    pub fn move_assign(&mut self, other: &mut Self) -> Result<()> {
        self.buffer.move_assign(&mut other.buffer)
    }

    /// Appends `value` at the end.
    ///
    /// # Errors
    ///
    /// Returns a capacity error when the vector is full.
    pub fn push(&mut self, value: T) -> Result<()> {
        let end = self.buffer.len();
        self.buffer.shift_right(end, 1)?;
        self.buffer[end] = value;
        Ok(())
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.buffer.len().checked_sub(1)?;
        let value = mem::take(&mut self.buffer[last]);
        self.buffer.shift_left(last + 1, 1).ok()?;
        Some(value)
    }

    /// Inserts `value` before `position`.
    ///
    /// `position == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when `position > len()`, or a
    /// capacity error when the vector is full.
    pub fn insert(&mut self, position: usize, value: T) -> Result<()> {
        self.buffer.shift_right(position, 1)?;
        self.buffer[position] = value;
        Ok(())
    }

    /// Inserts `count` copies of `value` before `position`.
    ///
    /// # Errors
    ///
    /// Same as [`BoundedVec::insert`]. Nothing is inserted on error.
    pub fn insert_n(&mut self, position: usize, count: usize, value: &T) -> Result<()> {
        self.buffer.shift_right(position, count)?;
        for slot in &mut self.buffer.as_mut_slice()[position..position + count] {
            slot.clone_from(value);
        }
        Ok(())
    }

    /// Inserts a copy of `values` before `position`.
    ///
    /// # Errors
    ///
    /// Same as [`BoundedVec::insert`]. Nothing is inserted on error.
    pub fn insert_slice(&mut self, position: usize, values: &[T]) -> Result<()> {
        self.buffer.shift_right(position, values.len())?;
        self.buffer.as_mut_slice()[position..position + values.len()].clone_from_slice(values);
        Ok(())
    }

    /// Appends a copy of `values`.
    ///
    /// # Errors
    ///
    /// Returns a capacity error when `values` does not fit.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<()> {
        self.insert_slice(self.buffer.len(), values)
    }

    /// Erases the element at `position`, returning the position of the
    /// element that followed it.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when `position >= len()`.
    pub fn erase(&mut self, position: usize) -> Result<usize> {
        self.buffer.erase(position)
    }

    /// Removes and returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when `position >= len()`.
    pub fn remove(&mut self, position: usize) -> Result<T> {
        let slot = self
            .buffer
            .get_mut(position)
            .ok_or(Error::out_of_bounds("Remove position past end of vector"))?;
        let value = mem::take(slot);
        self.buffer.erase(position)?;
        Ok(value)
    }

    /// Erases every element in `range`, returning the range start.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error for an inverted or overlong range.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize> {
        self.buffer.erase_range(range)
    }

    /// Overwrites every element with a copy of `value`.
    pub fn fill(&mut self, value: &T) {
        for slot in self.buffer.iter_mut() {
            slot.clone_from(value);
        }
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns a capacity error when `new_len > capacity()`.
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        self.resize_with_value(new_len, &T::default())
    }

    /// Resizes to `new_len`, filling new slots with copies of `value`.
    ///
    /// # Errors
    ///
    /// Returns a capacity error when `new_len > capacity()`.
    pub fn resize_with_value(&mut self, new_len: usize, value: &T) -> Result<()> {
        if new_len > self.buffer.capacity() {
            return Err(Error::capacity_exceeded("Resize beyond vector capacity"));
        }
        let old_len = self.buffer.len();
        if new_len > old_len {
            for slot in &mut self.buffer.slots_mut()[old_len..new_len] {
                slot.clone_from(value);
            }
        }
        self.buffer.set_len(new_len)
    }
}

impl<T> BoundedVec<T> {
    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the number of free slots.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buffer.remaining()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns `true` if the vector is at capacity.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.buffer.is_full()
    }

    /// Removes every element, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exchanges contents and capacity with `other` in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
    }

    /// Returns the first element.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.buffer.as_slice().first()
    }

    /// Returns the first element mutably.
    #[inline]
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.buffer.as_mut_slice().first_mut()
    }

    /// Returns the last element.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.buffer.as_slice().last()
    }

    /// Returns the last element mutably.
    #[inline]
    #[must_use]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.buffer.as_mut_slice().last_mut()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }

    /// Iterates over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.buffer.iter()
    }

    /// Iterates mutably over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.buffer.iter_mut()
    }
}

impl<T> Deref for BoundedVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.buffer.as_slice()
    }
}

impl<T> DerefMut for BoundedVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }
}

impl<T: Clone + Default> Clone for BoundedVec<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.buffer.clone_from(&source.buffer);
    }
}

impl<T: PartialEq> PartialEq for BoundedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl<T: Eq> Eq for BoundedVec<T> {}

impl<T: Hash> Hash for BoundedVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buffer.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a BoundedVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BoundedVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() -> Result<()> {
        let mut vec = BoundedVec::new(3)?;
        vec.push(1u32)?;
        vec.push(2)?;
        vec.push(3)?;
        assert!(vec.is_full());

        let err = vec.push(4).unwrap_err();
        assert!(err.is_capacity_error());
        assert_eq!(&vec[..], &[1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_pop() -> Result<()> {
        let mut vec = BoundedVec::from_slice(4, &[1u32, 2])?;
        assert_eq!(vec.pop(), Some(2));
        assert_eq!(vec.pop(), Some(1));
        assert_eq!(vec.pop(), None);
        assert!(vec.is_empty());
        Ok(())
    }

    #[test]
    fn test_insert_front_middle_end() -> Result<()> {
        let mut vec = BoundedVec::from_slice(6, &[2u32, 4])?;
        vec.insert(0, 1)?;
        vec.insert(2, 3)?;
        vec.insert(4, 5)?;
        assert_eq!(&vec[..], &[1, 2, 3, 4, 5]);
        assert!(vec.insert(7, 0).unwrap_err().is_bounds_error());
        Ok(())
    }

    #[test]
    fn test_insert_n_and_slice() -> Result<()> {
        let mut vec = BoundedVec::from_slice(8, &[0u8, 9])?;
        vec.insert_n(1, 3, &7)?;
        assert_eq!(&vec[..], &[0, 7, 7, 7, 9]);
        vec.insert_slice(4, &[1, 2])?;
        assert_eq!(&vec[..], &[0, 7, 7, 7, 1, 2, 9]);
        assert!(vec.insert_slice(0, &[5, 5]).is_err());
        assert_eq!(vec.len(), 7);
        Ok(())
    }

    #[test]
    fn test_remove_and_erase() -> Result<()> {
        let mut vec = BoundedVec::from_slice(5, &[10u32, 20, 30, 40])?;
        assert_eq!(vec.remove(1)?, 20);
        assert_eq!(vec.erase(0)?, 0);
        assert_eq!(&vec[..], &[30, 40]);
        assert!(vec.remove(2).is_err());
        Ok(())
    }

    #[test]
    fn test_erase_range() -> Result<()> {
        let mut vec = BoundedVec::from_slice(6, &[1u8, 2, 3, 4, 5, 6])?;
        vec.erase_range(1..4)?;
        assert_eq!(&vec[..], &[1, 5, 6]);
        Ok(())
    }

    #[test]
    fn test_resize() -> Result<()> {
        let mut vec = BoundedVec::from_slice(5, &[1u32])?;
        vec.resize(3)?;
        assert_eq!(&vec[..], &[1, 0, 0]);
        vec.resize_with_value(5, &9)?;
        assert_eq!(&vec[..], &[1, 0, 0, 9, 9]);
        vec.resize(2)?;
        assert_eq!(&vec[..], &[1, 0]);
        assert!(vec.resize(6).is_err());
        Ok(())
    }

    #[test]
    fn test_resize_overwrites_stale_slots() -> Result<()> {
        let mut vec = BoundedVec::from_slice(3, &[7u32, 8, 9])?;
        vec.clear();
        vec.resize(3)?;
        assert_eq!(&vec[..], &[0, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_fill() -> Result<()> {
        let mut vec = BoundedVec::from_slice(4, &[1u32, 2, 3])?;
        vec.fill(&7);
        assert_eq!(&vec[..], &[7, 7, 7]);
        assert_eq!(vec.capacity(), 4);
        Ok(())
    }

    #[test]
    fn test_front_back() -> Result<()> {
        let mut vec = BoundedVec::from_slice(4, &[1u32, 2, 3])?;
        assert_eq!(vec.front(), Some(&1));
        assert_eq!(vec.back(), Some(&3));
        if let Some(last) = vec.back_mut() {
            *last = 30;
        }
        assert_eq!(vec.back(), Some(&30));

        vec.clear();
        assert_eq!(vec.front(), None);
        Ok(())
    }

    #[test]
    fn test_slice_methods_through_deref() -> Result<()> {
        let mut vec = BoundedVec::from_slice(4, &[3u32, 1, 2])?;
        vec.sort_unstable();
        assert_eq!(&vec[..], &[1, 2, 3]);
        assert!(vec.contains(&2));
        Ok(())
    }

    #[test]
    fn test_strings() -> Result<()> {
        let mut vec: BoundedVec<alloc::string::String> = BoundedVec::new(2)?;
        vec.push("alpha".into())?;
        vec.insert(0, "beta".into())?;
        assert_eq!(vec.pop().as_deref(), Some("alpha"));
        assert_eq!(vec.front().map(|s| s.as_str()), Some("beta"));
        Ok(())
    }

    #[test]
    fn test_debug() -> Result<()> {
        let vec = BoundedVec::from_slice(4, &[1u8, 2])?;
        assert_eq!(alloc::format!("{vec:?}"), "[1, 2]");
        Ok(())
    }
}
