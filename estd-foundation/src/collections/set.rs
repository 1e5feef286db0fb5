// ESTD - estd-foundation
// Module: BoundedSet - Fixed-capacity unordered set
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unordered set of unique values with linear lookup.
//!
//! Only `PartialEq` is required of elements, so values that cannot be
//! hashed or ordered still fit. Lookup is O(n), which suits the small
//! capacities this set is meant for.

use core::fmt;

use estd_error::Result;

use super::{BoundedBuffer, Iter};

/// A set with a capacity fixed at construction.
///
/// # Examples
///
/// ```
/// use estd_foundation::BoundedSet;
///
/// let mut set = BoundedSet::new(4)?;
/// assert!(set.insert(7u32)?);
/// assert!(!set.insert(7)?);
/// assert_eq!(set.len(), 1);
/// # Ok::<(), estd_error::Error>(())
/// ```
pub struct BoundedSet<T> {
    buffer: BoundedBuffer<T>,
}

impl<T: Clone + Default + PartialEq> BoundedSet<T> {
    /// Creates an empty set able to hold `capacity` values.
    ///
    /// # Errors
    ///
    /// Returns an invalid-capacity or allocation error.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            buffer: BoundedBuffer::new(capacity)?,
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

    /// Adds `value` if it is not already present.
    ///
    /// Returns `Ok(true)` when inserted and `Ok(false)` when an equal value
    /// was already in the set.
    ///
    /// # Errors
    ///
    /// Returns a capacity error when the value is new and the set is full.
    pub fn insert(&mut self, value: T) -> Result<bool> {
        if self.contains(&value) {
            return Ok(false);
        }
        let end = self.buffer.len();
        self.buffer.shift_right(end, 1)?;
        self.buffer[end] = value;
        Ok(true)
    }

    /// Removes `value`, returning whether it was present.
    pub fn erase(&mut self, value: &T) -> bool {
        match self.find(value) {
            Some(position) => self.buffer.erase(position).is_ok(),
            None => false,
        }
    }

    /// Returns the position of `value` in iteration order.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<usize> {
        self.buffer.iter().position(|candidate| candidate == value)
    }

    /// Returns `true` if an equal value is present.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl<T> BoundedSet<T> {
    /// Returns the number of values.
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

    /// Returns `true` if the set holds no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns `true` if the set is at capacity.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.buffer.is_full()
    }

    /// Removes every value, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exchanges contents with `other` in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
    }

    /// Iterates over the values in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.buffer.iter()
    }

    /// Returns the values as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }
}

impl<T: Clone + Default> Clone for BoundedSet<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
        }
    }
}

// Order-insensitive: both sets hold the same values
impl<T: PartialEq> PartialEq for BoundedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer.len() == other.buffer.len()
            && self
                .buffer
                .iter()
                .all(|value| other.buffer.iter().any(|candidate| candidate == value))
    }
}

impl<T: Eq> Eq for BoundedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for BoundedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.buffer.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a BoundedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
