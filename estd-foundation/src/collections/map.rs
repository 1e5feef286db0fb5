// ESTD - estd-foundation
// Module: BoundedMap - Fixed-capacity unordered map
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unordered key-value map with linear lookup.
//!
//! Entries live as `(K, V)` tuples in a [`BoundedBuffer`] in insertion
//! order. Keys only need `PartialEq`.

use core::{fmt, mem};

use estd_error::Result;

use super::{BoundedBuffer, Iter};

/// A map with a capacity fixed at construction.
///
/// # Invariants
///
/// 1. No two entries have equal keys
/// 2. `len() <= capacity()`
///
/// # Examples
///
/// ```
/// use estd_foundation::BoundedMap;
///
/// let mut map = BoundedMap::new(4)?;
/// map.insert("foo", 42u32)?;
/// assert_eq!(map.insert("foo", 43)?, Some(42));
/// assert_eq!(map.get(&"foo"), Some(&43));
/// # Ok::<(), estd_error::Error>(())
/// ```
pub struct BoundedMap<K, V> {
    entries: BoundedBuffer<(K, V)>,
}

impl<K, V> BoundedMap<K, V>
where
    K: Clone + Default + PartialEq,
    V: Clone + Default,
{
    /// Creates an empty map able to hold `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns an invalid-capacity or allocation error.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            entries: BoundedBuffer::new(capacity)?,
        })
    }

    /// Deep copy with observable allocation failure.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when the allocator fails.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            entries: self.entries.try_clone()?,
        })
    }

    /// Moves the entries out, leaving `self` empty with its capacity.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when the replacement allocation fails.
    pub fn take(&mut self) -> Result<Self> {
        Ok(Self {
            entries: self.entries.take()?,
        })
    }

    /// Inserts or updates the entry for `key`.
    ///
    /// Returns the previous value when the key was already present.
    ///
    /// # Errors
    ///
    /// Returns a capacity error when the key is new and the map is full.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        if let Some(existing) = self.get_mut(&key) {
            return Ok(Some(mem::replace(existing, value)));
        }
        let end = self.entries.len();
        self.entries.shift_right(end, 1)?;
        self.entries[end] = (key, value);
        Ok(None)
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let position = self.find(key)?;
        let value = mem::take(&mut self.entries[position].1);
        self.entries.erase(position).ok()?;
        Some(value)
    }

    /// Returns the entry position of `key` in iteration order.
    #[must_use]
    pub fn find(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(candidate, _)| candidate == key)
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    /// Returns the value for `key` mutably.
    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if an entry for `key` exists.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }
}

impl<K, V> BoundedMap<K, V> {
    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the map is at capacity.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Removes every entry, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Exchanges contents with `other` in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.entries.swap(&mut other.entries);
    }

    /// Iterates over `(key, value)` entries in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, (K, V)> {
        self.entries.iter()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates mutably over the values in insertion order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.entries.iter_mut().map(|(_, value)| value)
    }
}

impl<K: Clone + Default, V: Clone + Default> Clone for BoundedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

// Order-insensitive: same keys mapping to equal values
impl<K: PartialEq, V: PartialEq> PartialEq for BoundedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(key, value)| {
                other
                    .entries
                    .iter()
                    .any(|(other_key, other_value)| other_key == key && other_value == value)
            })
    }
}

impl<K: Eq, V: Eq> Eq for BoundedMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BoundedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

impl<'a, K, V> IntoIterator for &'a BoundedMap<K, V> {
    type Item = &'a (K, V);
    type IntoIter = Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
