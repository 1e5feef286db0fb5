// ESTD - estd-foundation
// Module: UniquePtr - Nullable single owner
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Nullable single-owner handle over `Box`.

use alloc::boxed::Box;
use core::{fmt, mem};

use estd_error::Result;

use super::{allocation::try_box, SharedPtr};

/// A nullable, exclusively owning handle.
///
/// # Examples
///
/// ```
/// use estd_foundation::UniquePtr;
///
/// let mut owner = UniquePtr::make_unique(3u32)?;
/// if let Some(value) = owner.get_mut() {
///     *value += 1;
/// }
/// let released = owner.release();
/// assert!(owner.is_null());
/// assert_eq!(released.as_deref(), Some(&4));
/// # Ok::<(), estd_error::Error>(())
/// ```
pub struct UniquePtr<T: ?Sized> {
    owned: Option<Box<T>>,
}

impl<T> UniquePtr<T> {
    /// Moves `value` onto the heap.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when the allocator fails.
    pub fn make_unique(value: T) -> Result<Self> {
        Ok(Self {
            owned: Some(try_box(value)?),
        })
    }
}

impl<T: ?Sized> UniquePtr<T> {
    /// Creates an empty handle.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { owned: None }
    }

    /// Takes ownership of an existing heap object.
    #[inline]
    #[must_use]
    pub fn from_box(value: Box<T>) -> Self {
        Self { owned: Some(value) }
    }

    /// Drops the current object, if any, and adopts `value`.
    #[inline]
    pub fn reset(&mut self, value: Option<Box<T>>) {
        self.owned = value;
    }

    /// Gives up ownership without dropping, leaving the handle empty.
    #[inline]
    #[must_use]
    pub fn release(&mut self) -> Option<Box<T>> {
        self.owned.take()
    }

    /// Moves the object out into a new handle, leaving `self` empty.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchanges objects with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Converts to a handle of a related type, such as a trait object.
    ///
    /// ```
    /// use core::fmt::Debug;
    /// use estd_foundation::UniquePtr;
    ///
    /// let concrete = UniquePtr::make_unique(5u8)?;
    /// let erased: UniquePtr<dyn Debug> = concrete.convert(|b| b as Box<dyn Debug>);
    /// assert!(!erased.is_null());
    /// # Ok::<(), estd_error::Error>(())
    /// ```
    #[must_use]
    pub fn convert<U: ?Sized, F>(self, f: F) -> UniquePtr<U>
    where
        F: FnOnce(Box<T>) -> Box<U>,
    {
        UniquePtr {
            owned: self.owned.map(f),
        }
    }

    /// Moves the object under shared ownership.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when the control block cannot be
    /// allocated. The object is dropped in that case.
    pub fn into_shared(self) -> Result<SharedPtr<T>> {
        match self.owned {
            Some(owned) => SharedPtr::from_box(owned),
            None => Ok(SharedPtr::empty()),
        }
    }

    /// Returns the owned object.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.owned.as_deref()
    }

    /// Returns the owned object mutably.
    #[inline]
    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.owned.as_deref_mut()
    }

    /// Returns `true` if the handle owns nothing.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.owned.is_none()
    }

    fn address(&self) -> Option<*const ()> {
        self.owned
            .as_deref()
            .map(|value| (value as *const T).cast::<()>())
    }
}

impl<T: ?Sized> Default for UniquePtr<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized> From<Box<T>> for UniquePtr<T> {
    fn from(value: Box<T>) -> Self {
        Self::from_box(value)
    }
}

// Identity, not value: equal only when both own the same address
impl<T: ?Sized, U: ?Sized> PartialEq<UniquePtr<U>> for UniquePtr<T> {
    fn eq(&self, other: &UniquePtr<U>) -> bool {
        self.address() == other.address()
    }
}

impl<T: ?Sized> Eq for UniquePtr<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for UniquePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UniquePtr").field(&self.get()).finish()
    }
}
