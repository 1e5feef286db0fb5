// ESTD - estd-foundation
// Module: SharedPtr - Single-threaded reference-counted handle
// SW-REQ-ID: REQ_MEM_SAFETY_001, REQ_TEMPORAL_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Allow unsafe code for control block management (documented and verified via KANI)
#![allow(unsafe_code)]

//! Nullable reference-counted handle with fallible allocation.
//!
//! `SharedPtr<T>` keeps an object alive for as long as any handle sharing
//! its control block exists. Unlike `Rc`, a handle may be empty, creating
//! one reports allocator exhaustion as an error, and a handle can be
//! projected onto a trait object or a field of the object while sharing
//! the original count.
//!
//! # Characteristics
//!
//! - **Single-threaded**: The count is a `Cell`; handles are `!Send + !Sync`
//! - **Nullable**: `get()` returns `Option<&T>`
//! - **Exactly-once destruction**: The last handle frees object and count
//!
//! # Control block layouts
//!
//! Every control block starts with a `Header` holding the count and a
//! type-specific destroy function. Two layouts exist:
//!
//! - `make_shared`: header and object in one allocation
//! - `from_box`: header plus the adopted `Box`, freed separately

use alloc::boxed::Box;
use core::{cell::Cell, fmt, marker::PhantomData, mem, ptr::NonNull};

use estd_error::Result;

use super::allocation::try_box;

/// Common prefix of every control block.
#[repr(C)]
struct Header {
    /// Number of live handles sharing this block
    count: Cell<usize>,

    /// Frees the whole control block and the object it manages
    destroy: unsafe fn(NonNull<Header>),
}

impl Header {
    fn new(destroy: unsafe fn(NonNull<Header>)) -> Self {
        Self {
            count: Cell::new(1),
            destroy,
        }
    }

    fn retain(&self) {
        // Saturates; a saturated block leaks instead of being freed early
        self.count.set(self.count.get().saturating_add(1));
    }
}

/// Control block created by `make_shared`.
#[repr(C)]
struct SharedBox<T> {
    header: Header,
    value: T,
}

/// Control block created by `from_box`.
#[repr(C)]
struct BoxedBlock<T: ?Sized> {
    header: Header,
    owned: NonNull<T>,
}

/// # Safety
///
/// `header` must be the header of a `SharedBox<T>` produced by
/// `Box::into_raw`, and no handle may reference it afterwards.
unsafe fn destroy_shared<T>(header: NonNull<Header>) {
    // SAFETY: Header is the first field of the repr(C) block
    drop(unsafe { Box::from_raw(header.cast::<SharedBox<T>>().as_ptr()) });
}

/// # Safety
///
/// `header` must be the header of a `BoxedBlock<T>` produced by
/// `Box::into_raw`, and no handle may reference it afterwards.
unsafe fn destroy_boxed<T: ?Sized>(header: NonNull<Header>) {
    // SAFETY: Header is the first field of the repr(C) block, and `owned`
    // came from Box::into_raw when the block was created
    unsafe {
        let block = Box::from_raw(header.cast::<BoxedBlock<T>>().as_ptr());
        drop(Box::from_raw(block.owned.as_ptr()));
    }
}

/// Instance and control block of a non-empty handle.
struct Shared<T: ?Sized> {
    instance: NonNull<T>,
    control: NonNull<Header>,

    /// Set for handles produced by `map`/`into_map`; such an instance may
    /// not be exclusively owned by the block
    projected: bool,
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Shared<T> {}

/// A nullable, single-threaded, reference-counted handle.
///
/// # Invariants
///
/// 1. The instance is present iff the control block is present
/// 2. The count equals the number of live handles sharing the block
/// 3. The object and the block are freed once, when the count hits zero
///
/// # Examples
///
/// ```
/// use estd_foundation::SharedPtr;
///
/// let mut first = SharedPtr::make_shared(String::from("shared"))?;
/// let second = first.clone();
/// assert_eq!(first.use_count(), 2);
///
/// first.reset(None)?;
/// assert!(first.is_null());
/// assert_eq!(second.use_count(), 1);
/// # Ok::<(), estd_error::Error>(())
/// ```
pub struct SharedPtr<T: ?Sized> {
    inner: Option<Shared<T>>,

    /// The handle owns a `T` for drop-check purposes
    _marker: PhantomData<T>,
}

impl<T> SharedPtr<T> {
    /// Moves `value` into a new control block with a count of 1.
    ///
    /// Object and count share a single allocation.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when the allocator fails.
    pub fn make_shared(value: T) -> Result<Self> {
        enter_span!(crate::tracing::OwnershipTrace::adopting(core::any::type_name::<T>()));

        let block = try_box(SharedBox {
            header: Header::new(destroy_shared::<T>),
            value,
        })?;
        let raw = Box::into_raw(block);

        // SAFETY: raw comes from Box::into_raw and is non-null; the value
        // pointer is derived from it and stays valid until destroy runs
        let (instance, control) = unsafe {
            (
                NonNull::new_unchecked(&raw mut (*raw).value),
                NonNull::new_unchecked(raw).cast::<Header>(),
            )
        };

        trace_trace!("shared control block created");
        Ok(Self::from_parts(instance, control, false))
    }
}

impl<T: ?Sized> SharedPtr<T> {
    /// Creates an empty handle with a use count of 0.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            inner: None,
            _marker: PhantomData,
        }
    }

    /// Adopts a heap object, allocating a control block with a count of 1.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when the control block cannot be
    /// allocated. The object is dropped in that case.
    pub fn from_box(value: Box<T>) -> Result<Self> {
        enter_span!(crate::tracing::OwnershipTrace::adopting(core::any::type_name::<T>()));

        // SAFETY: Box::into_raw never returns null
        let owned = unsafe { NonNull::new_unchecked(Box::into_raw(value)) };
        let block = match try_box(BoxedBlock {
            header: Header::new(destroy_boxed::<T>),
            owned,
        }) {
            Ok(block) => block,
            Err(err) => {
                // SAFETY: owned came from Box::into_raw and was never shared
                drop(unsafe { Box::from_raw(owned.as_ptr()) });
                return Err(err);
            }
        };

        // SAFETY: Box::into_raw never returns null
        let control = unsafe { NonNull::new_unchecked(Box::into_raw(block)) }.cast::<Header>();

        trace_trace!("boxed control block created");
        Ok(Self::from_parts(owned, control, false))
    }

    fn from_parts(instance: NonNull<T>, control: NonNull<Header>, projected: bool) -> Self {
        Self {
            inner: Some(Shared {
                instance,
                control,
                projected,
            }),
            _marker: PhantomData,
        }
    }

    fn header(&self) -> Option<&Header> {
        // SAFETY: the block stays alive while this handle holds a count
        self.inner.as_ref().map(|shared| unsafe { shared.control.as_ref() })
    }

    /// Drops this handle's count, destroying the block at zero.
    fn release(&mut self) {
        let Some(shared) = self.inner.take() else {
            return;
        };

        // SAFETY: this handle held a count until now, so the block is alive
        let header = unsafe { shared.control.as_ref() };
        let count = header.count.get();
        if count == usize::MAX {
            // Saturated counts stick
            return;
        }
        let remaining = count.saturating_sub(1);
        header.count.set(remaining);

        enter_span!(crate::tracing::OwnershipTrace::releasing(remaining));
        if remaining == 0 {
            let destroy = header.destroy;
            trace_trace!("destroying control block");
            // SAFETY: the count reached zero, so no other handle remains
            unsafe { destroy(shared.control) };
        }
    }

    /// Returns the number of handles sharing the control block, or 0 when
    /// empty.
    #[inline]
    #[must_use]
    pub fn use_count(&self) -> usize {
        self.header().map_or(0, |header| header.count.get())
    }

    /// Returns `true` if the handle manages nothing.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns the managed object.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        // SAFETY: the instance stays alive while this handle holds a count
        self.inner.as_ref().map(|shared| unsafe { shared.instance.as_ref() })
    }

    /// Returns the managed object mutably when this is the only handle.
    ///
    /// Handles produced by [`SharedPtr::map`] or [`SharedPtr::into_map`]
    /// always return `None`.
    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.use_count() != 1 {
            return None;
        }
        let shared = self.inner.as_mut().filter(|shared| !shared.projected)?;
        // SAFETY: no other handle shares the block, and the exclusive
        // borrow of self prevents new ones for the reference's lifetime
        Some(unsafe { shared.instance.as_mut() })
    }

    /// Releases the current referent and adopts `value` with a fresh count
    /// of 1, or becomes empty for `None`.
    ///
    /// # Errors
    ///
    /// Returns an allocation error when the new control block cannot be
    /// allocated; the handle is unchanged in that case.
    pub fn reset(&mut self, value: Option<Box<T>>) -> Result<()> {
        let replacement = match value {
            Some(value) => Self::from_box(value)?,
            None => Self::empty(),
        };
        *self = replacement;
        Ok(())
    }

    /// Moves the referent out, leaving `self` empty. The count is unchanged.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Copy-assigns `other`. A no-op when both already share the referent.
    pub fn assign(&mut self, other: &Self) {
        if self.ptr_eq(other) && self.shares_owner(other) {
            return;
        }
        *self = other.clone();
    }

    /// Move-assigns `other`, releasing the previous referent once and
    /// leaving `other` empty.
    pub fn move_assign(&mut self, other: &mut Self) {
        *self = other.take();
    }

    /// Exchanges referents with `other` without touching any count.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns a handle to a view of the referent that shares this
    /// handle's count, incrementing it.
    ///
    /// The view is anything borrowed from the object, such as a trait
    /// object or a field. `T: 'static` keeps every such borrow valid for as
    /// long as the control block lives.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt::Display;
    /// use estd_foundation::SharedPtr;
    ///
    /// let number = SharedPtr::make_shared(42u32)?;
    /// let shown: SharedPtr<dyn Display> = number.map(|n| n as &(dyn Display + 'static));
    /// assert_eq!(number.use_count(), 2);
    /// # Ok::<(), estd_error::Error>(())
    /// ```
    #[must_use]
    pub fn map<U: ?Sized, F>(&self, f: F) -> SharedPtr<U>
    where
        T: 'static,
        F: FnOnce(&T) -> &U,
    {
        let Some(shared) = self.inner else {
            return SharedPtr::empty();
        };
        // SAFETY: this handle's count keeps instance and block alive
        let (value, header) = unsafe { (shared.instance.as_ref(), shared.control.as_ref()) };
        let instance = NonNull::from(f(value));
        header.retain();
        SharedPtr::from_parts(instance, shared.control, true)
    }

    /// Consumes the handle into a handle to a view of the referent,
    /// transferring the count without changing it.
    #[must_use]
    pub fn into_map<U: ?Sized, F>(mut self, f: F) -> SharedPtr<U>
    where
        T: 'static,
        F: FnOnce(&T) -> &U,
    {
        let Some(shared) = self.inner.take() else {
            return SharedPtr::empty();
        };
        // SAFETY: the count taken from self keeps the instance alive
        let instance = NonNull::from(f(unsafe { shared.instance.as_ref() }));
        SharedPtr::from_parts(instance, shared.control, true)
    }

    /// Returns `true` if both handles point at the same object address.
    ///
    /// Two empty handles are equal.
    #[inline]
    #[must_use]
    pub fn ptr_eq<U: ?Sized>(&self, other: &SharedPtr<U>) -> bool {
        self.address() == other.address()
    }

    /// Returns `true` if both handles share a control block.
    #[inline]
    #[must_use]
    pub fn shares_owner<U: ?Sized>(&self, other: &SharedPtr<U>) -> bool {
        self.inner.map(|shared| shared.control) == other.inner.map(|shared| shared.control)
    }

    fn address(&self) -> Option<NonNull<()>> {
        self.inner.map(|shared| shared.instance.cast::<()>())
    }
}

impl<T: ?Sized> Drop for SharedPtr<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: ?Sized> Clone for SharedPtr<T> {
    fn clone(&self) -> Self {
        match (self.inner, self.header()) {
            (Some(shared), Some(header)) => {
                header.retain();
                Self::from_parts(shared.instance, shared.control, shared.projected)
            }
            _ => Self::empty(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T: ?Sized> Default for SharedPtr<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized, U: ?Sized> PartialEq<SharedPtr<U>> for SharedPtr<T> {
    fn eq(&self, other: &SharedPtr<U>) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: ?Sized> Eq for SharedPtr<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for SharedPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedPtr")
            .field("value", &self.get())
            .field("use_count", &self.use_count())
            .finish()
    }
}

impl<T: ?Sized> fmt::Pointer for SharedPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let address = self
            .address()
            .map_or(core::ptr::null(), |address| address.as_ptr().cast_const());
        fmt::Pointer::fmt(&address, f)
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_clone_and_drop_balance() {
        let first = SharedPtr::make_shared(kani::any::<u32>()).unwrap();
        let second = first.clone();
        assert!(first.use_count() == 2);
        drop(second);
        assert!(first.use_count() == 1);
    }

    #[kani::proof]
    fn verify_take_preserves_count() {
        let mut first = SharedPtr::make_shared(kani::any::<u8>()).unwrap();
        let second = first.clone();
        let moved = first.take();
        assert!(first.is_null());
        assert!(first.use_count() == 0);
        assert!(moved.use_count() == 2);
        assert!(moved.ptr_eq(&second));
    }

    #[kani::proof]
    fn verify_empty_handle_is_consistent() {
        let handle: SharedPtr<u16> = SharedPtr::empty();
        assert!(handle.is_null());
        assert!(handle.use_count() == 0);
        assert!(handle.get().is_none());
    }
}

// ============================================================================
// Tests
// ============================================================================
