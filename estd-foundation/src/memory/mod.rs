// ESTD - estd-foundation
// Module: Ownership handles
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Nullable ownership handles with fallible allocation.
//!
//! [`SharedPtr`] is a single-threaded reference-counted handle; [`UniquePtr`]
//! is a nullable single owner. Both surface allocator exhaustion as
//! [`estd_error::Error`] values.

mod allocation;
mod shared_ptr;
mod unique_ptr;

pub use shared_ptr::SharedPtr;
pub use unique_ptr::UniquePtr;

use estd_error::Result;

/// Creates a [`SharedPtr`] whose object and count share one allocation.
///
/// # Errors
///
/// Returns an allocation error when the allocator fails.
///
/// # Examples
///
/// ```
/// use estd_foundation::make_shared;
///
/// let first = make_shared(5u32)?;
/// let second = first.clone();
/// assert_eq!(first.use_count(), 2);
/// assert_eq!(second.get(), Some(&5));
/// # Ok::<(), estd_error::Error>(())
/// ```
pub fn make_shared<T>(value: T) -> Result<SharedPtr<T>> {
    SharedPtr::make_shared(value)
}

/// Creates a [`UniquePtr`] owning `value`.
///
/// # Errors
///
/// Returns an allocation error when the allocator fails.
pub fn make_unique<T>(value: T) -> Result<UniquePtr<T>> {
    UniquePtr::make_unique(value)
}
