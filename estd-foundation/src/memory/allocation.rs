// ESTD - estd-foundation
// Module: Fallible heap allocation
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Raw global-allocator calls; every block is handed straight to Box
#![allow(unsafe_code)]

//! Boxing that reports allocator exhaustion instead of aborting.

use alloc::{
    alloc::{alloc, Layout},
    boxed::Box,
};
use core::ptr::NonNull;

use estd_error::{Error, Result};

/// Moves `value` into a new heap allocation.
///
/// # Errors
///
/// Returns an allocation error when the global allocator returns null.
/// `value` is dropped in that case.
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        // Zero-sized boxes never touch the allocator
        return Ok(Box::new(value));
    }

    // SAFETY: layout has a non-zero size
    let raw = unsafe { alloc(layout) }.cast::<T>();
    let slot = NonNull::new(raw).ok_or(Error::allocation_failed(
        "Global allocator returned null",
    ))?;

    // SAFETY: slot is a fresh allocation with T's layout from the global
    // allocator, which is exactly what Box::from_raw expects
    unsafe {
        slot.as_ptr().write(value);
        Ok(Box::from_raw(slot.as_ptr()))
    }
}
