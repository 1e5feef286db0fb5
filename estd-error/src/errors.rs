// ESTD - estd-error
// Module: Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Error types shared by every estd crate.
///
/// Errors are small `Copy` values carrying a category, a numeric code and a
/// static message, so they can be returned from `no_std` code without
/// allocating.
use core::fmt;

use crate::codes;

/// `Error` categories for estd operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Not enough capacity, or a capacity the platform cannot provide
    Capacity   = 1,
    /// Position or range outside the populated extent
    Bounds     = 2,
    /// Allocation failures
    Memory     = 3,
    /// Lookup misses
    Lookup     = 4,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// estd `Error` type
///
/// Every fallible operation in estd reports one of these. A returned error
/// always means the operation did not happen and the target is unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Allocation failure error
    pub const ALLOCATION_FAILED: Self = Self::new(
        ErrorCategory::Memory,
        codes::ALLOCATION_FAILED,
        "Allocation failed",
    );
    /// Capacity exceeded error
    pub const CAPACITY_EXCEEDED: Self = Self::new(
        ErrorCategory::Capacity,
        codes::CAPACITY_EXCEEDED,
        "Capacity exceeded",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create a capacity exceeded error
    #[must_use]
    pub const fn capacity_exceeded(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
    }

    /// Create an invalid capacity error
    #[must_use]
    pub const fn invalid_capacity(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::INVALID_CAPACITY, message)
    }

    /// Create an out of bounds error
    #[must_use]
    pub const fn out_of_bounds(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::OUT_OF_BOUNDS, message)
    }

    /// Create an insufficient elements error
    #[must_use]
    pub const fn insufficient_elements(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::INSUFFICIENT_ELEMENTS, message)
    }

    /// Create an empty container error
    #[must_use]
    pub const fn empty_container(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::EMPTY_CONTAINER, message)
    }

    /// Create an allocation failed error
    #[must_use]
    pub const fn allocation_failed(message: &'static str) -> Self {
        Self::new(ErrorCategory::Memory, codes::ALLOCATION_FAILED, message)
    }

    /// Create a not found error
    #[must_use]
    pub const fn not_found(message: &'static str) -> Self {
        Self::new(ErrorCategory::Lookup, codes::NOT_FOUND, message)
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this is a memory error
    #[must_use]
    pub fn is_memory_error(&self) -> bool {
        self.category == ErrorCategory::Memory
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_error_category_matches_code_range() {
        let errors = [
            Error::capacity_exceeded(""),
            Error::invalid_capacity(""),
            Error::out_of_bounds(""),
            Error::insufficient_elements(""),
            Error::empty_container(""),
            Error::allocation_failed(""),
            Error::not_found(""),
        ];
        let index: usize = kani::any();
        kani::assume(index < errors.len());
        let error = errors[index];
        assert!(error.code / 1000 == error.category as u16);
    }
}
