// ESTD - estd-error
// Module: Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! estd error handling library
//!
//! Fallible operations across estd report an [`Error`] instead of unwinding.
//! An error always means the operation did not happen and the target
//! container or handle is unchanged.
//!
//! # Error Categories
//!
//! ## Capacity Errors (1000-1999)
//! - Not enough free capacity
//! - Capacity above the platform limit
//!
//! ## Bounds Errors (2000-2999)
//! - Position outside the populated extent
//! - Too few elements before a position
//!
//! ## Memory Errors (3000-3999)
//! - Allocation failure
//!
//! ## Lookup Errors (4000-4999)
//! - Missing key or value
//!
//! # Usage
//!
//! ```
//! use estd_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Capacity,
//!     codes::CAPACITY_EXCEEDED,
//!     "Vector is full",
//! );
//! assert!(error.is_capacity_error());
//!
//! let oob = Error::out_of_bounds("Position past end");
//! assert_eq!(oob.code, codes::OUT_OF_BOUNDS);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for estd
pub mod codes;
/// Error and error handling types
pub mod errors;

pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for estd operations.
pub type Result<T> = core::result::Result<T, Error>;
