// ESTD - estd-foundation
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounded containers and ownership pointers for embedded targets.
//!
//! This crate provides the container and smart-pointer layer that embedded
//! firmware normally gets from a full standard library, under two hard
//! constraints:
//! - containers never reallocate: capacity is fixed when they are created
//!   and running out of it is a checked error, never silent growth
//! - every allocation is fallible: allocation failure is reported as an
//!   [`Error`] instead of aborting
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support
//! - `tracing`: Structured tracing of buffer and ownership lifecycles
//! - `embedded-small` / `embedded-medium`: Platform capacity limits
//! - Default: `no_std` with `alloc`

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Crate-internal tracing macros must be defined before the modules using them
#[macro_use]
mod macros;

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

// Re-export error related types for convenience
pub use estd_error::{codes, Error, ErrorCategory, Result};

/// Bounded, never-reallocating containers
pub mod collections;
/// Platform capacity limits
pub mod limits;
/// Shared and unique ownership pointers
pub mod memory;
/// Structured tracing helpers
#[cfg(feature = "tracing")]
pub mod tracing;

pub use collections::{BoundedBuffer, BoundedMap, BoundedSet, BoundedVec};
pub use memory::{make_shared, make_unique, SharedPtr, UniquePtr};
