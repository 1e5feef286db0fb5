// ESTD - estd-error
// Module: Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for estd

// Capacity error codes (1000-1999)
/// Not enough free capacity for the requested operation
pub const CAPACITY_EXCEEDED: u16 = 1000;
/// Requested capacity is larger than the platform profile allows
pub const INVALID_CAPACITY: u16 = 1001;

// Bounds error codes (2000-2999)
/// Position outside the populated extent
pub const OUT_OF_BOUNDS: u16 = 2000;
/// Not enough elements precede a position to remove the requested count
pub const INSUFFICIENT_ELEMENTS: u16 = 2001;
/// Operation requires at least one element
pub const EMPTY_CONTAINER: u16 = 2002;

// Memory error codes (3000-3999)
/// The global allocator could not satisfy a request
pub const ALLOCATION_FAILED: u16 = 3000;

// Lookup error codes (4000-4999)
/// Key or value not present
pub const NOT_FOUND: u16 = 4000;
