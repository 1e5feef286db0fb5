// ESTD - estd-foundation
// Module: Bounded collections
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity collections for embedded and safety-critical code.
//!
//! Every collection here sits on [`BoundedBuffer`], allocates once at
//! construction and reports capacity exhaustion as an error instead of
//! growing.
//!
//! # Available Collections
//!
//! | Type | Description |
//! |------|-------------|
//! | [`BoundedBuffer`] | Contiguous storage with checked shifts |
//! | [`BoundedVec`] | Sequence with push/pop/insert/erase |
//! | [`BoundedSet`] | Unordered set of unique values, linear lookup |
//! | [`BoundedMap`] | Unordered key-value map, linear lookup |

mod bounded_buffer;
mod map;
mod set;
mod vec;

pub use bounded_buffer::BoundedBuffer;
pub use map::BoundedMap;
pub use set::BoundedSet;
pub use vec::BoundedVec;

/// Shared iterator over a bounded collection's populated elements
pub type Iter<'a, T> = core::slice::Iter<'a, T>;

/// Mutable iterator over a bounded collection's populated elements
pub type IterMut<'a, T> = core::slice::IterMut<'a, T>;
