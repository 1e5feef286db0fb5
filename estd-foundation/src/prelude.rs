//! Prelude module for estd-foundation
//!
//! Re-exports the containers, pointers and error types most code needs, so
//! firmware can start with a single `use estd_foundation::prelude::*;`.

pub use core::{
    cmp::{Eq, PartialEq},
    fmt::Debug,
    ops::{Deref, DerefMut},
};

pub use estd_error::{codes, Error, ErrorCategory, Result};

pub use crate::collections::{BoundedBuffer, BoundedMap, BoundedSet, BoundedVec};
pub use crate::memory::{make_shared, make_unique, SharedPtr, UniquePtr};
