//! Platform-specific capacity limits for bounded containers.
//!
//! Bounded containers allocate their full capacity up front, so the largest
//! capacity a platform can afford is a compile-time property of the target.
//! Different platform profiles are supported via feature flags:
//!
//! - `embedded-small`: MCU targets with ~64KB RAM
//! - `embedded-medium`: Embedded Linux with ~1MB RAM
//! - Default: Desktop/Server with ample memory
//!
//! # Usage
//!
//! ```rust
//! use estd_foundation::limits;
//!
//! assert!(limits::check_capacity(16).is_ok());
//! ```

use estd_error::{Error, Result};

/// Platform profile for embedded microcontrollers (~64KB RAM)
#[cfg(feature = "embedded-small")]
pub mod platform {
    /// Maximum slots a single bounded buffer may allocate
    pub const MAX_BUFFER_CAPACITY: usize = 1024;

    /// Name of the active profile
    pub const PROFILE: &str = "embedded-small";
}

/// Platform profile for embedded Linux (~1MB RAM)
/// Note: embedded-small takes priority if both features are enabled
#[cfg(all(feature = "embedded-medium", not(feature = "embedded-small")))]
pub mod platform {
    /// Maximum slots a single bounded buffer may allocate
    pub const MAX_BUFFER_CAPACITY: usize = 65536;

    /// Name of the active profile
    pub const PROFILE: &str = "embedded-medium";
}

/// Default platform profile (Desktop/Server)
#[cfg(not(any(feature = "embedded-small", feature = "embedded-medium")))]
pub mod platform {
    /// Maximum slots a single bounded buffer may allocate
    ///
    /// Bounded by `isize::MAX` like any Rust allocation.
    pub const MAX_BUFFER_CAPACITY: usize = isize::MAX as usize;

    /// Name of the active profile
    pub const PROFILE: &str = "default";
}

pub use platform::{MAX_BUFFER_CAPACITY, PROFILE};

/// Reject capacities the active platform profile cannot provide.
///
/// # Errors
///
/// Returns an invalid-capacity error when `capacity` exceeds
/// [`MAX_BUFFER_CAPACITY`].
#[inline]
pub const fn check_capacity(capacity: usize) -> Result<()> {
    if capacity > MAX_BUFFER_CAPACITY {
        return Err(Error::invalid_capacity(
            "Requested capacity exceeds platform limit",
        ));
    }
    Ok(())
}
