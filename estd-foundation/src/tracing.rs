//! Tracing support for estd
//!
//! This module provides structured tracing capabilities that work in both
//! std and no_std environments. It wraps the `tracing` crate and provides
//! span helpers for the two lifecycles worth following when debugging
//! firmware: bounded buffer allocation/shifting and shared ownership.

pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{debug_span, error_span, info_span, span, trace_span, warn_span};
pub use tracing::{event, Level, Span};

/// Trace events for bounded buffer operations
#[derive(Debug, Clone)]
pub struct BufferTrace;

impl BufferTrace {
    /// Create a span for buffer allocation
    #[inline]
    pub fn allocating(capacity: usize, element_size: usize) -> Span {
        trace_span!("buffer_alloc", capacity = %capacity, element_size = %element_size)
    }

    /// Create a span for a shift operation
    #[inline]
    pub fn shifting(direction: &'static str, position: usize, count: usize) -> Span {
        trace_span!("buffer_shift", direction = %direction, position = %position, count = %count)
    }
}

/// Trace events for shared and unique ownership
#[derive(Debug, Clone)]
pub struct OwnershipTrace;

impl OwnershipTrace {
    /// Create a span for control block creation
    #[inline]
    pub fn adopting(type_name: &'static str) -> Span {
        trace_span!("ownership_adopt", type_name = %type_name)
    }

    /// Create a span for releasing a reference
    #[inline]
    pub fn releasing(use_count: usize) -> Span {
        trace_span!("ownership_release", use_count = %use_count)
    }
}
