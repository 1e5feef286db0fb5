// ESTD - estd-foundation
// Module: Internal tracing macros
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing macros that compile to nothing without the `tracing` feature.

/// Emit a debug-level event
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

/// Emit a trace-level event
macro_rules! trace_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

/// Enter a span for the rest of the enclosing block
macro_rules! enter_span {
    ($span:expr) => {
        #[cfg(feature = "tracing")]
        let _guard = $span.entered();
    };
}
