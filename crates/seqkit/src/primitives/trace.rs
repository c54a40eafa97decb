//! Diagnostic event macros.
//!
//! Events are forwarded to `tracing` when the `tracing` feature is enabled
//! and compile to nothing otherwise, so the hot loops in `top` and
//! `merge_by_key` pay no cost in default builds.

/// Emit a `TRACE`-level event.
macro_rules! trace_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "seqkit", $($arg)*);
    }};
}

/// Emit a `DEBUG`-level event.
macro_rules! debug_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!(target: "seqkit", $($arg)*);
    }};
}

pub(crate) use debug_event;
pub(crate) use trace_event;
