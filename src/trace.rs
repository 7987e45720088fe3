//! Tracing support for mutation diagnostics.
//!
//! Forwards to the `tracing` crate when the `tracing` feature is enabled,
//! and compiles to nothing when it is disabled.

#[cfg(feature = "tracing")]
macro_rules! trace_mutation {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_mutation {
    ($($arg:tt)*) => {};
}

pub(crate) use trace_mutation;
