//! Optional `tracing` instrumentation.
//!
//! With the `tracing` feature disabled the macro expands to nothing, so the
//! container carries no logging dependency by default.

/// Emits a `tracing` event at the given level when the feature is enabled.
macro_rules! trace_event {
    ($level:ident, $($arguments:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!($($arguments)+);
        }
    };
}

pub(crate) use trace_event;
