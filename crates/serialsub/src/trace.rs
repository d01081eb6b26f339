//! Debug events that compile away unless the `tracing` feature is enabled.

macro_rules! trace_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

/// Log an error at debug level and hand it back, for use in `map_err`.
macro_rules! traced {
    ($err:expr) => {{
        let err = $err;
        trace_debug!(error = %err, "replacement failed");
        err
    }};
}
