//! Optional `tracing` instrumentation.
//!
//! With the `tracing` feature enabled, [`trace_event!`] forwards to
//! [`tracing::trace!`]. Without it the macro expands to nothing and the
//! arguments are not evaluated.

macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($argument)*);
    };
}

pub(crate) use trace_event;
