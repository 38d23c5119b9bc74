// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conditional logging shim: uses `tracing` when the `tracing` feature is
//! enabled, otherwise `warn!` falls back to `eprintln!` and the lower levels
//! compile to nothing.
//!
//! Operators import the macros from here so they never depend on `tracing`
//! directly:
//!
//! ```
//! use eddy_core::logging::{debug, trace};
//!
//! let dropped = 3;
//! trace!("throttle: dropped {} values", dropped);
//! debug!("source ended");
//! ```

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __eddy_warn {
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
    }};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __eddy_silent {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(not(feature = "tracing"))]
pub use crate::__eddy_silent as debug;
#[cfg(not(feature = "tracing"))]
pub use crate::__eddy_silent as trace;
#[cfg(not(feature = "tracing"))]
pub use crate::__eddy_warn as warn;
