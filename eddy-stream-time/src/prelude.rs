// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude re-exporting the time-based extension traits and the clock types.
//!
//! ```rust
//! use eddy_stream_time::prelude::*;
//! ```

pub use crate::debounce::DebounceExt;
pub use crate::throttle::ThrottleExt;
pub use crate::throttle_latest::ThrottleLatestExt;

pub use crate::Clock;
#[cfg(feature = "runtime-tokio")]
pub use crate::TokioClock;
