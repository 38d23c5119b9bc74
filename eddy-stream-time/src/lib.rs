// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators for eddy sequences.
//!
//! Every operator takes its notion of time from a [`Clock`], passed
//! explicitly through the `*_with_clock` constructors. With the
//! `runtime-tokio` feature (default) each operator also has a shorter form
//! that uses [`TokioClock`], which follows tokio's pausable time and
//! therefore makes tests deterministic.
//!
//! # Overview
//!
//! - **[`DebounceExt`]** - emit the latest value after a quiet period
//! - **[`ThrottleExt`]** - emit the first value of every window, drop the rest
//! - **[`ThrottleLatestExt`]** - like throttle, but keep the latest dropped
//!   value and emit it when the window closes
//!
//! All operators reject a zero duration with
//! [`EddyError::InvalidConfiguration`](eddy_core::EddyError::InvalidConfiguration),
//! forward the first upstream error, and end right after it.
//!
//! # Example
//!
//! ```rust
//! use eddy_core::StreamItem;
//! use eddy_stream_time::prelude::*;
//! use futures::{stream, StreamExt};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() -> eddy_core::Result<()> {
//! let source = stream::iter(["k", "ke", "key"]).map(StreamItem::Value);
//!
//! let mut settled = source.debounce(Duration::from_millis(300))?;
//!
//! // The burst collapses into its last value
//! assert_eq!(settled.next().await.unwrap().unwrap(), "key");
//! assert!(settled.next().await.is_none());
//! # Ok(())
//! # }
//! ```

mod debounce;
mod throttle;
mod throttle_latest;

pub mod prelude;

pub use debounce::{Debounce, DebounceExt};
pub use throttle::{Throttle, ThrottleExt};
pub use throttle_latest::{ThrottleLatest, ThrottleLatestExt};

pub use eddy_runtime::clock::Clock;
#[cfg(feature = "runtime-tokio")]
pub use eddy_runtime::impls::tokio::TokioClock;

use core::time::Duration;
use eddy_core::{EddyError, Result};

pub(crate) fn validate_duration(operator: &str, duration: Duration) -> Result<()> {
    if duration.is_zero() {
        return Err(EddyError::invalid_configuration(format!(
            "{operator}: duration must be greater than zero"
        )));
    }
    Ok(())
}
