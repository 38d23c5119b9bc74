// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Eddy
//!
//! Composable asynchronous sequences built on [`Stream`].
//!
//! ## Overview
//!
//! An eddy sequence is any `Stream<Item = StreamItem<T>>`: each pull yields a
//! value, an error, or the end marker. Combinators wrap one or more
//! sequences and are themselves sequences, so they chain freely:
//!
//! - **Sources**: [`from_iter`], [`try_from_iter`]
//! - **Pairing**: [`ZipWithExt::zip_with`]
//! - **Time**: [`DebounceExt`], [`ThrottleExt`], [`ThrottleLatestExt`], driven
//!   by a [`Clock`]
//! - **Shaping**: [`DistinctUntilChangedExt`], [`ChunkByCountExt`]
//! - **Lifecycle**: [`TakeUntilCancelledExt`] with a [`CancellationToken`],
//!   [`FuseOnErrorExt`]
//!
//! Every combinator forwards the first error and ends right after it.
//! Dropping a combinator drops its upstreams and any timer it owns.
//!
//! ## Quick Start
//!
//! ```rust
//! use eddy::prelude::*;
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> eddy::Result<()> {
//! let readings = from_iter([20, 20, 21, 21, 21, 22, 23, 23]);
//!
//! let mut batches = readings
//!     .distinct_until_changed()
//!     .chunk_by_count(2)?;
//!
//! assert_eq!(batches.next().await.unwrap().unwrap(), vec![20, 21]);
//! assert_eq!(batches.next().await.unwrap().unwrap(), vec![22, 23]);
//! assert!(batches.next().await.is_none());
//! # Ok(())
//! # }
//! ```

pub use eddy_core::{CancellationToken, EddyError, IntoEddyError, Result, StreamItem};
pub use eddy_runtime::clock::Clock;
#[cfg(feature = "runtime-tokio")]
pub use eddy_runtime::impls::tokio::TokioClock;
pub use eddy_stream::{
    from_iter, try_from_iter, ChunkByCountExt, DistinctUntilChangedExt, FromIter, FuseOnError,
    FuseOnErrorExt, TakeUntilCancelled, TakeUntilCancelledExt, TryFromIter, ZipWith, ZipWithExt,
};
pub use eddy_stream_time::{
    Debounce, DebounceExt, Throttle, ThrottleExt, ThrottleLatest, ThrottleLatestExt,
};
pub use futures::Stream;

/// Prelude module for convenient imports
pub mod prelude {
    pub use eddy_stream::prelude::*;
    pub use eddy_stream_time::prelude::*;
}
