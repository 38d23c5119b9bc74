// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for eddy sequences.
//!
//! Designed for development and testing only.
//!
//! - [`test_channel`] / [`test_channel_with_errors`]: push values into a sequence by hand
//! - [`scheduled_stream`]: a source that emits items at fixed offsets on the tokio clock
//! - [`DropWatch`]: observes when an upstream sequence is released
//! - [`ManualClock`]: a clock the test sets and steps by hand
//! - [`ErrorInjectingStream`]: injects an upstream failure at a given position
//! - [`helpers`]: assertion helpers with timeouts
//!
//! # Example
//!
//! ```rust
//! use eddy_test_utils::test_channel;
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (tx, mut stream) = test_channel::<i32>();
//!
//! tx.send(42).unwrap();
//!
//! assert_eq!(stream.next().await.unwrap().unwrap(), 42);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod drop_watch;
pub mod error_injection;
pub mod helpers;
pub mod manual_clock;
pub mod scheduled;
pub mod test_data;

use eddy_core::StreamItem;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use drop_watch::{DropFlag, DropWatch};
pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream};
pub use manual_clock::{ManualClock, ManualInstant, ManualSleep};
pub use scheduled::scheduled_stream;
pub use test_data::Row;

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// Dropping the sender ends the stream.
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
///
/// # Example
///
/// ```rust
/// use eddy_test_utils::test_channel_with_errors;
/// use eddy_core::{EddyError, StreamItem};
/// use futures::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (tx, mut stream) = test_channel_with_errors();
///
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(EddyError::upstream("test error"))).unwrap();
///
/// assert!(stream.next().await.unwrap().is_value());
/// assert!(stream.next().await.unwrap().is_error());
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
