// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A source that emits at fixed points in (tokio) time.
//!
//! Combined with `#[tokio::test(start_paused = true)]` this replays an exact
//! arrival schedule, which is what the time-based operators need to be
//! tested deterministically.

use eddy_core::StreamItem;
use futures::stream::{self, Stream};
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Emits each `(offset_ms, item)` at `start + offset_ms`, where `start` is the
/// moment this function is called.
///
/// After the last item the stream ends at `start + end_ms` if `end_ms` is
/// given, or immediately otherwise. Offsets must be non-decreasing.
///
/// # Example
///
/// ```rust
/// use eddy_core::StreamItem;
/// use eddy_test_utils::scheduled_stream;
/// use futures::StreamExt;
/// use std::time::Duration;
/// use tokio::time::Instant;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let start = Instant::now();
/// let mut source = scheduled_stream(vec![(100, StreamItem::Value("a"))], None);
///
/// assert_eq!(source.next().await.unwrap().unwrap(), "a");
/// assert_eq!(start.elapsed(), Duration::from_millis(100));
/// # }
/// ```
pub fn scheduled_stream<T>(
    events: Vec<(u64, StreamItem<T>)>,
    end_ms: Option<u64>,
) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
where
    T: Send + 'static,
{
    let start = Instant::now();
    let at = move |ms: u64| start + Duration::from_millis(ms);

    let state = (events.into_iter(), end_ms);
    Box::pin(stream::unfold(state, move |(mut events, end_ms)| async move {
        match events.next() {
            Some((offset, item)) => {
                sleep_until(at(offset)).await;
                Some((item, (events, end_ms)))
            }
            None => {
                if let Some(end) = end_ms {
                    sleep_until(at(end)).await;
                }
                None
            }
        }
    }))
}
