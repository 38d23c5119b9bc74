// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eddy_core::{EddyError, StreamItem};
use futures::stream::{Stream, StreamExt};
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Panics if `stream` yields anything (value, error or end) within `timeout_ms`.
///
/// The pull is cancelled when the timeout fires; the stream stays usable.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    tokio::select! {
        item = stream.next() => {
            panic!("Unexpected emission, expected no output: {item:?}");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Pulls the next item and unwraps the `StreamItem` layer.
///
/// Returns the error if the stream yielded one, and an upstream failure if the
/// stream ended.
///
/// # Panics
///
/// Panics if nothing arrives within `timeout_ms`.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> Result<T, EddyError>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(StreamItem::Value(v))) => Ok(v),
        Ok(Some(StreamItem::Error(e))) => Err(e),
        Ok(None) => Err(EddyError::upstream("Stream ended")),
        Err(_) => panic!("Timeout: no item received within {timeout_ms} ms"),
    }
}

/// Panics unless `stream` yields the end marker within `timeout_ms`.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(item)) => panic!("Expected end of stream, got {item:?}"),
        Err(_) => panic!("Timeout: stream did not end within {timeout_ms} ms"),
    }
}
