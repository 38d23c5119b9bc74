// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for error injection in streams.

use eddy_core::{EddyError, StreamItem};
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream wrapper that injects an upstream failure at a given position.
///
/// Values of the inner stream are wrapped in `StreamItem::Value`. When the
/// position is reached an `EddyError::UpstreamFailure` is emitted instead of
/// pulling from the inner stream. The wrapper deliberately keeps producing
/// values after the error, like a misbehaving external source would, so
/// tests can check that operators stop on their own.
///
/// # Examples
///
/// ```rust
/// use eddy_test_utils::ErrorInjectingStream;
/// use eddy_core::StreamItem;
/// use futures::{stream, StreamExt};
///
/// # futures::executor::block_on(async {
/// let mut source = ErrorInjectingStream::new(stream::iter(vec![1, 2, 3]), 1);
///
/// assert!(matches!(source.next().await, Some(StreamItem::Value(1))));
/// assert!(matches!(source.next().await, Some(StreamItem::Error(_))));
/// assert!(matches!(source.next().await, Some(StreamItem::Value(2))));
/// # });
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    /// Creates a new error-injecting stream wrapper.
    ///
    /// `inject_error_at` is the 0-based position of the error among emitted items.
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = StreamItem<S::Item>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.inject_error_at == Some(self.count) {
            self.inject_error_at = None;
            self.count += 1;
            return Poll::Ready(Some(StreamItem::Error(EddyError::upstream(
                "Injected test error",
            ))));
        }

        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => {
                self.count += 1;
                Poll::Ready(Some(StreamItem::Value(item)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
