// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ends a sequence when a [`CancellationToken`] fires.
//!
//! Cancellation is checked before every pull and is also awaited while the
//! upstream is suspended, so a consumer blocked in `next()` is released as
//! soon as the token is cancelled. At that point the upstream is dropped:
//! every request it still has in flight (for example both sides of a zip, or
//! a debounce timer) is cancelled with it.

use eddy_core::logging::debug;
use eddy_core::{CancellationToken, StreamItem, WaitForCancellation};
use futures::stream::{FusedStream, Stream};
use futures::task::{Context, Poll};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Extension trait providing the [`take_until_cancelled`](Self::take_until_cancelled) operator.
pub trait TakeUntilCancelledExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Forwards values until `token` is cancelled, then ends.
    ///
    /// # Example
    ///
    /// ```
    /// use eddy_core::CancellationToken;
    /// use eddy_stream::{from_iter, TakeUntilCancelledExt};
    /// use futures::StreamExt;
    ///
    /// # futures::executor::block_on(async {
    /// let token = CancellationToken::new();
    /// let mut seq = from_iter(1..).take_until_cancelled(token.clone());
    ///
    /// assert_eq!(seq.next().await.unwrap().unwrap(), 1);
    /// token.cancel();
    /// assert!(seq.next().await.is_none());
    /// # });
    /// ```
    fn take_until_cancelled(self, token: CancellationToken) -> TakeUntilCancelled<Self> {
        TakeUntilCancelled {
            stream: Some(self),
            cancelled: token.cancelled_owned(),
        }
    }
}

impl<S, T> TakeUntilCancelledExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`TakeUntilCancelledExt::take_until_cancelled`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct TakeUntilCancelled<S> {
    #[pin]
    stream: Option<S>,
    cancelled: WaitForCancellation,
}

impl<S, T> Stream for TakeUntilCancelled<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if this.stream.is_none() {
            return Poll::Ready(None);
        }

        if Pin::new(&mut *this.cancelled).poll(cx).is_ready() {
            debug!("take_until_cancelled: token cancelled, dropping upstream");
            this.stream.set(None);
            return Poll::Ready(None);
        }

        let Some(stream) = this.stream.as_mut().as_pin_mut() else {
            return Poll::Ready(None);
        };

        match stream.poll_next(cx) {
            Poll::Ready(Some(StreamItem::Value(value))) => {
                Poll::Ready(Some(StreamItem::Value(value)))
            }
            Poll::Ready(Some(StreamItem::Error(err))) => {
                this.stream.set(None);
                Poll::Ready(Some(StreamItem::Error(err)))
            }
            Poll::Ready(None) => {
                this.stream.set(None);
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<S, T> FusedStream for TakeUntilCancelled<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    fn is_terminated(&self) -> bool {
        self.stream.is_none()
    }
}
