// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Enforces the sequence termination contract on an arbitrary source.
//!
//! A source written by hand (or adapted from another library) may keep
//! yielding after an error, or may misbehave when polled past its end.
//! `fuse_on_error` guarantees that the first error is delivered, that nothing
//! follows it, and that the source is dropped as soon as it is finished.

use eddy_core::logging::debug;
use eddy_core::StreamItem;
use futures::stream::{FusedStream, Stream};
use futures::task::{Context, Poll};
use pin_project::pin_project;
use std::pin::Pin;

/// Extension trait providing the [`fuse_on_error`](Self::fuse_on_error) operator.
pub trait FuseOnErrorExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Ends the sequence right after the first error.
    ///
    /// # Example
    ///
    /// ```
    /// use eddy_core::{EddyError, StreamItem};
    /// use eddy_stream::FuseOnErrorExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # futures::executor::block_on(async {
    /// let source = stream::iter(vec![
    ///     StreamItem::Value(1),
    ///     StreamItem::Error(EddyError::upstream("lost connection")),
    ///     StreamItem::Value(2),
    /// ]);
    ///
    /// let items: Vec<_> = source.fuse_on_error().collect().await;
    ///
    /// assert_eq!(items.len(), 2);
    /// assert!(items[1].is_error());
    /// # });
    /// ```
    fn fuse_on_error(self) -> FuseOnError<Self> {
        FuseOnError::new(self)
    }
}

impl<S, T> FuseOnErrorExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`FuseOnErrorExt::fuse_on_error`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct FuseOnError<S> {
    #[pin]
    stream: Option<S>,
}

impl<S> FuseOnError<S> {
    pub(crate) fn new(stream: S) -> Self {
        Self {
            stream: Some(stream),
        }
    }
}

impl<S, T> Stream for FuseOnError<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        let Some(stream) = this.stream.as_mut().as_pin_mut() else {
            return Poll::Ready(None);
        };

        match stream.poll_next(cx) {
            Poll::Ready(Some(StreamItem::Value(value))) => {
                Poll::Ready(Some(StreamItem::Value(value)))
            }
            Poll::Ready(Some(StreamItem::Error(err))) => {
                debug!("fuse_on_error: terminating after error: {}", err);
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

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.stream {
            Some(stream) => (0, stream.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

impl<S, T> FusedStream for FuseOnError<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    fn is_terminated(&self) -> bool {
        self.stream.is_none()
    }
}
