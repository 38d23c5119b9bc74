// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy adapters turning in-memory data into sequences.
//!
//! Nothing is read from the iterator until the sequence is polled, and each
//! poll reads exactly one element. Neither adapter ever suspends.

use eddy_core::{EddyError, IntoEddyError, StreamItem};
use futures::stream::{FusedStream, Stream};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Wraps a finite collection as a sequence.
///
/// Yields every element once, in iteration order, then the end marker. This
/// adapter never produces an error.
///
/// # Example
///
/// ```
/// use eddy_stream::from_iter;
/// use futures::StreamExt;
///
/// # futures::executor::block_on(async {
/// let mut seq = from_iter(vec!["a", "b"]);
///
/// assert_eq!(seq.next().await.unwrap().unwrap(), "a");
/// assert_eq!(seq.next().await.unwrap().unwrap(), "b");
/// assert!(seq.next().await.is_none());
/// # });
/// ```
pub fn from_iter<I>(items: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter {
        iter: Some(items.into_iter()),
    }
}

/// Sequence returned by [`from_iter`].
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct FromIter<I> {
    iter: Option<I>,
}

// The iterator is never pinned
impl<I> Unpin for FromIter<I> {}

impl<I: Iterator> Stream for FromIter<I> {
    type Item = StreamItem<I::Item>;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.iter.as_mut().and_then(Iterator::next) {
            Some(value) => Poll::Ready(Some(StreamItem::Value(value))),
            None => {
                self.iter = None;
                Poll::Ready(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<I: Iterator> FusedStream for FromIter<I> {
    fn is_terminated(&self) -> bool {
        self.iter.is_none()
    }
}

/// Wraps an iterator of `Result`s as a sequence.
///
/// `Ok` values are emitted in order. The first `Err` is emitted as an
/// [`EddyError::SourceError`] and ends the sequence; the iterator is not
/// advanced any further.
///
/// # Example
///
/// ```
/// use eddy_stream::try_from_iter;
/// use futures::StreamExt;
/// use std::num::ParseIntError;
///
/// # futures::executor::block_on(async {
/// let lines = ["1", "2", "x", "4"];
/// let mut seq = try_from_iter(lines.iter().map(|l| l.parse::<i32>()));
///
/// assert_eq!(seq.next().await.unwrap().unwrap(), 1);
/// assert_eq!(seq.next().await.unwrap().unwrap(), 2);
/// assert!(seq.next().await.unwrap().is_error());
/// assert!(seq.next().await.is_none());
/// # });
/// ```
pub fn try_from_iter<I, T, E>(items: I) -> TryFromIter<I::IntoIter>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    TryFromIter {
        iter: Some(items.into_iter()),
    }
}

/// Sequence returned by [`try_from_iter`].
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct TryFromIter<I> {
    iter: Option<I>,
}

impl<I> Unpin for TryFromIter<I> {}

impl<I, T, E> Stream for TryFromIter<I>
where
    I: Iterator<Item = Result<T, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Item = StreamItem<T>;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.iter.as_mut().and_then(Iterator::next) {
            Some(Ok(value)) => Poll::Ready(Some(StreamItem::Value(value))),
            Some(Err(err)) => {
                self.iter = None;
                let err: EddyError = err.into_eddy_error();
                Poll::Ready(Some(StreamItem::Error(err)))
            }
            None => {
                self.iter = None;
                Poll::Ready(None)
            }
        }
    }
}

impl<I, T, E> FusedStream for TryFromIter<I>
where
    I: Iterator<Item = Result<T, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    fn is_terminated(&self) -> bool {
        self.iter.is_none()
    }
}
