// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Positional pairing of two sequences.
//!
//! # Behavior
//!
//! On every pull both sides are asked for their next element, so the two
//! requests are in flight at the same time. An element that arrives early is
//! parked in a one-element slot until its partner shows up; the side whose
//! slot is full is not polled again, which keeps pair `i` equal to
//! `(left_i, right_i)` no matter which side is faster.
//!
//! - Either side ends: the zipped sequence ends. Any element parked on the
//!   other side is discarded.
//! - Either side errors: the error is emitted immediately, without waiting for
//!   the other side, and the zipped sequence ends.
//!
//! In both cases the two upstream sequences are dropped right away, which
//! cancels the request still pending on the other side.

use eddy_core::logging::debug;
use eddy_core::StreamItem;
use futures::stream::{FusedStream, Stream};
use futures::task::{Context, Poll};
use pin_project::pin_project;
use std::pin::Pin;

/// Extension trait providing the [`zip_with`](Self::zip_with) operator.
pub trait ZipWithExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Pairs this sequence with `other`, element by element.
    ///
    /// The shorter sequence determines the length of the result.
    ///
    /// # Example
    ///
    /// ```
    /// use eddy_stream::{from_iter, ZipWithExt};
    /// use futures::StreamExt;
    ///
    /// # futures::executor::block_on(async {
    /// let pairs: Vec<(i32, &str)> = from_iter([1, 2, 3])
    ///     .zip_with(from_iter(["a", "b"]))
    ///     .map(|item| item.unwrap())
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
    /// # });
    /// ```
    fn zip_with<U, S2>(self, other: S2) -> ZipWith<Self, S2, T, U>
    where
        S2: Stream<Item = StreamItem<U>>,
    {
        ZipWith {
            left: Some(self),
            right: Some(other),
            left_value: None,
            right_value: None,
        }
    }
}

impl<S, T> ZipWithExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`ZipWithExt::zip_with`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct ZipWith<A, B, T, U> {
    #[pin]
    left: Option<A>,
    #[pin]
    right: Option<B>,
    left_value: Option<T>,
    right_value: Option<U>,
}

enum Side {
    Left,
    Right,
}

impl<A, B, T, U> ZipWith<A, B, T, U> {
    fn terminate(self: Pin<&mut Self>) {
        let mut this = self.project();
        this.left.set(None);
        this.right.set(None);
        *this.left_value = None;
        *this.right_value = None;
    }
}

impl<A, B, T, U> Stream for ZipWith<A, B, T, U>
where
    A: Stream<Item = StreamItem<T>>,
    B: Stream<Item = StreamItem<U>>,
{
    type Item = StreamItem<(T, U)>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.as_mut().project();

        let (Some(left), Some(right)) = (
            this.left.as_mut().as_pin_mut(),
            this.right.as_mut().as_pin_mut(),
        ) else {
            return Poll::Ready(None);
        };

        let mut finished = None;

        if this.left_value.is_none() {
            match left.poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => *this.left_value = Some(value),
                Poll::Ready(Some(StreamItem::Error(err))) => {
                    debug!("zip_with: left side failed: {}", err);
                    self.as_mut().terminate();
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
                Poll::Ready(None) => finished = Some(Side::Left),
                Poll::Pending => {}
            }
        }

        if finished.is_none() && this.right_value.is_none() {
            match right.poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => *this.right_value = Some(value),
                Poll::Ready(Some(StreamItem::Error(err))) => {
                    debug!("zip_with: right side failed: {}", err);
                    self.as_mut().terminate();
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
                Poll::Ready(None) => finished = Some(Side::Right),
                Poll::Pending => {}
            }
        }

        if let Some(side) = finished {
            match side {
                Side::Left => debug!("zip_with: left side ended"),
                Side::Right => debug!("zip_with: right side ended"),
            }
            self.as_mut().terminate();
            return Poll::Ready(None);
        }

        match (this.left_value.take(), this.right_value.take()) {
            (Some(l), Some(r)) => Poll::Ready(Some(StreamItem::Value((l, r)))),
            (l, r) => {
                *this.left_value = l;
                *this.right_value = r;
                Poll::Pending
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (Some(left), Some(right)) = (&self.left, &self.right) else {
            return (0, Some(0));
        };
        let left_upper = left
            .size_hint()
            .1
            .map(|n| n + usize::from(self.left_value.is_some()));
        let right_upper = right
            .size_hint()
            .1
            .map(|n| n + usize::from(self.right_value.is_some()));
        let upper = match (left_upper, right_upper) {
            (Some(l), Some(r)) => Some(l.min(r)),
            (Some(n), None) | (None, Some(n)) => Some(n),
            (None, None) => None,
        };
        (0, upper)
    }
}

impl<A, B, T, U> FusedStream for ZipWith<A, B, T, U>
where
    A: Stream<Item = StreamItem<T>>,
    B: Stream<Item = StreamItem<U>>,
{
    fn is_terminated(&self) -> bool {
        self.left.is_none() || self.right.is_none()
    }
}
