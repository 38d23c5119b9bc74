// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle that keeps the latest value of each window.
//!
//! The first value passes immediately and opens a window. Values arriving
//! inside the window replace one another as the pending value; the window
//! deadline does not move. When the window closes the pending value, if any,
//! is emitted and opens the next window. A window that closes with nothing
//! pending returns the operator to idle, so the next value passes
//! immediately again.
//!
//! When the source ends, a pending value is emitted right away. When the
//! source fails, the pending value is discarded and the error ends the
//! sequence.

use crate::validate_duration;
use core::fmt::{self, Debug};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use eddy_core::logging::{debug, trace};
use eddy_core::{Result, StreamItem};
use eddy_runtime::clock::Clock;
#[cfg(feature = "runtime-tokio")]
use eddy_runtime::impls::tokio::TokioClock;
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;

/// Extension trait providing the `throttle_latest` operator.
pub trait ThrottleLatestExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emits at most one value per `duration` and delivers the most recent
    /// suppressed value when the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`EddyError::InvalidConfiguration`](eddy_core::EddyError::InvalidConfiguration)
    /// if `duration` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy_core::StreamItem;
    /// use eddy_stream_time::{ThrottleLatestExt, TokioClock};
    /// use eddy_test_utils::scheduled_stream;
    /// use futures::StreamExt;
    /// use std::time::Duration;
    ///
    /// # #[tokio::main(flavor = "current_thread", start_paused = true)]
    /// # async fn main() -> eddy_core::Result<()> {
    /// let positions = scheduled_stream(
    ///     vec![
    ///         (0, StreamItem::Value(0)),
    ///         (20, StreamItem::Value(20)),
    ///         (40, StreamItem::Value(40)),
    ///     ],
    ///     Some(500),
    /// );
    ///
    /// let rendered: Vec<i32> = positions
    ///     .throttle_latest_with_clock(Duration::from_millis(100), TokioClock)?
    ///     .map(|item| item.unwrap())
    ///     .collect()
    ///     .await;
    ///
    /// // 20 was superseded by 40 before the window closed
    /// assert_eq!(rendered, vec![0, 40]);
    /// # Ok(())
    /// # }
    /// ```
    fn throttle_latest_with_clock<C>(
        self,
        duration: Duration,
        clock: C,
    ) -> Result<ThrottleLatest<Self, T, C>>
    where
        C: Clock,
    {
        validate_duration("throttle_latest", duration)?;
        Ok(ThrottleLatest {
            stream: Some(self),
            clock,
            duration,
            pending: None,
            window: None,
        })
    }

    /// Throttles the sequence by `duration` using [`TokioClock`], keeping the
    /// latest value of each window.
    ///
    /// # Errors
    ///
    /// Returns [`EddyError::InvalidConfiguration`](eddy_core::EddyError::InvalidConfiguration)
    /// if `duration` is zero.
    #[cfg(feature = "runtime-tokio")]
    fn throttle_latest(self, duration: Duration) -> Result<ThrottleLatest<Self, T, TokioClock>> {
        self.throttle_latest_with_clock(duration, TokioClock)
    }
}

impl<S, T> ThrottleLatestExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`ThrottleLatestExt::throttle_latest_with_clock`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct ThrottleLatest<S, T, C>
where
    C: Clock,
{
    #[pin]
    stream: Option<S>,
    clock: C,
    duration: Duration,
    pending: Option<T>,
    // Open window; fires at its deadline
    window: Option<Pin<Box<C::Sleep>>>,
}

impl<S, T, C> Stream for ThrottleLatest<S, T, C>
where
    S: Stream<Item = StreamItem<T>>,
    C: Clock,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(window) = this.window.as_mut() {
                if window.as_mut().poll(cx).is_ready() {
                    match this.pending.take() {
                        Some(value) => {
                            *this.window = Some(Box::pin(this.clock.sleep_future(*this.duration)));
                            return Poll::Ready(Some(StreamItem::Value(value)));
                        }
                        None => *this.window = None,
                    }
                }
            }

            let Some(stream) = this.stream.as_mut().as_pin_mut() else {
                return Poll::Ready(this.pending.take().map(StreamItem::Value));
            };

            match stream.poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    if this.window.is_none() {
                        *this.window = Some(Box::pin(this.clock.sleep_future(*this.duration)));
                        return Poll::Ready(Some(StreamItem::Value(value)));
                    }
                    if this.pending.replace(value).is_some() {
                        trace!("throttle_latest: pending value superseded");
                    }
                }
                Poll::Ready(Some(StreamItem::Error(err))) => {
                    debug!("throttle_latest: upstream failed, discarding pending value: {}", err);
                    this.stream.set(None);
                    *this.window = None;
                    *this.pending = None;
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
                Poll::Ready(None) => {
                    debug!("throttle_latest: source ended");
                    this.stream.set(None);
                    *this.window = None;
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl<S, T, C> FusedStream for ThrottleLatest<S, T, C>
where
    S: Stream<Item = StreamItem<T>>,
    C: Clock,
{
    fn is_terminated(&self) -> bool {
        self.stream.is_none() && self.pending.is_none()
    }
}

impl<S, T, C> Debug for ThrottleLatest<S, T, C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThrottleLatest")
            .field("duration", &self.duration)
            .field("window_open", &self.window.is_some())
            .field("has_pending", &self.pending.is_some())
            .field("terminated", &self.stream.is_none())
            .finish()
    }
}
