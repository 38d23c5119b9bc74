// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing debounce: emit the latest value once the source has been quiet
//! for the configured duration.
//!
//! - When a value arrives it replaces any pending value and the timer is
//!   restarted.
//! - When the timer expires, the pending value is emitted.
//! - When the source ends, a pending value is emitted immediately, then the
//!   sequence ends.
//! - When the source fails, the pending value and its timer are discarded,
//!   the error is emitted and the sequence ends.

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

/// Extension trait providing the `debounce` operator.
pub trait DebounceExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Debounces the sequence by `duration`, measured with `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`EddyError::InvalidConfiguration`](eddy_core::EddyError::InvalidConfiguration)
    /// if `duration` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy_stream_time::{DebounceExt, TokioClock};
    /// use eddy_test_utils::test_channel;
    /// use futures::StreamExt;
    /// use std::time::Duration;
    /// use tokio::time::Instant;
    ///
    /// # #[tokio::main(flavor = "current_thread", start_paused = true)]
    /// # async fn main() -> anyhow::Result<()> {
    /// let (tx, source) = test_channel();
    /// let mut debounced = source.debounce_with_clock(Duration::from_millis(100), TokioClock)?;
    ///
    /// tx.send("draft")?;
    /// tx.send("final")?;
    ///
    /// let start = Instant::now();
    /// assert_eq!(debounced.next().await.unwrap().unwrap(), "final");
    /// assert_eq!(start.elapsed(), Duration::from_millis(100));
    /// # Ok(())
    /// # }
    /// ```
    fn debounce_with_clock<C>(self, duration: Duration, clock: C) -> Result<Debounce<Self, T, C>>
    where
        C: Clock,
    {
        validate_duration("debounce", duration)?;
        Ok(Debounce {
            stream: Some(self),
            clock,
            duration,
            pending: None,
            sleep: None,
        })
    }

    /// Debounces the sequence by `duration` using [`TokioClock`].
    ///
    /// # Errors
    ///
    /// Returns [`EddyError::InvalidConfiguration`](eddy_core::EddyError::InvalidConfiguration)
    /// if `duration` is zero.
    #[cfg(feature = "runtime-tokio")]
    fn debounce(self, duration: Duration) -> Result<Debounce<Self, T, TokioClock>> {
        self.debounce_with_clock(duration, TokioClock)
    }
}

impl<S, T> DebounceExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`DebounceExt::debounce_with_clock`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Debounce<S, T, C>
where
    C: Clock,
{
    #[pin]
    stream: Option<S>,
    clock: C,
    duration: Duration,
    pending: Option<T>,
    sleep: Option<Pin<Box<C::Sleep>>>,
}

impl<S, T, C> Stream for Debounce<S, T, C>
where
    S: Stream<Item = StreamItem<T>>,
    C: Clock,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(sleep) = this.sleep.as_mut() {
                if sleep.as_mut().poll(cx).is_ready() {
                    *this.sleep = None;
                    if let Some(value) = this.pending.take() {
                        return Poll::Ready(Some(StreamItem::Value(value)));
                    }
                }
            }

            let Some(stream) = this.stream.as_mut().as_pin_mut() else {
                // Source finished: flush once, then end
                return Poll::Ready(this.pending.take().map(StreamItem::Value));
            };

            match stream.poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    if this.pending.replace(value).is_some() {
                        trace!("debounce: pending value superseded");
                    }
                    *this.sleep = Some(Box::pin(this.clock.sleep_future(*this.duration)));
                }
                Poll::Ready(Some(StreamItem::Error(err))) => {
                    debug!("debounce: upstream failed, discarding pending value: {}", err);
                    this.stream.set(None);
                    *this.sleep = None;
                    *this.pending = None;
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
                Poll::Ready(None) => {
                    debug!("debounce: source ended");
                    this.stream.set(None);
                    *this.sleep = None;
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl<S, T, C> FusedStream for Debounce<S, T, C>
where
    S: Stream<Item = StreamItem<T>>,
    C: Clock,
{
    fn is_terminated(&self) -> bool {
        self.stream.is_none() && self.pending.is_none()
    }
}

impl<S, T, C> Debug for Debounce<S, T, C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounce")
            .field("duration", &self.duration)
            .field("has_pending", &self.pending.is_some())
            .field("terminated", &self.stream.is_none())
            .finish()
    }
}
