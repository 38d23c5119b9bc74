// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading-edge throttle.
//!
//! The first value passes immediately and opens a window of the configured
//! duration. Values that arrive while the window is open are dropped. The
//! first value at or after the end of the window passes and opens the next
//! one.
//!
//! The operator only reads [`Clock::now`]; it never starts a timer, so it
//! adds no suspension point of its own.
//!
//! If the clock is observed going backwards, the value that noticed it is
//! dropped and the current window restarts at the new `now`. A clock that
//! steps back therefore suppresses values for at most one more window.

use crate::validate_duration;
use core::fmt::{self, Debug};
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use core::time::Duration;
use eddy_core::logging::{debug, trace, warn};
use eddy_core::{Result, StreamItem};
use eddy_runtime::clock::Clock;
#[cfg(feature = "runtime-tokio")]
use eddy_runtime::impls::tokio::TokioClock;
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;

/// Extension trait providing the `throttle` operator.
pub trait ThrottleExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emits at most one value per `duration`, measured with `clock`.
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
    /// use eddy_stream_time::{ThrottleExt, TokioClock};
    /// use eddy_test_utils::scheduled_stream;
    /// use futures::StreamExt;
    /// use std::time::Duration;
    ///
    /// # #[tokio::main(flavor = "current_thread", start_paused = true)]
    /// # async fn main() -> eddy_core::Result<()> {
    /// let clicks = scheduled_stream(
    ///     vec![
    ///         (0, StreamItem::Value("click")),
    ///         (10, StreamItem::Value("double click")),
    ///         (400, StreamItem::Value("later click")),
    ///     ],
    ///     None,
    /// );
    ///
    /// let accepted: Vec<_> = clicks
    ///     .throttle_with_clock(Duration::from_millis(250), TokioClock)?
    ///     .map(|item| item.unwrap())
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(accepted, vec!["click", "later click"]);
    /// # Ok(())
    /// # }
    /// ```
    fn throttle_with_clock<C>(self, duration: Duration, clock: C) -> Result<Throttle<Self, C>>
    where
        C: Clock,
    {
        validate_duration("throttle", duration)?;
        Ok(Throttle {
            stream: Some(self),
            clock,
            duration,
            window_start: None,
        })
    }

    /// Throttles the sequence by `duration` using [`TokioClock`].
    ///
    /// # Errors
    ///
    /// Returns [`EddyError::InvalidConfiguration`](eddy_core::EddyError::InvalidConfiguration)
    /// if `duration` is zero.
    #[cfg(feature = "runtime-tokio")]
    fn throttle(self, duration: Duration) -> Result<Throttle<Self, TokioClock>> {
        self.throttle_with_clock(duration, TokioClock)
    }
}

impl<S, T> ThrottleExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`ThrottleExt::throttle_with_clock`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Throttle<S, C>
where
    C: Clock,
{
    #[pin]
    stream: Option<S>,
    clock: C,
    duration: Duration,
    window_start: Option<C::Instant>,
}

impl<S, T, C> Stream for Throttle<S, C>
where
    S: Stream<Item = StreamItem<T>>,
    C: Clock,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            let Some(stream) = this.stream.as_mut().as_pin_mut() else {
                return Poll::Ready(None);
            };

            match ready!(stream.poll_next(cx)) {
                Some(StreamItem::Value(value)) => {
                    let now = this.clock.now();
                    match *this.window_start {
                        Some(start) if now < start => {
                            warn!(
                                "throttle: clock went backwards ({:?} < {:?}), restarting window",
                                now, start
                            );
                            *this.window_start = Some(now);
                        }
                        Some(start) if now - start < *this.duration => {
                            trace!("throttle: value dropped inside window");
                        }
                        _ => {
                            *this.window_start = Some(now);
                            return Poll::Ready(Some(StreamItem::Value(value)));
                        }
                    }
                }
                Some(StreamItem::Error(err)) => {
                    debug!("throttle: upstream failed: {}", err);
                    this.stream.set(None);
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
                None => {
                    debug!("throttle: source ended");
                    this.stream.set(None);
                    return Poll::Ready(None);
                }
            }
        }
    }
}

impl<S, T, C> FusedStream for Throttle<S, C>
where
    S: Stream<Item = StreamItem<T>>,
    C: Clock,
{
    fn is_terminated(&self) -> bool {
        self.stream.is_none()
    }
}

impl<S, C> Debug for Throttle<S, C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttle")
            .field("duration", &self.duration)
            .field("window_start", &self.window_start)
            .field("terminated", &self.stream.is_none())
            .finish()
    }
}
