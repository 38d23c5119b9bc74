// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A [`Clock`] that only moves when the test moves it.
//!
//! Unlike tokio's paused time, a [`ManualClock`] can also be set backwards,
//! which lets tests exercise how operators react to a clock that steps back.

use eddy_runtime::clock::Clock;
use parking_lot::Mutex;
use std::future::Future;
use std::mem::take;
use std::ops::{Add, Sub};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};
use std::time::Duration;

/// Instant of a [`ManualClock`], measured from the clock's creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManualInstant(Duration);

impl ManualInstant {
    /// The instant `ms` milliseconds after the clock's start.
    pub const fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// Time elapsed between the clock's start and this instant.
    pub const fn since_start(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for ManualInstant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

impl Sub for ManualInstant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}

/// Clock driven by hand through [`advance`](Self::advance) and
/// [`set`](Self::set).
///
/// Clones share the same time. Sleeps complete once the clock reaches their
/// deadline; moving the clock wakes every task waiting on one.
///
/// # Example
///
/// ```rust
/// use eddy_runtime::clock::Clock;
/// use eddy_test_utils::{ManualClock, ManualInstant};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(clock.now(), ManualInstant::from_millis(250));
///
/// clock.set(ManualInstant::from_millis(100));
/// assert_eq!(clock.now(), ManualInstant::from_millis(100));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    now: ManualInstant,
    wakers: Vec<Waker>,
}

impl ManualClock {
    /// A clock standing at its start instant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let wakers = {
            let mut state = self.state.lock();
            state.now = state.now + by;
            take(&mut state.wakers)
        };
        wakers.into_iter().for_each(Waker::wake);
    }

    /// Moves the clock to `to`, which may be earlier than the current time.
    pub fn set(&self, to: ManualInstant) {
        let wakers = {
            let mut state = self.state.lock();
            state.now = to;
            take(&mut state.wakers)
        };
        wakers.into_iter().for_each(Waker::wake);
    }
}

impl Clock for ManualClock {
    type Sleep = ManualSleep;

    type Instant = ManualInstant;

    fn now(&self) -> ManualInstant {
        self.state.lock().now
    }

    fn sleep_future(&self, duration: Duration) -> ManualSleep {
        self.sleep_until(self.now() + duration)
    }

    fn sleep_until(&self, deadline: ManualInstant) -> ManualSleep {
        ManualSleep {
            clock: self.clone(),
            deadline,
        }
    }
}

/// Sleep future of a [`ManualClock`].
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct ManualSleep {
    clock: ManualClock,
    deadline: ManualInstant,
}

impl Future for ManualSleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut state = self.clock.state.lock();
        if state.now >= self.deadline {
            return Poll::Ready(());
        }
        if !state.wakers.iter().any(|w| w.will_wake(cx.waker())) {
            state.wakers.push(cx.waker().clone());
        }
        Poll::Pending
    }
}
