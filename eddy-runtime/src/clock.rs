// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::ops::{Add, Sub};
use core::time::Duration;

/// Supplies "now" and the ability to suspend until a later instant.
///
/// A clock is a cheap, clonable, read-only handle: the same clock may be
/// shared by any number of operators.
pub trait Clock: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send;

    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Creates a future that completes once `duration` has elapsed.
    /// Operators store and poll it from `poll_next`.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    /// Creates a future that completes at `deadline`.
    ///
    /// A deadline in the past completes on first poll.
    fn sleep_until(&self, deadline: Self::Instant) -> Self::Sleep {
        let now = self.now();
        let remaining = if deadline > now {
            deadline - now
        } else {
            Duration::ZERO
        };
        self.sleep_future(remaining)
    }
}
