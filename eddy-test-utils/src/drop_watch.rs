// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observes when an upstream sequence is released.
//!
//! Cancellation in eddy means dropping: an operator that terminates, or that
//! is itself dropped, must drop its upstreams. Wrapping an upstream in a
//! [`DropWatch`] lets a test check that this actually happened.

use futures::Stream;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Stream wrapper that records when it is dropped and how often it is polled.
pub struct DropWatch<S> {
    inner: Pin<Box<S>>,
    flag: DropFlag,
}

/// Shared view on a [`DropWatch`]'s state.
#[derive(Clone, Debug, Default)]
pub struct DropFlag {
    dropped: Arc<AtomicBool>,
    polls: Arc<AtomicUsize>,
}

impl DropFlag {
    /// `true` once the watched stream has been dropped.
    pub fn is_dropped(&self) -> bool {
        self.dropped.load(Ordering::SeqCst)
    }

    /// Number of times the watched stream has been polled.
    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }
}

impl<S> DropWatch<S> {
    /// Wraps `inner`, returning the watch and a flag to inspect it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy_test_utils::DropWatch;
    /// use futures::stream;
    ///
    /// let (watch, flag) = DropWatch::new(stream::pending::<i32>());
    /// assert!(!flag.is_dropped());
    ///
    /// drop(watch);
    /// assert!(flag.is_dropped());
    /// ```
    pub fn new(inner: S) -> (Self, DropFlag) {
        let flag = DropFlag::default();
        let watch = Self {
            inner: Box::pin(inner),
            flag: flag.clone(),
        };
        (watch, flag)
    }
}

impl<S> Drop for DropWatch<S> {
    fn drop(&mut self) {
        self.flag.dropped.store(true, Ordering::SeqCst);
    }
}

impl<S: Stream> Stream for DropWatch<S> {
    type Item = S::Item;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.flag.polls.fetch_add(1, Ordering::SeqCst);
        self.inner.as_mut().poll_next(cx)
    }
}
