// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Distinct-until-changed operator that filters consecutive duplicates.

use crate::fuse_on_error::FuseOnErrorExt;
use eddy_core::logging::trace;
use eddy_core::StreamItem;
use futures::future::ready;
use futures::stream::{Stream, StreamExt};

/// Extension trait providing the `distinct_until_changed` family of operators.
pub trait DistinctUntilChangedExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone,
{
    /// Emits values only when they differ from the previous emitted value.
    ///
    /// # Behavior
    ///
    /// - First value is always emitted (no previous value to compare)
    /// - Subsequent values are compared to the last emitted value
    /// - Only values where `current != previous` are emitted
    /// - An error is propagated immediately and ends the sequence
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eddy_stream::{from_iter, DistinctUntilChangedExt};
    /// use futures::StreamExt;
    ///
    /// # futures::executor::block_on(async {
    /// let values: Vec<i32> = from_iter([1, 1, 2, 2, 2, 3, 2])
    ///     .distinct_until_changed()
    ///     .map(|item| item.unwrap())
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(values, vec![1, 2, 3, 2]);
    /// # });
    /// ```
    fn distinct_until_changed(self) -> impl Stream<Item = StreamItem<T>>
    where
        T: PartialEq;

    /// Like [`distinct_until_changed`](Self::distinct_until_changed) with a
    /// custom equality.
    ///
    /// `same(previous, current)` returns `true` when `current` should be
    /// treated as a duplicate of the last emitted value.
    ///
    /// # Examples
    ///
    /// Case-insensitive deduplication:
    ///
    /// ```rust
    /// use eddy_stream::{from_iter, DistinctUntilChangedExt};
    /// use futures::StreamExt;
    ///
    /// # futures::executor::block_on(async {
    /// let words: Vec<&str> = from_iter(["Hello", "HELLO", "world", "World", "hello"])
    ///     .distinct_until_changed_by(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b))
    ///     .map(|item| item.unwrap())
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(words, vec!["Hello", "world", "hello"]);
    /// # });
    /// ```
    fn distinct_until_changed_by<F>(self, same: F) -> impl Stream<Item = StreamItem<T>>
    where
        F: FnMut(&T, &T) -> bool;
}

impl<S, T> DistinctUntilChangedExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone,
{
    fn distinct_until_changed(self) -> impl Stream<Item = StreamItem<T>>
    where
        T: PartialEq,
    {
        self.distinct_until_changed_by(|a: &T, b: &T| a == b)
    }

    fn distinct_until_changed_by<F>(self, same: F) -> impl Stream<Item = StreamItem<T>>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut same = same;
        let mut last: Option<T> = None;

        let stream = self.filter_map(move |item| {
            ready(match item {
                StreamItem::Value(value) => {
                    let duplicate = match last.as_ref() {
                        None => false,
                        Some(prev) => same(prev, &value),
                    };

                    if duplicate {
                        trace!("distinct_until_changed: dropped duplicate");
                        None
                    } else {
                        last = Some(value.clone());
                        Some(StreamItem::Value(value))
                    }
                }
                StreamItem::Error(e) => Some(StreamItem::Error(e)),
            })
        });

        Box::pin(stream.fuse_on_error())
    }
}
