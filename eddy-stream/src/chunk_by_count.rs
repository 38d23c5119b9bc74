// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Chunk-by-count operator that batches values into fixed-size groups.
//!
//! # Overview
//!
//! Values are collected into a buffer. Whenever the buffer holds `n` values it
//! is emitted as one `Vec<T>` (arrival order) and a fresh buffer is started.
//! When the source ends, a non-empty partial buffer is emitted as the final
//! chunk.
//!
//! # Error Handling
//!
//! When an error occurs, the current partial chunk is discarded and the error
//! is propagated immediately. Nothing follows the error, so an incomplete
//! batch is never emitted after a failure.

use crate::fuse_on_error::FuseOnErrorExt;
use eddy_core::logging::debug;
use eddy_core::{EddyError, Result, StreamItem};
use futures::future::ready;
use futures::stream::{self, Stream, StreamExt};
use parking_lot::Mutex;
use std::mem::take;
use std::sync::Arc;

/// Extension trait providing the [`chunk_by_count`](Self::chunk_by_count) operator.
pub trait ChunkByCountExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Groups consecutive values into chunks of `n`.
    ///
    /// # Errors
    ///
    /// Returns [`EddyError::InvalidConfiguration`] if `n` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eddy_stream::{from_iter, ChunkByCountExt};
    /// use futures::StreamExt;
    ///
    /// # futures::executor::block_on(async {
    /// let chunks: Vec<Vec<i32>> = from_iter([1, 2, 3, 4, 5])
    ///     .chunk_by_count(3)
    ///     .unwrap()
    ///     .map(|item| item.unwrap())
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5]]);
    /// # });
    /// ```
    fn chunk_by_count(self, n: usize) -> Result<impl Stream<Item = StreamItem<Vec<T>>>>;
}

impl<S, T> ChunkByCountExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn chunk_by_count(self, n: usize) -> Result<impl Stream<Item = StreamItem<Vec<T>>>> {
        if n == 0 {
            return Err(EddyError::invalid_configuration(
                "chunk_by_count: chunk size must be at least 1",
            ));
        }

        let buffer = Arc::new(Mutex::new(Vec::with_capacity(n)));

        let state = Arc::clone(&buffer);
        let main_stream = self.filter_map(move |item| {
            ready(match item {
                StreamItem::Value(value) => {
                    let mut buffer = state.lock();
                    buffer.push(value);

                    if buffer.len() >= n {
                        let chunk = take(&mut *buffer);
                        buffer.reserve(n);
                        Some(StreamItem::Value(chunk))
                    } else {
                        None
                    }
                }
                StreamItem::Error(e) => {
                    let mut buffer = state.lock();
                    if !buffer.is_empty() {
                        debug!(
                            "chunk_by_count: discarding {} buffered values after error",
                            buffer.len()
                        );
                    }
                    buffer.clear();
                    Some(StreamItem::Error(e))
                }
            })
        });

        // Emits the partial chunk once the source has ended
        let flush_stream = stream::once(async move {
            let mut buffer = buffer.lock();
            if buffer.is_empty() {
                None
            } else {
                Some(StreamItem::Value(take(&mut *buffer)))
            }
        })
        .filter_map(ready);

        Ok(Box::pin(main_stream.chain(flush_stream).fuse_on_error()))
    }
}
