// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combinators over eddy asynchronous sequences.
//!
//! Every operator consumes a `Stream<Item = StreamItem<T>>` and produces
//! another one, so they compose freely with each other and with the
//! time-based operators of `eddy-stream-time`.
//!
//! # Operators
//!
//! ## Sources
//!
//! - **[`from_iter`]**: wraps an in-memory collection as a sequence
//! - **[`try_from_iter`]**: wraps an iterator of `Result`s, surfacing the first `Err`
//!
//! ## Combination
//!
//! - **[`zip_with`](ZipWithExt::zip_with)**: pairs two sequences positionally
//!
//! ## Filtering and batching
//!
//! - **[`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed)**: drops consecutive duplicates
//! - **[`chunk_by_count`](ChunkByCountExt::chunk_by_count)**: groups values into fixed-size batches
//!
//! ## Lifecycle
//!
//! - **[`fuse_on_error`](FuseOnErrorExt::fuse_on_error)**: ends a source after its first error
//! - **[`take_until_cancelled`](TakeUntilCancelledExt::take_until_cancelled)**: ends a sequence when a token is cancelled
//!
//! # Termination
//!
//! All operators stop after the first error or end marker: the error (if
//! any) is delivered once, and every later pull returns `None`. Upstream
//! sequences are dropped as soon as an operator terminates, which also
//! cancels any request still in flight.
//!
//! # Example
//!
//! ```
//! use eddy_stream::prelude::*;
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> eddy_core::Result<()> {
//! let batches: Vec<Vec<i32>> = from_iter([1, 1, 2, 3, 3, 4, 5])
//!     .distinct_until_changed()
//!     .chunk_by_count(2)?
//!     .map(|item| item.unwrap())
//!     .collect()
//!     .await;
//!
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod chunk_by_count;
pub mod distinct_until_changed;
pub mod from_iter;
pub mod fuse_on_error;
pub mod prelude;
pub mod take_until_cancelled;
pub mod zip_with;

pub use self::chunk_by_count::ChunkByCountExt;
pub use self::distinct_until_changed::DistinctUntilChangedExt;
pub use self::from_iter::{from_iter, try_from_iter, FromIter, TryFromIter};
pub use self::fuse_on_error::{FuseOnError, FuseOnErrorExt};
pub use self::take_until_cancelled::{TakeUntilCancelled, TakeUntilCancelledExt};
pub use self::zip_with::{ZipWith, ZipWithExt};
