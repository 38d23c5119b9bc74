// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by every eddy crate.
//!
//! An eddy sequence is any `futures::Stream` whose items are [`StreamItem<T>`]:
//!
//! - `Some(StreamItem::Value(v))` - the next value
//! - `Some(StreamItem::Error(e))` - a failure, after which the sequence is over
//! - `None` - the end marker
//!
//! Errors and the end marker are both terminal, but they are never confused:
//! the end marker is a normal outcome, an error short-circuits.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod error;
pub mod logging;
pub mod stream_item;

pub use self::cancellation_token::{CancellationToken, Cancelled, WaitForCancellation};
pub use self::error::{EddyError, IntoEddyError, Result};
pub use self::stream_item::StreamItem;
