// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Everything needed to build and chain eddy sequences.

pub use crate::chunk_by_count::ChunkByCountExt;
pub use crate::distinct_until_changed::DistinctUntilChangedExt;
pub use crate::from_iter::{from_iter, try_from_iter};
pub use crate::fuse_on_error::FuseOnErrorExt;
pub use crate::take_until_cancelled::TakeUntilCancelledExt;
pub use crate::zip_with::ZipWithExt;

pub use eddy_core::{CancellationToken, EddyError, StreamItem};
