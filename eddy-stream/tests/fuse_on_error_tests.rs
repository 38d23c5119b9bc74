// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eddy_core::{EddyError, StreamItem};
use eddy_stream::FuseOnErrorExt;
use eddy_test_utils::{assert_stream_ended, unwrap_stream, DropWatch, ErrorInjectingStream};
use futures::stream::{self, FusedStream};

#[tokio::test]
async fn test_fuse_on_error_passes_values_through() -> anyhow::Result<()> {
    let mut fused = stream::iter(vec![StreamItem::Value(1), StreamItem::Value(2)]).fuse_on_error();

    assert_eq!(unwrap_stream(&mut fused, 100).await?, 1);
    assert_eq!(unwrap_stream(&mut fused, 100).await?, 2);
    assert_stream_ended(&mut fused, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_fuse_on_error_ends_after_first_error() -> anyhow::Result<()> {
    // Arrange
    let source = ErrorInjectingStream::new(stream::iter(vec![1, 2, 3]), 1);
    let (source, flag) = DropWatch::new(source);
    let mut fused = source.fuse_on_error();

    // Act & Assert
    assert_eq!(unwrap_stream(&mut fused, 100).await?, 1);
    assert!(unwrap_stream(&mut fused, 100).await.is_err());
    assert!(flag.is_dropped());
    assert!(fused.is_terminated());
    assert_stream_ended(&mut fused, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_fuse_on_error_keeps_only_first_error() -> anyhow::Result<()> {
    let source = stream::iter(vec![
        StreamItem::<i32>::Error(EddyError::upstream("first")),
        StreamItem::Error(EddyError::upstream("second")),
    ]);
    let mut fused = source.fuse_on_error();

    let err = unwrap_stream(&mut fused, 100).await.unwrap_err();
    assert!(err.to_string().contains("first"));
    assert_stream_ended(&mut fused, 100).await;

    Ok(())
}
