// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eddy_core::{EddyError, StreamItem};
use eddy_stream::{from_iter, ZipWithExt};
use eddy_test_utils::{
    assert_stream_ended, test_channel, test_channel_with_errors, unwrap_stream, DropWatch,
    ErrorInjectingStream,
};
use futures::stream;

#[tokio::test]
async fn test_zip_with_right_error_on_second_element() -> anyhow::Result<()> {
    // Arrange
    let right = stream::iter(vec![
        StreamItem::Value("a"),
        StreamItem::Error(EddyError::upstream("second element failed")),
        StreamItem::Value("c"),
    ]);
    let mut zipped = from_iter([1, 2, 3]).zip_with(right);

    // Act & Assert
    assert_eq!(unwrap_stream(&mut zipped, 100).await?, (1, "a"));

    let err = unwrap_stream(&mut zipped, 100).await.unwrap_err();
    assert!(err.to_string().contains("second element failed"));

    // Never a third pair
    assert_stream_ended(&mut zipped, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_zip_with_left_error_does_not_wait_for_right() -> anyhow::Result<()> {
    // Arrange
    let (tx_left, left) = test_channel_with_errors::<i32>();
    let (_tx_right, right) = test_channel::<i32>();
    let (right, right_flag) = DropWatch::new(right);
    let mut zipped = left.zip_with(right);

    // Act: right never answers
    tx_left.send(StreamItem::Error(EddyError::upstream("left failed")))?;

    // Assert
    let err = unwrap_stream(&mut zipped, 100).await.unwrap_err();
    assert!(err.is_upstream_failure());
    assert!(right_flag.is_dropped());
    assert_stream_ended(&mut zipped, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_zip_with_error_discards_parked_value() -> anyhow::Result<()> {
    // Arrange
    let (tx_left, left) = test_channel::<i32>();
    let (tx_right, right) = test_channel_with_errors::<i32>();
    let mut zipped = left.zip_with(right);

    // Act
    tx_left.send(1)?;
    tx_right.send(StreamItem::Error(EddyError::upstream("right failed")))?;

    // Assert: the parked 1 is never paired
    assert!(unwrap_stream(&mut zipped, 100).await.is_err());
    assert_stream_ended(&mut zipped, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_zip_with_stops_misbehaving_source_after_error() -> anyhow::Result<()> {
    // Arrange: the left source keeps producing after its error
    let left = ErrorInjectingStream::new(stream::iter(vec![10, 20, 30]), 1);
    let mut zipped = left.zip_with(from_iter([1, 2, 3]));

    // Act & Assert
    assert_eq!(unwrap_stream(&mut zipped, 100).await?, (10, 1));
    assert!(unwrap_stream(&mut zipped, 100).await.is_err());
    assert_stream_ended(&mut zipped, 100).await;

    Ok(())
}
