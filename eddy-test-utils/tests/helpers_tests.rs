// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eddy_core::{EddyError, StreamItem};
use eddy_test_utils::test_data::{row_alice, row_bob};
use eddy_test_utils::{
    assert_no_element_emitted, assert_stream_ended, scheduled_stream, test_channel,
    test_channel_with_errors, unwrap_stream, DropWatch, ErrorInjectingStream,
};
use futures::{stream, StreamExt};
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test]
async fn test_channel_round_trip() -> anyhow::Result<()> {
    // Arrange
    let (tx, mut stream) = test_channel();

    // Act
    tx.send(row_alice())?;
    drop(tx);

    // Assert
    assert_eq!(unwrap_stream(&mut stream, 100).await?, row_alice());
    assert_stream_ended(&mut stream, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_channel_with_errors_forwards_errors() -> anyhow::Result<()> {
    // Arrange
    let (tx, mut stream) = test_channel_with_errors::<i32>();

    // Act
    tx.send(StreamItem::Error(EddyError::upstream("boom")))?;

    // Assert
    let err = unwrap_stream(&mut stream, 100).await.unwrap_err();
    assert!(err.is_upstream_failure());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_assert_no_element_emitted_on_idle_channel() {
    let (_tx, mut stream) = test_channel::<i32>();
    assert_no_element_emitted(&mut stream, 50).await;
}

#[tokio::test(start_paused = true)]
async fn test_scheduled_stream_follows_offsets() {
    // Arrange
    let start = Instant::now();
    let mut source = scheduled_stream(
        vec![(100, StreamItem::Value(row_alice())), (250, StreamItem::Value(row_bob()))],
        Some(1000),
    );

    // Act & Assert
    assert_eq!(source.next().await.unwrap().unwrap(), row_alice());
    assert_eq!(start.elapsed(), Duration::from_millis(100));

    assert_eq!(source.next().await.unwrap().unwrap(), row_bob());
    assert_eq!(start.elapsed(), Duration::from_millis(250));

    assert!(source.next().await.is_none());
    assert_eq!(start.elapsed(), Duration::from_millis(1000));
}

#[test]
fn test_drop_watch_counts_polls() {
    futures::executor::block_on(async {
        // Arrange
        let (mut watch, flag) = DropWatch::new(stream::iter(vec![1, 2]));

        // Act
        let first = watch.next().await;

        // Assert
        assert_eq!(first, Some(1));
        assert_eq!(flag.polls(), 1);
        assert!(!flag.is_dropped());

        drop(watch);
        assert!(flag.is_dropped());
    });
}

#[test]
fn test_error_injection_keeps_producing_after_error() {
    futures::executor::block_on(async {
        let items: Vec<_> = ErrorInjectingStream::new(stream::iter(vec![1, 2]), 0)
            .collect()
            .await;

        assert_eq!(items.len(), 3);
        assert!(items[0].is_error());
        assert_eq!(items[1], StreamItem::Value(1));
        assert_eq!(items[2], StreamItem::Value(2));
    });
}
