// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation through composed pipelines.

use eddy::prelude::*;
use eddy::IntoEddyError;
use eddy_test_utils::{
    assert_stream_ended, scheduled_stream, test_channel_with_errors, unwrap_stream,
};
use futures::StreamExt;
use std::num::ParseIntError;
use std::time::Duration;

#[tokio::test]
async fn test_parse_error_ends_pipeline() -> anyhow::Result<()> {
    // Arrange
    let lines = ["1", "1", "2", "three", "4"];
    let parsed = try_from_iter(lines.iter().map(|line| line.parse::<i32>()));

    // Act
    let items: Vec<StreamItem<Vec<i32>>> = parsed
        .distinct_until_changed()
        .chunk_by_count(2)?
        .collect()
        .await;

    // Assert: [1, 2] is complete before the failure, nothing after it
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], StreamItem::Value(vec![1, 2]));

    let err = items[1].clone().err().expect("second item must be the error");
    assert!(err.is_upstream_failure());
    assert!(err.to_string().contains("invalid digit"));

    Ok(())
}

#[tokio::test]
async fn test_error_in_zip_side_reaches_consumer_through_chunk() -> anyhow::Result<()> {
    // Arrange
    let (tx, right) = test_channel_with_errors::<char>();
    let mut pipeline = from_iter(1..=10).zip_with(right).chunk_by_count(2)?;

    // Act
    tx.send(StreamItem::Value('a'))?;
    tx.send(StreamItem::Error(EddyError::upstream("right side gone")))?;

    // Assert: the partial chunk [(1, 'a')] is discarded
    let err = unwrap_stream(&mut pipeline, 100).await.unwrap_err();
    assert!(err.to_string().contains("right side gone"));
    assert_stream_ended(&mut pipeline, 100).await;

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_error_before_debounce_deadline() -> anyhow::Result<()> {
    // Arrange
    let source = scheduled_stream(
        vec![
            (0, StreamItem::Value(1)),
            (10, StreamItem::Error(EddyError::upstream("timeout"))),
        ],
        None,
    );

    // Act
    let items: Vec<_> = source
        .debounce(Duration::from_millis(100))?
        .distinct_until_changed()
        .collect()
        .await;

    // Assert
    assert_eq!(items.len(), 1);
    assert!(items[0].is_error());

    Ok(())
}

#[tokio::test]
async fn test_invalid_configuration_is_reported_before_streaming() {
    let chunk = from_iter([1, 2, 3]).chunk_by_count(0);
    let throttle = from_iter([1, 2, 3]).throttle(Duration::ZERO);

    assert!(matches!(chunk, Err(EddyError::InvalidConfiguration { .. })));
    assert!(matches!(throttle, Err(EddyError::InvalidConfiguration { .. })));
}

#[test]
fn test_parse_int_error_converts_to_upstream_failure() {
    let parse_error: ParseIntError = "x".parse::<i32>().unwrap_err();

    let err = parse_error.into_eddy_error();

    assert!(err.is_upstream_failure());
}
