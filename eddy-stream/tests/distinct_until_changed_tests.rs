// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eddy_core::{EddyError, StreamItem};
use eddy_stream::{from_iter, DistinctUntilChangedExt};
use eddy_test_utils::test_data::{row_alice, row_bob, Row};
use eddy_test_utils::{
    assert_no_element_emitted, assert_stream_ended, test_channel, test_channel_with_errors,
    unwrap_stream,
};
use futures::{stream, StreamExt};

#[tokio::test]
async fn test_distinct_until_changed_removes_consecutive_duplicates() {
    // Arrange & Act
    let values: Vec<i32> = from_iter([1, 1, 2, 3, 3, 3, 4])
        .distinct_until_changed()
        .map(|item| item.unwrap())
        .collect()
        .await;

    // Assert
    assert_eq!(values, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_distinct_until_changed_allows_non_consecutive_repeats() {
    let values: Vec<i32> = from_iter([1, 2, 1, 1, 2])
        .distinct_until_changed()
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(values, vec![1, 2, 1, 2]);
}

#[tokio::test]
async fn test_distinct_until_changed_first_value_always_emitted() -> anyhow::Result<()> {
    // Arrange
    let (tx, source) = test_channel::<Row>();
    let mut distinct = source.distinct_until_changed();

    // Act
    tx.send(row_alice())?;

    // Assert
    assert_eq!(unwrap_stream(&mut distinct, 100).await?, row_alice());

    tx.send(row_alice())?;
    assert_no_element_emitted(&mut distinct, 50).await;

    tx.send(row_bob())?;
    assert_eq!(unwrap_stream(&mut distinct, 100).await?, row_bob());

    Ok(())
}

#[tokio::test]
async fn test_distinct_until_changed_by_compares_with_last_emitted() {
    // Arrange: values within 2 of the last emitted one count as the same
    let close = |a: &i32, b: &i32| (a - b).abs() <= 2;

    // Act
    let values: Vec<i32> = from_iter([10, 11, 12, 13, 20, 21])
        .distinct_until_changed_by(close)
        .map(|item| item.unwrap())
        .collect()
        .await;

    // Assert: 13 is 3 away from 10, the last emitted value
    assert_eq!(values, vec![10, 13, 20]);
}

#[tokio::test]
async fn test_distinct_until_changed_by_key_field() {
    let rows = vec![
        Row::new(1, "Alice"),
        Row::new(1, "Alicia"),
        Row::new(2, "Bob"),
    ];

    let values: Vec<Row> = from_iter(rows)
        .distinct_until_changed_by(|a: &Row, b: &Row| a.id == b.id)
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(values, vec![Row::new(1, "Alice"), Row::new(2, "Bob")]);
}

#[tokio::test]
async fn test_distinct_until_changed_propagates_error_and_ends() -> anyhow::Result<()> {
    // Arrange
    let (tx, source) = test_channel_with_errors::<i32>();
    let mut distinct = source.distinct_until_changed();

    // Act
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Error(EddyError::upstream("feed dropped")))?;
    tx.send(StreamItem::Value(2))?;

    // Assert
    assert_eq!(unwrap_stream(&mut distinct, 100).await?, 1);
    assert!(unwrap_stream(&mut distinct, 100).await.is_err());
    assert_stream_ended(&mut distinct, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_distinct_until_changed_error_first() -> anyhow::Result<()> {
    let source = stream::iter(vec![
        StreamItem::Error(EddyError::upstream("no data")),
        StreamItem::Value(1),
    ]);
    let mut distinct = source.distinct_until_changed();

    assert!(unwrap_stream(&mut distinct, 100).await.is_err());
    assert_stream_ended(&mut distinct, 100).await;

    Ok(())
}
