// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eddy_runtime::clock::Clock;
use eddy_test_utils::{ManualClock, ManualInstant};
use futures::FutureExt;
use std::time::Duration;
use tokio::time::timeout;

#[test]
fn test_manual_clock_moves_only_when_told() {
    // Arrange
    let clock = ManualClock::new();
    let start = clock.now();

    // Act
    clock.advance(Duration::from_millis(250));

    // Assert
    assert_eq!(clock.now() - start, Duration::from_millis(250));
    assert_eq!(clock.now(), ManualInstant::from_millis(250));
}

#[test]
fn test_manual_clock_clones_share_time() {
    // Arrange
    let clock = ManualClock::new();
    let other = clock.clone();

    // Act
    other.advance(Duration::from_secs(1));

    // Assert
    assert_eq!(clock.now().since_start(), Duration::from_secs(1));
}

#[test]
fn test_manual_clock_can_step_back() {
    // Arrange
    let clock = ManualClock::new();
    clock.advance(Duration::from_millis(500));

    // Act
    clock.set(ManualInstant::from_millis(100));

    // Assert
    assert_eq!(clock.now(), ManualInstant::from_millis(100));
    assert!(clock.now() < ManualInstant::from_millis(500));
}

#[test]
fn test_manual_instant_arithmetic_saturates() {
    // Arrange
    let early = ManualInstant::from_millis(100);
    let late = ManualInstant::from_millis(300);

    // Act & Assert
    assert_eq!(early - late, Duration::ZERO);
    assert_eq!(late - early, Duration::from_millis(200));
    assert_eq!((late + Duration::MAX).since_start(), Duration::MAX);
}

#[test]
fn test_manual_sleep_completes_at_deadline() {
    // Arrange
    let clock = ManualClock::new();
    let mut sleep = clock.sleep_future(Duration::from_millis(100));

    // Act & Assert
    assert!((&mut sleep).now_or_never().is_none());

    clock.advance(Duration::from_millis(99));
    assert!((&mut sleep).now_or_never().is_none());

    clock.advance(Duration::from_millis(1));
    assert!(sleep.now_or_never().is_some());
}

#[test]
fn test_manual_sleep_until_past_deadline_is_ready() {
    // Arrange
    let clock = ManualClock::new();
    clock.advance(Duration::from_millis(50));

    // Act
    let sleep = clock.sleep_until(ManualInstant::from_millis(10));

    // Assert
    assert!(sleep.now_or_never().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_manual_clock_advance_wakes_sleeping_task() -> anyhow::Result<()> {
    // Arrange
    let clock = ManualClock::new();
    let sleep = clock.sleep_future(Duration::from_millis(100));
    let handle = tokio::spawn(sleep);
    tokio::task::yield_now().await;
    assert!(!handle.is_finished());

    // Act
    clock.advance(Duration::from_millis(100));

    // Assert
    timeout(Duration::from_millis(100), handle).await??;

    Ok(())
}
