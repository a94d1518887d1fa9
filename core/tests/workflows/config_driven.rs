// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.
//!
//! These tests validate how configuration affects the schedule: the window size, pruning
//! and the location of the database.

use jiff::civil::date;
use lessonbook_core::{DayOfWeek, Schedule, WeekParity};

use crate::common::{TestConfigBuilder, setup_temp_dirs, slot, wednesday_oct_21};

#[tokio::test]
async fn config_window_size_limits_materialized_dates() {
    // Arrange
    let config = TestConfigBuilder::new().with_weeks(0, 1).build();
    let schedule = Schedule::open(config, wednesday_oct_21()).await.unwrap();

    // Act
    let report = schedule
        .set_template(
            WeekParity::Odd,
            &[slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();

    // Assert - two weeks of six school days
    assert_eq!(report.dates, 12);
    assert_eq!(report.first, Some(date(2026, 10, 19)));
    assert_eq!(report.last, Some(date(2026, 10, 31)));
    assert_eq!(report.lessons, 1);
}

#[tokio::test]
async fn config_prune_removes_lessons_outside_window() {
    // Arrange - materialize around October, then move the window to December
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_prune(true)
        .build();
    let schedule = Schedule::open(config.clone(), wednesday_oct_21())
        .await
        .unwrap();
    schedule
        .set_template(
            WeekParity::Odd,
            &[slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();
    schedule.close().await;

    // Act
    let schedule = Schedule::open(config, date(2026, 12, 16)).await.unwrap();
    let report = schedule.regenerate().await.unwrap();

    // Assert
    assert!(report.pruned > 0);
    assert!(
        schedule
            .lessons_for_date(date(2026, 10, 19))
            .await
            .unwrap()
            .is_empty()
    );
    // 2026-12-14 is in ISO week 51
    assert_eq!(
        schedule
            .lessons_for_date(date(2026, 12, 14))
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn config_without_prune_keeps_old_lessons() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .build();
    let schedule = Schedule::open(config.clone(), wednesday_oct_21())
        .await
        .unwrap();
    schedule
        .set_template(
            WeekParity::Odd,
            &[slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();
    schedule.close().await;

    let schedule = Schedule::open(config, date(2026, 12, 16)).await.unwrap();
    let report = schedule.regenerate().await.unwrap();

    assert_eq!(report.pruned, 0);
    assert_eq!(
        schedule
            .lessons_for_date(date(2026, 10, 19))
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn config_creates_missing_state_dir() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let state_dir = temp_dirs.missing_state_dir();
    let config = TestConfigBuilder::new().with_state_dir(&state_dir).build();

    let schedule = Schedule::open(config, wednesday_oct_21()).await.unwrap();
    schedule.close().await;

    assert!(state_dir.join("lessonbook.db").exists());
}
