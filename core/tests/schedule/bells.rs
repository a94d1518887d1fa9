// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use lessonbook_core::{BellPeriod, ScheduleError};

use crate::common::{bell, open_in_memory, period};

#[tokio::test]
async fn bells_seeded_with_defaults() {
    let schedule = open_in_memory().await;

    let bells = schedule.bell_periods().await.unwrap();

    assert_eq!(bells.len(), 8);
    assert_eq!(bells[0], bell(1, "08:00", "08:50", true));
    assert_eq!(bells[5], bell(6, "18:00", "18:50", true));
    assert_eq!(bells[7], bell(8, "22:00", "22:50", false));
}

#[tokio::test]
async fn bells_rejected_set_keeps_previous_timetable() {
    // Arrange
    let schedule = open_in_memory().await;

    // Act
    let result = schedule
        .set_bell_periods(&[
            bell(1, "08:00", "08:45", true),
            bell(1, "09:00", "09:45", true),
        ])
        .await;

    // Assert
    assert!(matches!(
        result,
        Err(ScheduleError::InvalidBellPeriod { number: 1, .. })
    ));
    assert_eq!(
        schedule.bell_periods().await.unwrap(),
        BellPeriod::defaults()
    );
}

#[tokio::test]
async fn bells_single_period_edit_rejects_inverted_times() {
    let schedule = open_in_memory().await;

    let result = schedule
        .set_bell_period(bell(3, "13:00", "12:00", true))
        .await;

    assert!(matches!(
        result,
        Err(ScheduleError::InvalidBellPeriod { number: 3, .. })
    ));
    let bells = schedule.bell_timetable().await.unwrap();
    assert_eq!(bells.get(period(3)), Some(&bell(3, "12:00", "12:50", true)));
}
