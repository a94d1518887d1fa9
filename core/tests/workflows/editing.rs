// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The bell editor flow: every keystroke stores the timetable, regeneration is debounced.

use jiff::civil::date;
use lessonbook_core::{DayOfWeek, WeekParity};

use crate::common::{bell, open_in_memory, slot};

#[tokio::test]
async fn editing_bells_regenerates_once() {
    // Arrange
    let schedule = open_in_memory().await;
    schedule
        .set_template(
            WeekParity::Odd,
            &[slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();
    let regenerator = schedule.regenerator();

    // Act
    for end in ["09:10", "09:15"] {
        schedule
            .store_bell_periods(&[bell(1, "08:30", end, false)])
            .await
            .unwrap();
        regenerator.trigger().unwrap();
    }
    regenerator.flush().await.unwrap();

    // Assert
    assert_eq!(regenerator.runs(), 1);
    assert!(
        schedule
            .lessons_for_date(date(2026, 10, 19))
            .await
            .unwrap()
            .is_empty()
    );
    regenerator.shutdown().await.unwrap();
}
