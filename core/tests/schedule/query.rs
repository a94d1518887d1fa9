// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use futures::StreamExt;
use jiff::civil::date;
use lessonbook_core::{BellPeriod, DayOfWeek, WeekParity};

use crate::common::{assert_subjects, bell, open_in_memory, period, slot};

#[tokio::test]
async fn query_filters_deactivated_period_before_rematerialization() {
    // Arrange
    let schedule = open_in_memory().await;
    schedule
        .set_template(
            WeekParity::Odd,
            &[
                slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "Math", "Smith", "201"),
                slot(WeekParity::Odd, DayOfWeek::MONDAY, 2, "Physics", "Brown", "202"),
            ],
        )
        .await
        .unwrap();
    let monday = date(2026, 10, 19);
    let mut watch = schedule.watch_day(monday);
    let current = watch.next().await.unwrap().unwrap();
    assert_subjects(&current.lessons, &["Math", "Physics"]);

    // Act
    let mut bells = BellPeriod::defaults();
    bells[1].active = false;
    schedule.store_bell_periods(&bells).await.unwrap();

    // Assert
    let day = schedule.day(monday).await.unwrap();
    assert_subjects(&day.lessons, &["Math"]);
    assert!(day.has_any_lessons);
    assert!(!day.active_periods.contains(&period(2)));
    assert_eq!(schedule.lessons_for_date(monday).await.unwrap().len(), 2);

    let updated = tokio::time::timeout(Duration::from_secs(5), watch.next())
        .await
        .expect("watch should see the bell change")
        .unwrap()
        .unwrap();
    assert_subjects(&updated.lessons, &["Math"]);

    // and regeneration drops the rows for good
    schedule.regenerate().await.unwrap();
    assert_eq!(schedule.lessons_for_date(monday).await.unwrap().len(), 1);
}

#[tokio::test]
async fn query_reports_all_periods_switched_off() {
    let schedule = open_in_memory().await;
    schedule
        .set_template(
            WeekParity::Odd,
            &[slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();
    let monday = date(2026, 10, 19);

    schedule
        .store_bell_periods(&[bell(1, "08:00", "08:50", false)])
        .await
        .unwrap();

    let day = schedule.day(monday).await.unwrap();
    assert!(day.lessons.is_empty());
    assert!(day.all_periods_inactive());

    let empty = schedule.day(date(2026, 10, 20)).await.unwrap();
    assert!(!empty.has_any_lessons);
    assert!(!empty.all_periods_inactive());
}

#[tokio::test]
async fn query_overlays_current_bell_times() {
    let schedule = open_in_memory().await;
    schedule
        .set_template(
            WeekParity::Odd,
            &[slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();
    let monday = date(2026, 10, 19);

    schedule
        .store_bell_periods(&[bell(1, "07:45", "08:30", true)])
        .await
        .unwrap();

    let raw = schedule.lessons_for_date(monday).await.unwrap();
    assert_eq!(raw[0].start.to_string(), "08:00");
    let day = schedule.day(monday).await.unwrap();
    assert_eq!(day.lessons[0].start.to_string(), "07:45");
    assert_eq!(day.lessons[0].end.to_string(), "08:30");
}

#[tokio::test]
async fn query_stream_follows_template_edits() {
    let schedule = open_in_memory().await;
    let monday = date(2026, 10, 19);
    let mut stream = Box::pin(schedule.watch_day(monday).into_stream());

    let first = stream.next().await.unwrap().unwrap();
    assert!(first.lessons.is_empty());

    schedule
        .set_template(
            WeekParity::Odd,
            &[slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();

    // the template write and the regenerated dates may wake the stream separately
    let mut latest = None;
    for _ in 0..3 {
        let next = tokio::time::timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("stream should yield after a write")
            .unwrap()
            .unwrap();
        let done = !next.lessons.is_empty();
        latest = Some(next);
        if done {
            break;
        }
    }
    assert_subjects(&latest.unwrap().lessons, &["Math"]);
}

#[tokio::test]
async fn query_week_of_materialized_dates() {
    let schedule = open_in_memory().await;
    schedule
        .set_template(
            WeekParity::Odd,
            &[
                slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "Math", "Smith", "201"),
                slot(WeekParity::Odd, DayOfWeek::SATURDAY, 1, "Art", "Ng", "12"),
            ],
        )
        .await
        .unwrap();

    let week = schedule.week(date(2026, 10, 22)).await.unwrap();

    let counts: Vec<usize> = week.iter().map(|d| d.lessons.len()).collect();
    assert_eq!(counts, vec![1, 0, 0, 0, 0, 1, 0]);
}
