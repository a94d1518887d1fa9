// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use lessonbook_core::{DayOfWeek, Lesson, WeekParity};

use crate::common::{assert_lesson, assert_subjects, bell, open_in_memory, period, slot};

#[tokio::test]
async fn materialize_even_monday_math() {
    // Arrange
    let schedule = open_in_memory().await;
    schedule
        .set_bell_periods(&[bell(1, "08:00", "09:50", true)])
        .await
        .unwrap();

    // Act
    schedule
        .set_template(
            WeekParity::Even,
            &[slot(WeekParity::Even, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();

    // Assert - 2026-10-26 is in ISO week 44
    let monday = date(2026, 10, 26);
    let lessons = schedule.lessons_for_date(monday).await.unwrap();
    assert_eq!(
        lessons,
        vec![Lesson {
            date: monday,
            period: period(1),
            subject: "Math".to_string(),
            teacher: "Smith".to_string(),
            room: "201".to_string(),
            start: "08:00".parse().unwrap(),
            end: "09:50".parse().unwrap(),
            parity: WeekParity::Even,
            day: DayOfWeek::MONDAY,
            is_replacement: false,
        }]
    );
}

#[tokio::test]
async fn materialize_inactive_period_emits_nothing() {
    let schedule = open_in_memory().await;
    schedule
        .set_bell_periods(&[bell(1, "08:00", "09:50", false)])
        .await
        .unwrap();

    schedule
        .set_template(
            WeekParity::Even,
            &[slot(WeekParity::Even, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();

    assert!(
        schedule
            .lessons_for_date(date(2026, 10, 26))
            .await
            .unwrap()
            .is_empty()
    );
    assert!(!schedule.has_any_lessons().await.unwrap());
}

#[tokio::test]
async fn materialize_odd_template_ignored_on_even_week() {
    let schedule = open_in_memory().await;

    schedule
        .set_template(
            WeekParity::Odd,
            &[slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "History", "Jones", "105")],
        )
        .await
        .unwrap();

    // even week
    assert!(
        schedule
            .lessons_for_date(date(2026, 10, 26))
            .await
            .unwrap()
            .is_empty()
    );
    // odd week
    let lessons = schedule.lessons_for_date(date(2026, 10, 19)).await.unwrap();
    assert_subjects(&lessons, &["History"]);
    assert_eq!(lessons[0].parity, WeekParity::Odd);
}

#[tokio::test]
async fn materialize_blank_slots_never_produce_rows() {
    let schedule = open_in_memory().await;

    schedule
        .set_template(
            WeekParity::Odd,
            &[
                slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "", "Smith", "201"),
                slot(WeekParity::Odd, DayOfWeek::MONDAY, 2, "   ", "Jones", "105"),
                slot(WeekParity::Odd, DayOfWeek::MONDAY, 3, "Art", "", ""),
            ],
        )
        .await
        .unwrap();

    let lessons = schedule.lessons_for_date(date(2026, 10, 19)).await.unwrap();
    assert_subjects(&lessons, &["Art"]);
}

#[tokio::test]
async fn materialize_yields_exactly_the_implied_rows() {
    // Arrange
    let schedule = open_in_memory().await;
    schedule
        .set_bell_periods(&[
            bell(1, "08:00", "08:45", true),
            bell(2, "09:00", "09:45", true),
            bell(3, "10:00", "10:45", false),
            bell(4, "11:00", "11:45", true),
        ])
        .await
        .unwrap();
    schedule
        .set_template(
            WeekParity::Even,
            &[
                slot(WeekParity::Even, DayOfWeek::MONDAY, 1, "Math", "Smith", "201"),
                slot(WeekParity::Even, DayOfWeek::MONDAY, 3, "Chemistry", "Lee", "301"),
                slot(WeekParity::Even, DayOfWeek::SATURDAY, 4, "Sport", "Kim", "Gym"),
            ],
        )
        .await
        .unwrap();
    let saturday = DayOfWeek::SATURDAY.date_in_week(date(2026, 10, 19)).unwrap();

    // Act
    schedule
        .set_template(
            WeekParity::Odd,
            &[
                slot(WeekParity::Odd, DayOfWeek::MONDAY, 2, "Physics", "Brown", "202"),
                slot(WeekParity::Odd, DayOfWeek::MONDAY, 5, "Music", "Wood", "401"),
                slot(WeekParity::Odd, DayOfWeek::SATURDAY, 1, "Drawing", "Ng", "12"),
            ],
        )
        .await
        .unwrap();

    // Assert - odd week 43: period 5 has no bell at all
    let lessons = schedule.lessons_for_date(date(2026, 10, 19)).await.unwrap();
    assert_eq!(lessons.len(), 1);
    assert_lesson(&lessons[0], "Physics", "Brown", "202", ("09:00", "09:45"));

    let lessons = schedule.lessons_for_date(saturday).await.unwrap();
    assert_subjects(&lessons, &["Drawing"]);

    // even week 44: period 3 is inactive
    let lessons = schedule.lessons_for_date(date(2026, 10, 26)).await.unwrap();
    assert_eq!(lessons.len(), 1);
    assert_lesson(&lessons[0], "Math", "Smith", "201", ("08:00", "08:45"));

    let lessons = schedule.lessons_for_date(date(2026, 10, 31)).await.unwrap();
    assert_lesson(&lessons[0], "Sport", "Kim", "Gym", ("11:00", "11:45"));

    // no other weekday carries lessons
    for day in [date(2026, 10, 20), date(2026, 10, 27), date(2026, 10, 25)] {
        assert!(schedule.lessons_for_date(day).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn materialize_is_idempotent() {
    let schedule = open_in_memory().await;
    schedule
        .set_template(
            WeekParity::Even,
            &[slot(WeekParity::Even, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();
    let monday = date(2026, 10, 26);
    let once = schedule.lessons_for_date(monday).await.unwrap();

    let first = schedule.regenerate().await.unwrap();
    let second = schedule.regenerate().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(schedule.lessons_for_date(monday).await.unwrap(), once);
    assert_eq!(schedule.day(monday).await.unwrap().lessons, once);
}

#[tokio::test]
async fn materialize_bell_time_change_updates_whole_window() {
    // Arrange
    let schedule = open_in_memory().await;
    schedule
        .set_template(
            WeekParity::Even,
            &[slot(WeekParity::Even, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();
    schedule
        .set_template(
            WeekParity::Odd,
            &[slot(WeekParity::Odd, DayOfWeek::MONDAY, 1, "History", "Jones", "105")],
        )
        .await
        .unwrap();

    // Act
    schedule
        .set_bell_period(bell(1, "08:30", "09:15", true))
        .await
        .unwrap();

    // Assert - every Monday of the window, Sep 21 to Nov 16
    let mut monday = date(2026, 9, 21);
    let mut seen = 0;
    while monday <= date(2026, 11, 16) {
        let lessons = schedule.lessons_for_date(monday).await.unwrap();
        assert_eq!(lessons.len(), 1, "one lesson on {monday}");
        assert_eq!(lessons[0].start.to_string(), "08:30");
        assert_eq!(lessons[0].end.to_string(), "09:15");
        let expected = match lessons[0].parity {
            WeekParity::Even => ("Math", "Smith", "201"),
            WeekParity::Odd => ("History", "Jones", "105"),
        };
        assert_eq!(
            (lessons[0].subject.as_str(), lessons[0].teacher.as_str(), lessons[0].room.as_str()),
            expected
        );
        monday = monday.checked_add(jiff::Span::new().weeks(1)).unwrap();
        seen += 1;
    }
    assert_eq!(seen, 9);
}

#[tokio::test]
async fn materialize_empty_templates_leave_lessons_untouched() {
    let schedule = open_in_memory().await;
    schedule
        .set_template(
            WeekParity::Even,
            &[slot(WeekParity::Even, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();
    let before = schedule.lessons_for_date(date(2026, 10, 26)).await.unwrap();

    let report = schedule.set_template(WeekParity::Even, &[]).await.unwrap();

    assert!(report.skipped);
    assert_eq!(schedule.lessons_for_date(date(2026, 10, 26)).await.unwrap(), before);
}
