// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! On-disk persistence across restarts.

use jiff::civil::date;
use lessonbook_core::{
    AttestationDraft, BellPeriod, DayOfWeek, NoteDraft, Schedule, TaskDraft, UNTITLED_NOTE,
    WeekParity,
};

use crate::common::{bell, setup_temp_dirs, slot, test_config, wednesday_oct_21};

#[tokio::test]
async fn persistence_survives_reopen() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(Some(&temp_dirs.state_dir));
    let schedule = Schedule::open(config.clone(), wednesday_oct_21())
        .await
        .unwrap();
    schedule
        .set_bell_period(bell(1, "08:15", "09:00", true))
        .await
        .unwrap();
    schedule
        .set_template(
            WeekParity::Even,
            &[slot(WeekParity::Even, DayOfWeek::MONDAY, 1, "Math", "Smith", "201")],
        )
        .await
        .unwrap();
    schedule.close().await;

    // Act
    let schedule = Schedule::open(config, wednesday_oct_21()).await.unwrap();

    // Assert
    let bells = schedule.bell_periods().await.unwrap();
    assert_eq!(bells[0], bell(1, "08:15", "09:00", true));
    assert_eq!(bells.len(), 8);
    assert_eq!(schedule.template(WeekParity::Even).await.unwrap().len(), 1);
    let lessons = schedule.lessons_for_date(date(2026, 10, 26)).await.unwrap();
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].start.to_string(), "08:15");
}

#[tokio::test]
async fn persistence_open_does_not_reseed_edited_bells() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(Some(&temp_dirs.state_dir));
    let schedule = Schedule::open(config.clone(), wednesday_oct_21())
        .await
        .unwrap();
    schedule
        .set_bell_periods(&[bell(1, "09:00", "09:40", true)])
        .await
        .unwrap();
    schedule.close().await;

    let schedule = Schedule::open(config, wednesday_oct_21()).await.unwrap();

    let bells = schedule.bell_periods().await.unwrap();
    assert_eq!(bells, vec![bell(1, "09:00", "09:40", true)]);
    assert_ne!(bells, BellPeriod::defaults());
}

#[tokio::test]
async fn persistence_open_materializes_when_lessons_missing() {
    // Arrange - templates stored, lessons cleared
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(Some(&temp_dirs.state_dir));
    let tuesday = DayOfWeek::try_from(2u8).unwrap();
    let schedule = Schedule::open(config.clone(), wednesday_oct_21())
        .await
        .unwrap();
    schedule
        .set_template(
            WeekParity::Odd,
            &[slot(WeekParity::Odd, tuesday, 2, "Biology", "Park", "110")],
        )
        .await
        .unwrap();
    schedule.clear_materialized().await.unwrap();
    assert!(!schedule.has_any_lessons().await.unwrap());
    schedule.close().await;

    // Act
    let schedule = Schedule::open(config, wednesday_oct_21()).await.unwrap();

    // Assert
    let lessons = schedule.lessons_for_date(date(2026, 10, 20)).await.unwrap();
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].subject, "Biology");
}

#[tokio::test]
async fn persistence_keeps_tasks_attestations_and_notes() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(Some(&temp_dirs.state_dir));
    let schedule = Schedule::open(config.clone(), wednesday_oct_21())
        .await
        .unwrap();
    let done = schedule
        .add_task(&TaskDraft::new("Exercises 1-5", date(2026, 10, 20)))
        .await
        .unwrap();
    schedule
        .add_task(&TaskDraft::new("Essay", date(2026, 10, 23)))
        .await
        .unwrap();
    schedule.set_task_archived(done.id, true).await.unwrap();
    schedule
        .add_attestation(&AttestationDraft::new("Physics", date(2026, 12, 15)))
        .await
        .unwrap();
    schedule
        .add_note(&NoteDraft {
            title: String::new(),
            content: "bring a calculator".to_string(),
        })
        .await
        .unwrap();
    schedule.close().await;

    let schedule = Schedule::open(config, wednesday_oct_21()).await.unwrap();

    let active = schedule.tasks().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Essay");
    let archived = schedule.archived_tasks().await.unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].id, done.id);
    assert_eq!(schedule.attestations().await.unwrap()[0].subject, "Physics");
    assert_eq!(schedule.notes().await.unwrap()[0].title, UNTITLED_NOTE);
}
