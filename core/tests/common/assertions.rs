// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use lessonbook_core::Lesson;

/// Asserts the subject, teacher, room and times of a lesson.
#[allow(dead_code)]
pub fn assert_lesson(lesson: &Lesson, subject: &str, teacher: &str, room: &str, times: (&str, &str)) {
    assert_eq!(lesson.subject, subject, "subject mismatch");
    assert_eq!(lesson.teacher, teacher, "teacher mismatch");
    assert_eq!(lesson.room, room, "room mismatch");
    assert_eq!(lesson.start.to_string(), times.0, "start time mismatch");
    assert_eq!(lesson.end.to_string(), times.1, "end time mismatch");
}

/// Asserts the subjects of a list of lessons, in order.
#[allow(dead_code)]
pub fn assert_subjects(lessons: &[Lesson], expected: &[&str]) {
    let got: Vec<&str> = lessons.iter().map(|l| l.subject.as_str()).collect();
    assert_eq!(got, expected, "subjects mismatch");
}
