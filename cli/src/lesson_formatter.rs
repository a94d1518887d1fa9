// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use lessonbook_core::Lesson;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic};

/// Lessons as an aligned table. JSON output serializes the day schedules directly.
#[derive(Debug)]
pub struct LessonFormatter {
    columns: Vec<LessonColumn>,
}

impl LessonFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                LessonColumn::Period,
                LessonColumn::Time,
                LessonColumn::Subject,
                LessonColumn::Teacher,
                LessonColumn::Room,
            ],
        }
    }

    /// Prefixes each row with its date, for listings spanning several days.
    pub fn with_date(mut self) -> Self {
        self.columns.insert(0, LessonColumn::Date);
        self
    }

    pub fn format<'a>(&'a self, lessons: &'a [Lesson]) -> Display<'a> {
        Display {
            lessons,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    lessons: &'a [Lesson],
    formatter: &'a LessonFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = Table::new(TableStyleBasic::new(), &self.formatter.columns, self.lessons);
        write!(f, "{table}")
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LessonColumn {
    Date,
    Period,
    Time,
    Subject,
    Teacher,
    Room,
}

impl TableColumn<Lesson> for LessonColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            LessonColumn::Date => "Date",
            LessonColumn::Period => "Period",
            LessonColumn::Time => "Time",
            LessonColumn::Subject => "Subject",
            LessonColumn::Teacher => "Teacher",
            LessonColumn::Room => "Room",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Lesson) -> Cow<'a, str> {
        match self {
            LessonColumn::Date => format!("{} {}", data.date, data.day).into(),
            LessonColumn::Period => data.period.to_string().into(),
            LessonColumn::Time => format!("{}~{}", data.start, data.end).into(),
            LessonColumn::Subject => data.subject.as_str().into(),
            LessonColumn::Teacher => data.teacher.as_str().into(),
            LessonColumn::Room => data.room.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            LessonColumn::Period => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
