// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use lessonbook_core::Task;

use crate::{
    arg::ArgOutputFormat,
    table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson},
};

#[derive(Debug)]
pub struct TaskFormatter {
    format: ArgOutputFormat,
}

impl TaskFormatter {
    const COLUMNS: [TaskColumn; 4] = [
        TaskColumn::Id,
        TaskColumn::Due,
        TaskColumn::Subject,
        TaskColumn::Title,
    ];

    pub fn new(format: ArgOutputFormat) -> Self {
        Self { format }
    }

    pub fn format<'a>(&'a self, tasks: &'a [Task]) -> Display<'a> {
        Display {
            tasks,
            format: self.format,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    tasks: &'a [Task],
    format: ArgOutputFormat,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &TaskFormatter::COLUMNS;
        match self.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.tasks)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.tasks)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum TaskColumn {
    Id,
    Due,
    Subject,
    Title,
}

impl TableColumn<Task> for TaskColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            TaskColumn::Id => "Id",
            TaskColumn::Due => "Due",
            TaskColumn::Subject => "Subject",
            TaskColumn::Title => "Title",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Task) -> Cow<'a, str> {
        match self {
            TaskColumn::Id => data.id.to_string().into(),
            TaskColumn::Due => data.due.to_string().into(),
            TaskColumn::Subject if data.subject.is_empty() => "-".into(),
            TaskColumn::Subject => data.subject.as_str().into(),
            TaskColumn::Title => data.title.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TaskColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &Task) -> Option<Color> {
        data.archived.then_some(Color::BrightBlack)
    }
}
