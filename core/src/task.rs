// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::ScheduleError;

/// A homework task.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Task {
    pub id: i64,
    pub subject: String,
    pub title: String,
    pub description: String,
    pub due: Date,

    /// Archived tasks are done and only listed on request.
    pub archived: bool,
}

/// A task about to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub subject: String,
    pub title: String,
    pub description: String,
    pub due: Date,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, due: Date) -> Self {
        TaskDraft {
            subject: String::new(),
            title: title.into(),
            description: String::new(),
            due,
        }
    }

    /// Trims every field. The title must not be blank.
    pub(crate) fn normalized(&self) -> Result<TaskDraft, ScheduleError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ScheduleError::Blank("task title"));
        }

        Ok(TaskDraft {
            subject: self.subject.trim().to_string(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            due: self.due,
        })
    }
}
