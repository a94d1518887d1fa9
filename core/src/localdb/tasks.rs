// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::localdb::ChangeFeed;
use crate::types::format_date;
use crate::{ScheduleError, Task, TaskDraft};

#[derive(Debug, Clone)]
pub struct Tasks {
    pool: SqlitePool,
    changes: ChangeFeed,
}

impl Tasks {
    pub(crate) fn new(pool: SqlitePool, changes: ChangeFeed) -> Self {
        Self { pool, changes }
    }

    /// Stores a new, not archived task.
    pub async fn insert(&self, draft: &TaskDraft) -> Result<Task, ScheduleError> {
        let draft = draft.normalized()?;

        const SQL: &str = "\
INSERT INTO tasks (subject, title, description, due_date, archived)
VALUES (?, ?, ?, ?, 0);
";
        let id = sqlx::query(SQL)
            .bind(&draft.subject)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(format_date(draft.due))
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::debug!(id, due = %draft.due, "task added");
        self.changes.notify();
        Ok(Task {
            id,
            subject: draft.subject,
            title: draft.title,
            description: draft.description,
            due: draft.due,
            archived: false,
        })
    }

    pub async fn get(&self, id: i64) -> Result<Option<Task>, ScheduleError> {
        const SQL: &str = "\
SELECT id, subject, title, description, due_date, archived
FROM tasks
WHERE id = ?;
";
        let record: Option<TaskRecord> = sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        record.map(Task::try_from).transpose()
    }

    /// Tasks still to do, soonest due first.
    pub async fn get_active(&self) -> Result<Vec<Task>, ScheduleError> {
        const SQL: &str = "\
SELECT id, subject, title, description, due_date, archived
FROM tasks
WHERE archived = 0
ORDER BY due_date ASC, id ASC;
";
        self.fetch(SQL).await
    }

    /// Archived tasks, latest due first.
    pub async fn get_archived(&self) -> Result<Vec<Task>, ScheduleError> {
        const SQL: &str = "\
SELECT id, subject, title, description, due_date, archived
FROM tasks
WHERE archived = 1
ORDER BY due_date DESC, id DESC;
";
        self.fetch(SQL).await
    }

    /// Moves a task in or out of the archive, returns whether the task exists.
    pub async fn set_archived(&self, id: i64, archived: bool) -> Result<bool, ScheduleError> {
        let result = sqlx::query("UPDATE tasks SET archived = ? WHERE id = ?;")
            .bind(archived)
            .bind(id)
            .execute(&self.pool)
            .await?;

        let found = result.rows_affected() > 0;
        if found {
            self.changes.notify();
        }
        Ok(found)
    }

    /// Deletes a task, returns whether it existed.
    pub async fn delete(&self, id: i64) -> Result<bool, ScheduleError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?;")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let found = result.rows_affected() > 0;
        if found {
            self.changes.notify();
        }
        Ok(found)
    }

    pub async fn count(&self) -> Result<i64, ScheduleError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks;")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    async fn fetch(&self, sql: &'static str) -> Result<Vec<Task>, ScheduleError> {
        let records: Vec<TaskRecord> = sqlx::query_as(sql).fetch_all(&self.pool).await?;
        Ok(records
            .into_iter()
            .filter_map(|record| {
                let id = record.id;
                match Task::try_from(record) {
                    Ok(task) => Some(task),
                    Err(err) => {
                        tracing::warn!(id, %err, "skipping malformed task");
                        None
                    }
                }
            })
            .collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TaskRecord {
    id: i64,
    subject: String,
    title: String,
    description: String,
    due_date: String,
    archived: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ScheduleError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        Ok(Task {
            id: record.id,
            subject: record.subject,
            title: record.title,
            description: record.description,
            due: record.due_date.parse()?,
            archived: record.archived,
        })
    }
}
