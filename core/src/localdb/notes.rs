// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;
use sqlx::SqlitePool;

use crate::localdb::ChangeFeed;
use crate::{Note, NoteDraft, ScheduleError};

#[derive(Debug, Clone)]
pub struct Notes {
    pool: SqlitePool,
    changes: ChangeFeed,
}

impl Notes {
    pub(crate) fn new(pool: SqlitePool, changes: ChangeFeed) -> Self {
        Self { pool, changes }
    }

    /// Stores a note created at `created_at`, kept with millisecond precision.
    pub async fn insert(
        &self,
        draft: &NoteDraft,
        created_at: Timestamp,
    ) -> Result<Note, ScheduleError> {
        let draft = draft.normalized()?;
        let millis = created_at.as_millisecond();

        let id = sqlx::query("INSERT INTO notes (title, content, created_at) VALUES (?, ?, ?);")
            .bind(&draft.title)
            .bind(&draft.content)
            .bind(millis)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::debug!(id, "note added");
        self.changes.notify();
        Ok(Note {
            id,
            title: draft.title,
            content: draft.content,
            created_at: Timestamp::from_millisecond(millis)?,
        })
    }

    /// Every note, newest first.
    pub async fn get_all(&self) -> Result<Vec<Note>, ScheduleError> {
        const SQL: &str = "\
SELECT id, title, content, created_at
FROM notes
ORDER BY created_at DESC, id DESC;
";
        let records: Vec<NoteRecord> = sqlx::query_as(SQL).fetch_all(&self.pool).await?;
        Ok(records
            .into_iter()
            .filter_map(|record| {
                let id = record.id;
                match Note::try_from(record) {
                    Ok(note) => Some(note),
                    Err(err) => {
                        tracing::warn!(id, %err, "skipping malformed note");
                        None
                    }
                }
            })
            .collect())
    }

    /// Deletes a note, returns whether it existed.
    pub async fn delete(&self, id: i64) -> Result<bool, ScheduleError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?;")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let found = result.rows_affected() > 0;
        if found {
            self.changes.notify();
        }
        Ok(found)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct NoteRecord {
    id: i64,
    title: String,
    content: String,
    created_at: i64,
}

impl TryFrom<NoteRecord> for Note {
    type Error = ScheduleError;

    fn try_from(record: NoteRecord) -> Result<Self, Self::Error> {
        Ok(Note {
            id: record.id,
            title: record.title,
            content: record.content,
            created_at: Timestamp::from_millisecond(record.created_at)?,
        })
    }
}
