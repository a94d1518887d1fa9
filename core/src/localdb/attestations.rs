// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::localdb::ChangeFeed;
use crate::types::format_date;
use crate::{Attestation, AttestationDraft, ClockTime, ScheduleError};

#[derive(Debug, Clone)]
pub struct Attestations {
    pool: SqlitePool,
    changes: ChangeFeed,
}

impl Attestations {
    pub(crate) fn new(pool: SqlitePool, changes: ChangeFeed) -> Self {
        Self { pool, changes }
    }

    pub async fn insert(&self, draft: &AttestationDraft) -> Result<Attestation, ScheduleError> {
        let draft = draft.normalized()?;

        const SQL: &str = "\
INSERT INTO attestations (subject, kind, date, time, room, description)
VALUES (?, ?, ?, ?, ?, ?);
";
        let id = sqlx::query(SQL)
            .bind(&draft.subject)
            .bind(&draft.kind)
            .bind(format_date(draft.date))
            .bind(draft.time.map(|t| t.to_string()).unwrap_or_default())
            .bind(&draft.room)
            .bind(&draft.description)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::debug!(id, date = %draft.date, "attestation added");
        self.changes.notify();
        Ok(Attestation {
            id,
            subject: draft.subject,
            kind: draft.kind,
            date: draft.date,
            time: draft.time,
            room: draft.room,
            description: draft.description,
        })
    }

    /// Every attestation by date, untimed ones first within a day.
    pub async fn get_all(&self) -> Result<Vec<Attestation>, ScheduleError> {
        const SQL: &str = "\
SELECT id, subject, kind, date, time, room, description
FROM attestations
ORDER BY date ASC, time ASC, id ASC;
";
        let records: Vec<AttestationRecord> = sqlx::query_as(SQL).fetch_all(&self.pool).await?;
        Ok(records
            .into_iter()
            .filter_map(|record| {
                let id = record.id;
                match Attestation::try_from(record) {
                    Ok(attestation) => Some(attestation),
                    Err(err) => {
                        tracing::warn!(id, %err, "skipping malformed attestation");
                        None
                    }
                }
            })
            .collect())
    }

    /// Deletes an attestation, returns whether it existed.
    pub async fn delete(&self, id: i64) -> Result<bool, ScheduleError> {
        let result = sqlx::query("DELETE FROM attestations WHERE id = ?;")
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
struct AttestationRecord {
    id: i64,
    subject: String,
    kind: String,
    date: String,
    time: String,
    room: String,
    description: String,
}

impl TryFrom<AttestationRecord> for Attestation {
    type Error = ScheduleError;

    fn try_from(record: AttestationRecord) -> Result<Self, Self::Error> {
        let time = match record.time.as_str() {
            "" => None,
            time => Some(time.parse::<ClockTime>()?),
        };

        Ok(Attestation {
            id: record.id,
            subject: record.subject,
            kind: record.kind,
            date: record.date.parse()?,
            time,
            room: record.room,
            description: record.description,
        })
    }
}
