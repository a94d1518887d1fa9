// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use sqlx::SqlitePool;

use crate::localdb::ChangeFeed;
use crate::types::format_date;
use crate::{DayOfWeek, Lesson, PeriodNumber, ScheduleError};

#[derive(Debug, Clone)]
pub struct Lessons {
    pool: SqlitePool,
    changes: ChangeFeed,
}

impl Lessons {
    pub(crate) fn new(pool: SqlitePool, changes: ChangeFeed) -> Self {
        Self { pool, changes }
    }

    /// Replaces every lesson of one date in a single transaction, so a date is never left
    /// half written. Lessons of another date are rejected before anything is written.
    pub async fn replace_for_date(
        &self,
        date: Date,
        lessons: &[Lesson],
    ) -> Result<(), ScheduleError> {
        if let Some(lesson) = lessons.iter().find(|l| l.date != date) {
            return Err(ScheduleError::DateMismatch {
                expected: date,
                got: lesson.date,
            });
        }

        let date_str = format_date(date);

        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM lessons WHERE date = ?;")
            .bind(&date_str)
            .execute(&mut *tx)
            .await?;

        const SQL: &str = "\
INSERT INTO lessons (
    date, period, subject, teacher, room, start_time, end_time, week_parity, day_of_week,
    is_replacement
)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?);
";
        for lesson in lessons {
            sqlx::query(SQL)
                .bind(&date_str)
                .bind(i64::from(lesson.period.get()))
                .bind(&lesson.subject)
                .bind(&lesson.teacher)
                .bind(&lesson.room)
                .bind(lesson.start.to_string())
                .bind(lesson.end.to_string())
                .bind(lesson.parity.as_str())
                .bind(i64::from(lesson.day.get()))
                .bind(lesson.is_replacement)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        self.changes.notify();
        Ok(())
    }

    /// Lessons of one date, ordered by period.
    pub async fn list_for_date(&self, date: Date) -> Result<Vec<Lesson>, ScheduleError> {
        const SQL: &str = "\
SELECT date, period, subject, teacher, room, start_time, end_time, week_parity, day_of_week,
       is_replacement
FROM lessons
WHERE date = ?
ORDER BY period ASC, id ASC;
";

        let records: Vec<LessonRecord> = sqlx::query_as(SQL)
            .bind(format_date(date))
            .fetch_all(&self.pool)
            .await?;

        Ok(records
            .into_iter()
            .filter_map(|record| match Lesson::try_from(record) {
                Ok(lesson) => Some(lesson),
                Err(err) => {
                    tracing::warn!(%date, %err, "skipping malformed lesson");
                    None
                }
            })
            .collect())
    }

    pub async fn count(&self) -> Result<i64, ScheduleError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lessons;")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    /// Deletes lessons dated before `first` or after `last`, returns the number of rows removed.
    pub async fn delete_outside(&self, first: Date, last: Date) -> Result<u64, ScheduleError> {
        let result = sqlx::query("DELETE FROM lessons WHERE date < ? OR date > ?;")
            .bind(format_date(first))
            .bind(format_date(last))
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            self.changes.notify();
        }
        Ok(result.rows_affected())
    }

    /// Deletes every materialized lesson, returns the number of rows removed.
    pub async fn clear(&self) -> Result<u64, ScheduleError> {
        let result = sqlx::query("DELETE FROM lessons;")
            .execute(&self.pool)
            .await?;

        self.changes.notify();
        Ok(result.rows_affected())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LessonRecord {
    date: String,
    period: i64,
    subject: String,
    teacher: String,
    room: String,
    start_time: String,
    end_time: String,
    week_parity: String,
    day_of_week: i64,
    is_replacement: bool,
}

impl TryFrom<LessonRecord> for Lesson {
    type Error = ScheduleError;

    fn try_from(record: LessonRecord) -> Result<Self, Self::Error> {
        Ok(Lesson {
            date: record.date.parse()?,
            period: PeriodNumber::try_from(record.period)?,
            subject: record.subject,
            teacher: record.teacher,
            room: record.room,
            start: record.start_time.parse()?,
            end: record.end_time.parse()?,
            parity: record.week_parity.parse()?,
            day: DayOfWeek::try_from(record.day_of_week)?,
            is_replacement: record.is_replacement,
        })
    }
}
