// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::localdb::ChangeFeed;
use crate::{BellPeriod, BellTimetable, ClockTime, PeriodNumber, ScheduleError};

#[derive(Debug, Clone)]
pub struct BellPeriods {
    pool: SqlitePool,
    changes: ChangeFeed,
}

impl BellPeriods {
    pub(crate) fn new(pool: SqlitePool, changes: ChangeFeed) -> Self {
        Self { pool, changes }
    }

    /// All stored periods ordered by number.
    ///
    /// Rows with a malformed time fall back to the default definition of their period.
    pub async fn get_all(&self) -> Result<Vec<BellPeriod>, ScheduleError> {
        const SQL: &str = "\
SELECT number, start_time, end_time, active
FROM bell_periods
ORDER BY number ASC;
";

        let records: Vec<BellPeriodRecord> = sqlx::query_as(SQL).fetch_all(&self.pool).await?;
        Ok(records
            .into_iter()
            .filter_map(BellPeriodRecord::into_period)
            .collect())
    }

    /// The stored timetable.
    pub async fn timetable(&self) -> Result<BellTimetable, ScheduleError> {
        BellTimetable::new(self.get_all().await?)
    }

    /// Atomically replaces the whole set. Nothing is written if the set is invalid.
    pub async fn replace_all(&self, periods: &[BellPeriod]) -> Result<(), ScheduleError> {
        let timetable = BellTimetable::new(periods.iter().copied())?;

        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM bell_periods;")
            .execute(&mut *tx)
            .await?;

        const SQL: &str = "\
INSERT INTO bell_periods (number, start_time, end_time, active)
VALUES (?, ?, ?, ?);
";
        for period in timetable.iter() {
            let record = BellPeriodRecord::from(period);
            sqlx::query(SQL)
                .bind(record.number)
                .bind(&record.start_time)
                .bind(&record.end_time)
                .bind(record.active)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        tracing::debug!(count = timetable.len(), "bell periods replaced");
        self.changes.notify();
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, ScheduleError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bell_periods;")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BellPeriodRecord {
    number: i64,
    start_time: String,
    end_time: String,
    active: bool,
}

impl BellPeriodRecord {
    fn into_period(self) -> Option<BellPeriod> {
        let number = match PeriodNumber::try_from(self.number) {
            Ok(number) => number,
            Err(err) => {
                tracing::warn!(number = self.number, %err, "skipping bell period");
                return None;
            }
        };

        let start = self.start_time.parse::<ClockTime>();
        let end = self.end_time.parse::<ClockTime>();
        match (start, end) {
            (Ok(start), Ok(end)) if start < end => Some(BellPeriod {
                number,
                start,
                end,
                active: self.active,
            }),
            _ => {
                tracing::warn!(
                    %number,
                    start = self.start_time,
                    end = self.end_time,
                    "malformed bell period times, falling back to the default times"
                );
                Some(BellPeriod {
                    active: self.active,
                    ..BellPeriod::default_for(number)
                })
            }
        }
    }
}

impl From<&BellPeriod> for BellPeriodRecord {
    fn from(period: &BellPeriod) -> Self {
        BellPeriodRecord {
            number: period.number.get().into(),
            start_time: period.start.to_string(),
            end_time: period.end.to_string(),
            active: period.active,
        }
    }
}
