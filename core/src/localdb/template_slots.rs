// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::localdb::ChangeFeed;
use crate::{DayOfWeek, PeriodNumber, ScheduleError, TemplateSlot, WeekParity};

#[derive(Debug, Clone)]
pub struct TemplateSlots {
    pool: SqlitePool,
    changes: ChangeFeed,
}

impl TemplateSlots {
    pub(crate) fn new(pool: SqlitePool, changes: ChangeFeed) -> Self {
        Self { pool, changes }
    }

    /// Stored slots of one parity, ordered by day then period.
    pub async fn get_template(&self, parity: WeekParity) -> Result<Vec<TemplateSlot>, ScheduleError> {
        const SQL: &str = "\
SELECT week_parity, day_of_week, period, subject, teacher, room
FROM template_slots
WHERE week_parity = ?
ORDER BY day_of_week ASC, period ASC, id ASC;
";

        let records: Vec<TemplateSlotRecord> = sqlx::query_as(SQL)
            .bind(parity.as_str())
            .fetch_all(&self.pool)
            .await?;

        Ok(records
            .into_iter()
            .filter_map(|record| match TemplateSlot::try_from(record) {
                Ok(slot) => Some(slot),
                Err(err) => {
                    tracing::warn!(%parity, %err, "skipping malformed template slot");
                    None
                }
            })
            .collect())
    }

    /// Atomically clears every slot of that parity and writes the given ones.
    pub async fn replace_template(
        &self,
        parity: WeekParity,
        slots: &[TemplateSlot],
    ) -> Result<(), ScheduleError> {
        if let Some(slot) = slots.iter().find(|s| s.parity != parity) {
            return Err(ScheduleError::ParityMismatch {
                expected: parity,
                got: slot.parity,
            });
        }

        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM template_slots WHERE week_parity = ?;")
            .bind(parity.as_str())
            .execute(&mut *tx)
            .await?;

        const SQL: &str = "\
INSERT INTO template_slots (week_parity, day_of_week, period, subject, teacher, room)
VALUES (?, ?, ?, ?, ?, ?);
";
        for slot in slots {
            sqlx::query(SQL)
                .bind(slot.parity.as_str())
                .bind(i64::from(slot.day.get()))
                .bind(i64::from(slot.period.get()))
                .bind(&slot.subject)
                .bind(&slot.teacher)
                .bind(&slot.room)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        tracing::debug!(%parity, count = slots.len(), "template replaced");
        self.changes.notify();
        Ok(())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TemplateSlotRecord {
    week_parity: String,
    day_of_week: i64,
    period: i64,
    subject: String,
    teacher: String,
    room: String,
}

impl TryFrom<TemplateSlotRecord> for TemplateSlot {
    type Error = ScheduleError;

    fn try_from(record: TemplateSlotRecord) -> Result<Self, Self::Error> {
        Ok(TemplateSlot {
            parity: record.week_parity.parse()?,
            day: DayOfWeek::try_from(record.day_of_week)?,
            period: PeriodNumber::try_from(record.period)?,
            subject: record.subject,
            teacher: record.teacher,
            room: record.room,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WeekTemplate;
    use crate::localdb::tests_utils::{setup_test_db, slot};

    #[tokio::test]
    async fn template_slots_replace_and_get_by_parity() {
        // Arrange
        let db = setup_test_db().await;
        let even = vec![slot(WeekParity::Even, 1, 1, "Math", "Smith", "201")];
        let odd = vec![slot(WeekParity::Odd, 2, 3, "History", "Jones", "105")];

        // Act
        db.template_slots
            .replace_template(WeekParity::Even, &even)
            .await
            .unwrap();
        db.template_slots
            .replace_template(WeekParity::Odd, &odd)
            .await
            .unwrap();

        // Assert
        let got = db.template_slots.get_template(WeekParity::Even).await.unwrap();
        assert_eq!(got, even);
        let got = db.template_slots.get_template(WeekParity::Odd).await.unwrap();
        assert_eq!(got, odd);
    }

    #[tokio::test]
    async fn template_slots_replace_leaves_other_parity_alone() {
        let db = setup_test_db().await;
        let odd = vec![slot(WeekParity::Odd, 2, 3, "History", "Jones", "105")];
        db.template_slots
            .replace_template(WeekParity::Odd, &odd)
            .await
            .unwrap();

        db.template_slots
            .replace_template(WeekParity::Even, &[])
            .await
            .unwrap();

        let got = db.template_slots.get_template(WeekParity::Odd).await.unwrap();
        assert_eq!(got, odd);
        let got = db.template_slots.get_template(WeekParity::Even).await.unwrap();
        assert!(got.is_empty());
    }

    #[tokio::test]
    async fn template_slots_keep_blank_rows() {
        let db = setup_test_db().await;
        let grid = WeekTemplate::complete(
            WeekParity::Even,
            [slot(WeekParity::Even, 1, 1, "Math", "Smith", "201")],
        );

        db.template_slots
            .replace_template(WeekParity::Even, &grid.clone().into_slots())
            .await
            .unwrap();

        let got = db.template_slots.get_template(WeekParity::Even).await.unwrap();
        assert_eq!(got.len(), 48);
        assert_eq!(got, grid.into_slots());
    }

    #[tokio::test]
    async fn template_slots_reject_wrong_parity() {
        let db = setup_test_db().await;
        let slots = vec![slot(WeekParity::Odd, 1, 1, "Math", "Smith", "201")];

        let result = db
            .template_slots
            .replace_template(WeekParity::Even, &slots)
            .await;

        assert!(matches!(
            result,
            Err(ScheduleError::ParityMismatch {
                expected: WeekParity::Even,
                got: WeekParity::Odd
            })
        ));
        assert!(
            db.template_slots
                .get_template(WeekParity::Odd)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
