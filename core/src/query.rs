// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use futures::Stream;
use jiff::civil::Date;
use tokio::sync::watch;

use crate::localdb::LocalDb;
use crate::{BellTimetable, Lesson, PeriodNumber, ScheduleError};

/// The lessons of one date as a presenter shows them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DaySchedule {
    pub date: Date,

    /// Lessons of active periods with a subject, ordered by period, timed by the current bells.
    pub lessons: Vec<Lesson>,

    /// Whether any materialized lesson with a subject exists for the date, active or not.
    pub has_any_lessons: bool,

    /// Currently active period numbers.
    pub active_periods: Vec<PeriodNumber>,
}

impl DaySchedule {
    /// Cross-references materialized lessons with the current bell timetable.
    ///
    /// Lessons whose period has been switched off (or removed) since materialization are
    /// dropped, and the remaining ones take the current bell times.
    pub fn build(date: Date, lessons: Vec<Lesson>, bells: &BellTimetable) -> Self {
        let has_any_lessons = lessons.iter().any(|l| !l.subject.trim().is_empty());
        let mut lessons: Vec<Lesson> = lessons
            .into_iter()
            .filter(|l| !l.subject.trim().is_empty())
            .filter_map(|lesson| {
                let bell = bells.active(lesson.period)?;
                Some(Lesson {
                    start: bell.start,
                    end: bell.end,
                    ..lesson
                })
            })
            .collect();
        lessons.sort_by_key(|l| l.period);

        DaySchedule {
            date,
            lessons,
            has_any_lessons,
            active_periods: bells.active_numbers(),
        }
    }

    /// Every lesson of the day is in a period that is currently switched off.
    pub fn all_periods_inactive(&self) -> bool {
        self.lessons.is_empty() && self.has_any_lessons
    }
}

/// Raw materialized lessons of one date, ordered by period.
pub async fn lessons_for_date(db: &LocalDb, date: Date) -> Result<Vec<Lesson>, ScheduleError> {
    db.lessons.list_for_date(date).await
}

/// The presented schedule of one date.
pub async fn day(db: &LocalDb, date: Date) -> Result<DaySchedule, ScheduleError> {
    let lessons = db.lessons.list_for_date(date).await?;
    let bells = db.bell_periods.timetable().await?;
    Ok(DaySchedule::build(date, lessons, &bells))
}

/// A live view of one date: yields the schedule once, then again after every write to the
/// store.
#[derive(Debug)]
pub struct DayWatch {
    db: LocalDb,
    date: Date,
    rx: watch::Receiver<u64>,
    primed: bool,
}

impl DayWatch {
    pub(crate) fn new(db: LocalDb, date: Date) -> Self {
        let rx = db.subscribe();
        DayWatch {
            db,
            date,
            rx,
            primed: false,
        }
    }

    pub fn date(&self) -> Date {
        self.date
    }

    /// Waits for the next version of the schedule. The first call returns immediately.
    ///
    /// Writes that land while the caller is busy are coalesced into one update.
    pub async fn next(&mut self) -> Result<Option<DaySchedule>, ScheduleError> {
        if self.primed {
            if self.rx.changed().await.is_err() {
                return Ok(None);
            }
        } else {
            self.primed = true;
        }
        self.rx.borrow_and_update();
        day(&self.db, self.date).await.map(Some)
    }

    /// Turns the watch into a stream of schedules.
    pub fn into_stream(self) -> impl Stream<Item = Result<DaySchedule, ScheduleError>> {
        futures::stream::unfold(self, |mut watch| async move {
            match watch.next().await {
                Ok(Some(schedule)) => Some((Ok(schedule), watch)),
                Ok(None) => None,
                Err(err) => Some((Err(err), watch)),
            }
        })
    }
}
