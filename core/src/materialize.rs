// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Expands the week templates and the bell timetable into dated lessons.
//!
//! Each date of the window is rewritten in its own transaction. No transaction spans the
//! whole window: if a write fails, dates already processed keep their new lessons and the
//! remaining dates keep whatever they had before.

use std::collections::HashSet;

use jiff::civil::Date;

use crate::localdb::LocalDb;
use crate::{
    BellTimetable, DayOfWeek, Lesson, ParityRule, ScheduleError, TemplateSlot, WeekParity,
    week_monday,
};

/// The range of weeks, relative to the current week, kept materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeWindow {
    /// Weeks before the current one.
    pub weeks_back: u8,

    /// Weeks after the current one.
    pub weeks_forward: u8,

    /// Delete lessons dated outside the window after a complete run.
    pub prune_outside: bool,
}

impl Default for MaterializeWindow {
    fn default() -> Self {
        MaterializeWindow {
            weeks_back: 4,
            weeks_forward: 4,
            prune_outside: false,
        }
    }
}

impl MaterializeWindow {
    /// Monday of every week in the window around `today`, in order.
    pub fn mondays(&self, today: Date) -> impl Iterator<Item = Result<Date, jiff::Error>> {
        let this_week = week_monday(today);
        let back = -i64::from(self.weeks_back);
        let forward = i64::from(self.weeks_forward);
        (back..=forward).map(move |offset| {
            let monday = this_week.clone()?;
            monday.checked_add(jiff::Span::new().try_weeks(offset)?)
        })
    }
}

/// What a materialization run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct MaterializeReport {
    /// Both templates were empty, nothing was touched.
    pub skipped: bool,

    /// Date arithmetic failed and the rest of the window was abandoned.
    pub truncated: bool,

    /// Number of dates rewritten.
    pub dates: usize,

    /// Number of lessons written.
    pub lessons: usize,

    /// First date rewritten.
    pub first: Option<Date>,

    /// Last date rewritten.
    pub last: Option<Date>,

    /// Rows removed outside the window.
    pub pruned: u64,
}

impl MaterializeReport {
    fn skipped() -> Self {
        MaterializeReport {
            skipped: true,
            ..Default::default()
        }
    }

    fn record(&mut self, date: Date, lessons: usize) {
        self.dates += 1;
        self.lessons += lessons;
        self.first = Some(self.first.map_or(date, |d| d.min(date)));
        self.last = Some(self.last.map_or(date, |d| d.max(date)));
    }
}

/// Regenerates the lessons of every school day in the window around `today` from the current
/// bell timetable and both week templates.
#[tracing::instrument(skip(db))]
pub async fn materialize(
    db: &LocalDb,
    today: Date,
    window: &MaterializeWindow,
    rule: &ParityRule,
) -> Result<MaterializeReport, ScheduleError> {
    let bells = db.bell_periods.timetable().await?;
    let even = db.template_slots.get_template(WeekParity::Even).await?;
    let odd = db.template_slots.get_template(WeekParity::Odd).await?;

    if even.is_empty() && odd.is_empty() {
        tracing::debug!("both week templates are empty, nothing to materialize");
        return Ok(MaterializeReport::skipped());
    }

    let mut report = MaterializeReport::default();
    'window: for monday in window.mondays(today) {
        let monday = match monday {
            Ok(monday) => monday,
            Err(err) => {
                tracing::warn!(%err, "failed to compute week, abandoning the rest of the window");
                report.truncated = true;
                break;
            }
        };

        for day in DayOfWeek::all() {
            let planned = day
                .date_in_week(monday)
                .and_then(|date| rule.parity_of(date).map(|parity| (date, parity)));
            let (date, parity) = match planned {
                Ok(planned) => planned,
                Err(err) => {
                    tracing::warn!(%err, "failed to compute date, abandoning the rest of the window");
                    report.truncated = true;
                    break 'window;
                }
            };

            let template = match parity {
                WeekParity::Even => &even,
                WeekParity::Odd => &odd,
            };
            let lessons = expand_day(date, parity, day, template, &bells);
            db.lessons.replace_for_date(date, &lessons).await?;
            report.record(date, lessons.len());
        }
    }

    if window.prune_outside
        && !report.truncated
        && let (Some(first), Some(last)) = (report.first, report.last)
    {
        report.pruned = db.lessons.delete_outside(first, last).await?;
    }

    tracing::info!(
        dates = report.dates,
        lessons = report.lessons,
        pruned = report.pruned,
        truncated = report.truncated,
        "schedule materialized"
    );
    Ok(report)
}

/// The lessons of one date: slots of that day whose period exists and is active and whose
/// subject is not blank, timed by the bell timetable. The first slot of a period wins.
pub fn expand_day(
    date: Date,
    parity: WeekParity,
    day: DayOfWeek,
    template: &[TemplateSlot],
    bells: &BellTimetable,
) -> Vec<Lesson> {
    let mut seen = HashSet::new();
    let mut lessons: Vec<Lesson> = template
        .iter()
        .filter(|slot| slot.parity == parity && slot.day == day)
        .filter(|slot| seen.insert(slot.period))
        .filter(|slot| !slot.is_blank())
        .filter_map(|slot| {
            let bell = bells.active(slot.period)?;
            Some(Lesson {
                date,
                period: slot.period,
                subject: slot.subject.clone(),
                teacher: slot.teacher.clone(),
                room: slot.room.clone(),
                start: bell.start,
                end: bell.end,
                parity,
                day,
                is_replacement: false,
            })
        })
        .collect();
    lessons.sort_by_key(|l| l.period);
    lessons
}
