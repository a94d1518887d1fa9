// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use tokio::sync::watch;

use crate::localdb::LocalDb;
use crate::query::{self, DaySchedule, DayWatch};
use crate::{
    Attestation, AttestationDraft, BellPeriod, BellTimetable, Config, DayOfWeek, Lesson,
    MaterializeReport, MaterializeWindow, Note, NoteDraft, PeriodNumber, Regenerator,
    ScheduleError, Task, TaskDraft, TemplateSlot, WeekParity, WeekTemplate, materialize,
    week_dates,
};

/// Schedule application core.
#[derive(Debug, Clone)]
pub struct Schedule {
    today: Date,
    config: Config,
    db: LocalDb,
}

impl Schedule {
    /// Opens the schedule described by the configuration.
    ///
    /// An empty bell timetable is seeded with the defaults, and the window around `today` is
    /// materialized when no lessons exist yet.
    pub async fn open(config: Config, today: Date) -> Result<Self, ScheduleError> {
        if let Some(state_dir) = &config.state_dir {
            tokio::fs::create_dir_all(state_dir).await?;
        }
        let db = LocalDb::open(config.db_path().as_deref()).await?;

        if db.bell_periods.count().await? == 0 {
            tracing::info!("seeding the default bell timetable");
            db.bell_periods.replace_all(&BellPeriod::defaults()).await?;
        }

        let that = Schedule { today, config, db };
        if that.db.lessons.count().await? == 0 {
            tracing::info!(%today, "no materialized lessons, generating the window");
            that.regenerate().await?;
        }
        Ok(that)
    }

    /// The date the materialization window is centered on.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Moves the window center to the current local date.
    pub fn refresh_today(&mut self) {
        self.today = jiff::Zoned::now().date();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn window(&self) -> MaterializeWindow {
        self.config.window()
    }

    pub fn parity_of(&self, date: Date) -> Result<WeekParity, ScheduleError> {
        Ok(self.config.parity.parity_of(date)?)
    }

    /// Stored bell periods ordered by number.
    pub async fn bell_periods(&self) -> Result<Vec<BellPeriod>, ScheduleError> {
        self.db.bell_periods.get_all().await
    }

    pub async fn bell_timetable(&self) -> Result<BellTimetable, ScheduleError> {
        self.db.bell_periods.timetable().await
    }

    /// Replaces the whole bell timetable and regenerates the window.
    pub async fn set_bell_periods(
        &self,
        periods: &[BellPeriod],
    ) -> Result<MaterializeReport, ScheduleError> {
        self.store_bell_periods(periods).await?;
        self.regenerate().await
    }

    /// Replaces the whole bell timetable without regenerating, for editors that trigger a
    /// [`Regenerator`] instead. Queries see the new timetable right away.
    pub async fn store_bell_periods(&self, periods: &[BellPeriod]) -> Result<(), ScheduleError> {
        self.db.bell_periods.replace_all(periods).await
    }

    /// Replaces one period, filling any missing ones with their defaults.
    pub async fn set_bell_period(
        &self,
        period: BellPeriod,
    ) -> Result<MaterializeReport, ScheduleError> {
        let timetable = self.bell_timetable().await?.with_period(period)?;
        self.set_bell_periods(&timetable.to_vec()).await
    }

    /// Restores the default bell timetable.
    pub async fn reset_bell_periods(&self) -> Result<MaterializeReport, ScheduleError> {
        self.set_bell_periods(&BellPeriod::defaults()).await
    }

    /// Stored slots of one parity.
    pub async fn template(&self, parity: WeekParity) -> Result<Vec<TemplateSlot>, ScheduleError> {
        self.db.template_slots.get_template(parity).await
    }

    /// The full 6 × 8 grid of one parity.
    pub async fn template_grid(&self, parity: WeekParity) -> Result<WeekTemplate, ScheduleError> {
        let stored = self.template(parity).await?;
        Ok(WeekTemplate::complete(parity, stored))
    }

    /// Replaces the template of one parity and regenerates the window.
    pub async fn set_template(
        &self,
        parity: WeekParity,
        slots: &[TemplateSlot],
    ) -> Result<MaterializeReport, ScheduleError> {
        self.db.template_slots.replace_template(parity, slots).await?;
        self.regenerate().await
    }

    /// Sets one slot of a template.
    pub async fn set_template_slot(
        &self,
        parity: WeekParity,
        day: DayOfWeek,
        period: PeriodNumber,
        subject: &str,
        teacher: &str,
        room: &str,
    ) -> Result<MaterializeReport, ScheduleError> {
        let mut grid = self.template_grid(parity).await?;
        grid.set(day, period, subject, teacher, room);
        self.set_template(parity, &grid.into_slots()).await
    }

    /// Blanks one slot of a template.
    pub async fn clear_template_slot(
        &self,
        parity: WeekParity,
        day: DayOfWeek,
        period: PeriodNumber,
    ) -> Result<MaterializeReport, ScheduleError> {
        let mut grid = self.template_grid(parity).await?;
        grid.clear(day, period);
        self.set_template(parity, &grid.into_slots()).await
    }

    /// Rebuilds the materialized window around today.
    pub async fn regenerate(&self) -> Result<MaterializeReport, ScheduleError> {
        materialize(&self.db, self.today, &self.window(), &self.config.parity).await
    }

    /// Deletes every materialized lesson, templates and bells stay.
    pub async fn clear_materialized(&self) -> Result<u64, ScheduleError> {
        self.db.lessons.clear().await
    }

    /// Starts a debounced regeneration worker on this schedule.
    pub fn regenerator(&self) -> Regenerator {
        Regenerator::spawn(
            self.db.clone(),
            self.today,
            self.window(),
            self.config.parity,
            self.config.debounce(),
        )
    }

    pub async fn lessons_for_date(&self, date: Date) -> Result<Vec<Lesson>, ScheduleError> {
        query::lessons_for_date(&self.db, date).await
    }

    pub async fn day(&self, date: Date) -> Result<DaySchedule, ScheduleError> {
        query::day(&self.db, date).await
    }

    /// Schedules of Monday to Sunday of the week containing `date`.
    pub async fn week(&self, date: Date) -> Result<Vec<DaySchedule>, ScheduleError> {
        let mut days = Vec::with_capacity(7);
        for date in week_dates(date)? {
            days.push(self.day(date).await?);
        }
        Ok(days)
    }

    /// Whether any lesson is materialized at all.
    pub async fn has_any_lessons(&self) -> Result<bool, ScheduleError> {
        Ok(self.db.lessons.count().await? > 0)
    }

    pub fn watch_day(&self, date: Date) -> DayWatch {
        DayWatch::new(self.db.clone(), date)
    }

    /// Tasks still to do, soonest due first.
    pub async fn tasks(&self) -> Result<Vec<Task>, ScheduleError> {
        self.db.tasks.get_active().await
    }

    /// Archived tasks, latest due first.
    pub async fn archived_tasks(&self) -> Result<Vec<Task>, ScheduleError> {
        self.db.tasks.get_archived().await
    }

    pub async fn add_task(&self, draft: &TaskDraft) -> Result<Task, ScheduleError> {
        self.db.tasks.insert(draft).await
    }

    /// Moves a task in or out of the archive.
    pub async fn set_task_archived(&self, id: i64, archived: bool) -> Result<(), ScheduleError> {
        found(self.db.tasks.set_archived(id, archived).await?, "task", id)
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), ScheduleError> {
        found(self.db.tasks.delete(id).await?, "task", id)
    }

    /// Every attestation by date.
    pub async fn attestations(&self) -> Result<Vec<Attestation>, ScheduleError> {
        self.db.attestations.get_all().await
    }

    pub async fn add_attestation(
        &self,
        draft: &AttestationDraft,
    ) -> Result<Attestation, ScheduleError> {
        self.db.attestations.insert(draft).await
    }

    pub async fn delete_attestation(&self, id: i64) -> Result<(), ScheduleError> {
        found(self.db.attestations.delete(id).await?, "attestation", id)
    }

    /// Every note, newest first.
    pub async fn notes(&self) -> Result<Vec<Note>, ScheduleError> {
        self.db.notes.get_all().await
    }

    /// Stores a note stamped with the current time.
    pub async fn add_note(&self, draft: &NoteDraft) -> Result<Note, ScheduleError> {
        self.db.notes.insert(draft, jiff::Timestamp::now()).await
    }

    pub async fn delete_note(&self, id: i64) -> Result<(), ScheduleError> {
        found(self.db.notes.delete(id).await?, "note", id)
    }

    /// Subscribes to the store revision, bumped after every committed write.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.db.subscribe()
    }

    pub async fn close(self) {
        self.db.close().await;
    }
}

fn found(found: bool, kind: &'static str, id: i64) -> Result<(), ScheduleError> {
    if found {
        Ok(())
    } else {
        Err(ScheduleError::NotFound { kind, id })
    }
}
