// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of lessonbook: bell timetable, even/odd week templates, and the lessons materialized
//! from them into a rolling window of dates. Homework tasks, attestations and notes are kept in
//! the same store.

mod attestation;
mod auth;
mod bell;
mod config;
mod debounce;
mod error;
mod lesson;
mod localdb;
mod materialize;
mod note;
mod parity;
pub mod query;
mod schedule;
mod task;
mod template;
mod types;

pub use crate::attestation::{Attestation, AttestationDraft};
pub use crate::auth::{AuthBackend, AuthError, AuthFlow, AuthStage, RemoteAuthState};
pub use crate::bell::{BellPeriod, BellTimetable};
pub use crate::config::{APP_NAME, Config, expand_path, get_config_dir};
pub use crate::debounce::Regenerator;
pub use crate::error::ScheduleError;
pub use crate::lesson::Lesson;
pub use crate::localdb::LocalDb;
pub use crate::materialize::{MaterializeReport, MaterializeWindow, expand_day, materialize};
pub use crate::note::{Note, NoteDraft, UNTITLED_NOTE};
pub use crate::parity::ParityRule;
pub use crate::query::{DaySchedule, DayWatch};
pub use crate::schedule::Schedule;
pub use crate::task::{Task, TaskDraft};
pub use crate::template::{TemplateSlot, WeekTemplate};
pub use crate::types::{
    ClockTime, DAYS_PER_WEEK, DayOfWeek, PERIODS_PER_DAY, PeriodNumber, WeekParity, week_dates,
    week_monday,
};
