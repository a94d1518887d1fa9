// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::{ClockTime, DayOfWeek, PeriodNumber, WeekParity};

/// A concrete, dated lesson derived from a template slot and the bell timetable.
///
/// Materialized lessons are never edited by hand; the materializer owns them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Lesson {
    pub date: Date,
    pub period: PeriodNumber,
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub start: ClockTime,
    pub end: ClockTime,
    pub parity: WeekParity,
    pub day: DayOfWeek,
    pub is_replacement: bool,
}
