// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use jiff::civil::{self, Date, Time, Weekday};

use crate::ScheduleError;

/// Number of bell periods in a school day.
pub const PERIODS_PER_DAY: u8 = 8;

/// Number of school days in a week, Monday to Saturday.
pub const DAYS_PER_WEEK: u8 = 6;

/// NOTE: Used for storing in the database, so it should be stable across different runs.
pub(crate) const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";

/// A bell period number, from 1 to 8.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct PeriodNumber(u8);

impl PeriodNumber {
    /// Returns the raw period number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// All period numbers of a day, in order.
    pub fn all() -> impl Iterator<Item = PeriodNumber> {
        (1..=PERIODS_PER_DAY).map(PeriodNumber)
    }
}

impl TryFrom<u8> for PeriodNumber {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=PERIODS_PER_DAY => Ok(PeriodNumber(value)),
            _ => Err(ScheduleError::InvalidPeriod(value.to_string())),
        }
    }
}

impl TryFrom<i64> for PeriodNumber {
    type Error = ScheduleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ScheduleError::InvalidPeriod(value.to_string()))
            .and_then(PeriodNumber::try_from)
    }
}

impl From<PeriodNumber> for u8 {
    fn from(value: PeriodNumber) -> Self {
        value.0
    }
}

impl fmt::Display for PeriodNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PeriodNumber {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| ScheduleError::InvalidPeriod(s.to_string()))?
            .try_into()
    }
}

/// A school day, Monday (1) to Saturday (6). Sunday is never a school day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const MONDAY: DayOfWeek = DayOfWeek(1);
    pub const SATURDAY: DayOfWeek = DayOfWeek(6);

    /// Returns the raw day number, 1 for Monday.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// All school days of a week, in order.
    pub fn all() -> impl Iterator<Item = DayOfWeek> {
        (1..=DAYS_PER_WEEK).map(DayOfWeek)
    }

    /// The school day of the given date, or `None` on Sundays.
    pub fn of(date: Date) -> Option<DayOfWeek> {
        Self::from_weekday(date.weekday())
    }

    pub fn from_weekday(weekday: Weekday) -> Option<DayOfWeek> {
        match weekday {
            Weekday::Sunday => None,
            w => Some(DayOfWeek(w.to_monday_one_offset() as u8)),
        }
    }

    pub fn weekday(self) -> Weekday {
        Weekday::from_monday_one_offset(self.0 as i8).unwrap_or(Weekday::Monday)
    }

    /// The date of this day in the week starting at `monday`.
    pub fn date_in_week(self, monday: Date) -> Result<Date, jiff::Error> {
        monday.checked_add(jiff::Span::new().try_days(i64::from(self.0 - 1))?)
    }

    /// Short English name, e.g. "Mon".
    pub fn short_name(self) -> &'static str {
        match self.0 {
            1 => "Mon",
            2 => "Tue",
            3 => "Wed",
            4 => "Thu",
            5 => "Fri",
            _ => "Sat",
        }
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=DAYS_PER_WEEK => Ok(DayOfWeek(value)),
            _ => Err(ScheduleError::InvalidDay(value.to_string())),
        }
    }
}

impl TryFrom<i64> for DayOfWeek {
    type Error = ScheduleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ScheduleError::InvalidDay(value.to_string()))
            .and_then(DayOfWeek::try_from)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(value: DayOfWeek) -> Self {
        value.0
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for DayOfWeek {
    type Err = ScheduleError;

    /// Accepts a day number (1-6) or an English day name / prefix, e.g. "mon", "Tuesday".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return n.try_into();
        }

        let lower = s.to_lowercase();
        const NAMES: [&str; 6] = [
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
        ];
        NAMES
            .iter()
            .position(|name| lower.len() >= 2 && name.starts_with(&lower))
            .map(|i| DayOfWeek(i as u8 + 1))
            .ok_or_else(|| ScheduleError::InvalidDay(s.to_string()))
    }
}

/// Week parity of an alternating timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum WeekParity {
    /// Even week.
    Even,

    /// Odd week.
    Odd,
}

impl WeekParity {
    /// Parity of a week number.
    pub fn of_week_number(week: i64) -> Self {
        match week.rem_euclid(2) {
            0 => WeekParity::Even,
            _ => WeekParity::Odd,
        }
    }

    /// The other parity.
    pub fn flip(self) -> Self {
        match self {
            WeekParity::Even => WeekParity::Odd,
            WeekParity::Odd => WeekParity::Even,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            WeekParity::Even => "even",
            WeekParity::Odd => "odd",
        }
    }
}

impl fmt::Display for WeekParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekParity {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "even" => Ok(WeekParity::Even),
            "odd" => Ok(WeekParity::Odd),
            _ => Err(ScheduleError::InvalidParity(s.to_string())),
        }
    }
}

/// A wall-clock time with minute precision, written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(Time);

impl ClockTime {
    /// Creates a time from hour and minute.
    pub fn new(hour: i8, minute: i8) -> Result<Self, ScheduleError> {
        Time::new(hour, minute, 0, 0)
            .map(ClockTime)
            .map_err(|_| ScheduleError::InvalidTime(format!("{hour:02}:{minute:02}")))
    }

    /// Same as [`ClockTime::new`], for values known to be in range.
    pub(crate) const fn constant(hour: i8, minute: i8) -> Self {
        ClockTime(civil::time(hour, minute, 0, 0))
    }

    pub fn hour(self) -> i8 {
        self.0.hour()
    }

    pub fn minute(self) -> i8 {
        self.0.minute()
    }

    pub fn time(self) -> Time {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    /// Parses strictly `HH:MM`, two digits each.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidTime(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(invalid());
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: i8 = h.parse().map_err(|_| invalid())?;
        let minute: i8 = m.parse().map_err(|_| invalid())?;
        Time::new(hour, minute, 0, 0)
            .map(ClockTime)
            .map_err(|_| invalid())
    }
}

impl serde::Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ClockTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Monday of the week containing the given date.
pub fn week_monday(date: Date) -> Result<Date, jiff::Error> {
    let back = i64::from(date.weekday().to_monday_zero_offset());
    date.checked_sub(jiff::Span::new().try_days(back)?)
}

/// Monday through Sunday of the week containing the given date.
pub fn week_dates(date: Date) -> Result<Vec<Date>, jiff::Error> {
    let monday = week_monday(date)?;
    (0..7)
        .map(|i| monday.checked_add(jiff::Span::new().try_days(i)?))
        .collect()
}

pub(crate) fn format_date(date: Date) -> String {
    date.strftime(STABLE_FORMAT_DATEONLY).to_string()
}
