// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::{ClockTime, PeriodNumber, ScheduleError};

/// A numbered class slot with fixed start and end time, independent of subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BellPeriod {
    /// Period number, 1 to 8.
    pub number: PeriodNumber,

    /// When the period starts.
    pub start: ClockTime,

    /// When the period ends, strictly after `start`.
    pub end: ClockTime,

    /// Inactive periods never carry lessons.
    pub active: bool,
}

impl BellPeriod {
    /// The default definition of a period: period *n* runs from `08:00 + 2h·(n-1)` for
    /// fifty minutes, periods 1 to 6 are active.
    pub fn default_for(number: PeriodNumber) -> Self {
        let hour = 8 + 2 * (number.get() as i8 - 1);
        BellPeriod {
            number,
            start: ClockTime::constant(hour, 0),
            end: ClockTime::constant(hour, 50),
            active: number.get() <= 6,
        }
    }

    /// The full default timetable used to seed an empty store.
    pub fn defaults() -> Vec<BellPeriod> {
        PeriodNumber::all().map(BellPeriod::default_for).collect()
    }

    fn validate(&self) -> Result<(), ScheduleError> {
        if self.start >= self.end {
            return Err(ScheduleError::InvalidBellPeriod {
                number: self.number.get(),
                reason: format!("start {} is not before end {}", self.start, self.end),
            });
        }
        Ok(())
    }
}

/// The bell timetable of a day, keyed by period number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BellTimetable {
    periods: BTreeMap<PeriodNumber, BellPeriod>,
}

impl BellTimetable {
    /// Builds a timetable, checking that numbers are unique and every start precedes its end.
    pub fn new(periods: impl IntoIterator<Item = BellPeriod>) -> Result<Self, ScheduleError> {
        let mut map = BTreeMap::new();
        for period in periods {
            period.validate()?;
            if map.insert(period.number, period).is_some() {
                return Err(ScheduleError::InvalidBellPeriod {
                    number: period.number.get(),
                    reason: "duplicate period number".to_string(),
                });
            }
        }
        Ok(BellTimetable { periods: map })
    }

    /// The seeded default timetable.
    pub fn defaults() -> Self {
        BellTimetable {
            periods: BellPeriod::defaults()
                .into_iter()
                .map(|p| (p.number, p))
                .collect(),
        }
    }

    pub fn get(&self, number: PeriodNumber) -> Option<&BellPeriod> {
        self.periods.get(&number)
    }

    /// The period of that number if it exists and is active.
    pub fn active(&self, number: PeriodNumber) -> Option<&BellPeriod> {
        self.get(number).filter(|p| p.active)
    }

    pub fn active_numbers(&self) -> Vec<PeriodNumber> {
        self.periods.values().filter(|p| p.active).map(|p| p.number).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Periods ordered by number.
    pub fn iter(&self) -> impl Iterator<Item = &BellPeriod> {
        self.periods.values()
    }

    pub fn to_vec(&self) -> Vec<BellPeriod> {
        self.periods.values().copied().collect()
    }

    /// Fills in the default definition for every missing period, so editors always work on
    /// the complete set of eight.
    pub fn complete(mut self) -> Self {
        for number in PeriodNumber::all() {
            self.periods
                .entry(number)
                .or_insert_with(|| BellPeriod::default_for(number));
        }
        self
    }

    /// Returns the complete timetable with one period replaced.
    pub fn with_period(self, period: BellPeriod) -> Result<Self, ScheduleError> {
        period.validate()?;
        let mut that = self.complete();
        that.periods.insert(period.number, period);
        Ok(that)
    }
}
