// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::{Path, PathBuf};

use jiff::civil::{Date, date};
use lessonbook_core::{
    BellPeriod, Config, DayOfWeek, ParityRule, PeriodNumber, Schedule, TemplateSlot, WeekParity,
};

/// Wednesday of ISO week 43 (odd); the default window spans 2026-09-21 to 2026-11-21.
pub fn wednesday_oct_21() -> Date {
    date(2026, 10, 21)
}

/// Creates a configuration that keeps its state in `state_dir`, or in memory.
#[must_use]
pub fn test_config(state_dir: Option<&Path>) -> Config {
    TestConfigBuilder::new().with_state_dir_opt(state_dir).build()
}

/// Opens an in-memory schedule with default configuration around 2026-10-21.
pub async fn open_in_memory() -> Schedule {
    Schedule::open(test_config(None), wednesday_oct_21())
        .await
        .expect("in-memory schedule should open")
}

pub fn period(n: u8) -> PeriodNumber {
    PeriodNumber::try_from(n).expect("valid period number")
}

pub fn bell(n: u8, start: &str, end: &str, active: bool) -> BellPeriod {
    BellPeriod {
        number: period(n),
        start: start.parse().expect("valid start time"),
        end: end.parse().expect("valid end time"),
        active,
    }
}

pub fn slot(
    parity: WeekParity,
    day: DayOfWeek,
    n: u8,
    subject: &str,
    teacher: &str,
    room: &str,
) -> TemplateSlot {
    TemplateSlot {
        parity,
        day,
        period: period(n),
        subject: subject.to_string(),
        teacher: teacher.to_string(),
        room: room.to_string(),
    }
}

/// Builder for test configurations.
#[derive(Debug, Default)]
pub struct TestConfigBuilder {
    config: Config,
}

impl TestConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_state_dir(self, state_dir: &Path) -> Self {
        self.with_state_dir_opt(Some(state_dir))
    }

    #[must_use]
    pub fn with_state_dir_opt(mut self, state_dir: Option<&Path>) -> Self {
        self.config.state_dir = state_dir.map(PathBuf::from);
        self
    }

    #[must_use]
    #[allow(dead_code)]
    pub fn with_weeks(mut self, back: u8, forward: u8) -> Self {
        self.config.weeks_back = back;
        self.config.weeks_forward = forward;
        self
    }

    #[must_use]
    #[allow(dead_code)]
    pub fn with_prune(mut self, prune: bool) -> Self {
        self.config.prune_outside_window = prune;
        self
    }

    #[must_use]
    #[allow(dead_code)]
    pub fn with_parity(mut self, parity: ParityRule) -> Self {
        self.config.parity = parity;
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
