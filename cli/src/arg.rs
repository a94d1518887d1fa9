// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::ToSpan;
use jiff::civil::Date;
use lessonbook_core::{ClockTime, DayOfWeek, PeriodNumber, WeekParity};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// A date given on the command line, resolved against today when the command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgDate {
    Today,
    Tomorrow,
    Yesterday,
    Date(Date),
}

impl ArgDate {
    pub fn arg() -> Arg {
        arg!(date: [DATE] "Date as YYYY-MM-DD, or today, tomorrow, yesterday")
            .value_parser(ArgDate::from_str)
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches.get_one("date").copied().unwrap_or(ArgDate::Today)
    }

    pub fn resolve(self, today: Date) -> Result<Date, jiff::Error> {
        match self {
            ArgDate::Today => Ok(today),
            ArgDate::Tomorrow => today.checked_add(1.day()),
            ArgDate::Yesterday => today.checked_sub(1.day()),
            ArgDate::Date(date) => Ok(date),
        }
    }
}

impl FromStr for ArgDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" | "t" => Ok(ArgDate::Today),
            "tomorrow" => Ok(ArgDate::Tomorrow),
            "yesterday" => Ok(ArgDate::Yesterday),
            other => other
                .parse::<Date>()
                .map(ArgDate::Date)
                .map_err(|_| format!("Invalid date '{s}'. Expected format: YYYY-MM-DD")),
        }
    }
}

/// Arguments addressing one slot of a week template.
#[derive(Debug, Clone, Copy)]
pub struct SlotArgs;

impl SlotArgs {
    pub fn parity() -> Arg {
        arg!(parity: <PARITY> "Week parity of the template").value_parser(value_parser!(WeekParity))
    }

    pub fn get_parity(matches: &ArgMatches) -> WeekParity {
        *matches
            .get_one::<WeekParity>("parity")
            .expect("parity is required")
    }

    pub fn day() -> Arg {
        arg!(day: <DAY> "School day, 1-6 or a name such as mon").value_parser(DayOfWeek::from_str)
    }

    pub fn get_day(matches: &ArgMatches) -> DayOfWeek {
        *matches.get_one::<DayOfWeek>("day").expect("day is required")
    }

    pub fn period() -> Arg {
        arg!(period: <PERIOD> "Period number, 1-8").value_parser(PeriodNumber::from_str)
    }

    pub fn get_period(matches: &ArgMatches) -> PeriodNumber {
        *matches.get_one::<PeriodNumber>("period").expect("period is required")
    }
}

pub fn arg_start() -> Arg {
    arg!(--start <START> "Start time, HH:MM").value_parser(ClockTime::from_str)
}

pub fn get_start(matches: &ArgMatches) -> Option<ClockTime> {
    matches.get_one("start").copied()
}

pub fn arg_end() -> Arg {
    arg!(--end <END> "End time, HH:MM").value_parser(ClockTime::from_str)
}

pub fn get_end(matches: &ArgMatches) -> Option<ClockTime> {
    matches.get_one("end").copied()
}

/// Id of a task, attestation or note, as shown by the list commands.
pub fn arg_id() -> Arg {
    arg!(id: <ID> "Id of the entry, as shown by list").value_parser(value_parser!(i64))
}

pub fn get_id(matches: &ArgMatches) -> i64 {
    *matches.get_one::<i64>("id").expect("id is required")
}
