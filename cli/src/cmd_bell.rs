// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use lessonbook_core::{BellPeriod, ClockTime, PeriodNumber, Schedule};

use crate::arg::{ArgOutputFormat, SlotArgs, arg_end, arg_start, get_end, get_start};
use crate::bell_formatter::BellFormatter;
use crate::cmd_schedule::print_report;

#[derive(Debug, Clone, Copy)]
pub struct CmdBellList {
    pub output_format: ArgOutputFormat,
}

impl CmdBellList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the bell periods")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing bell periods...");
        let periods = schedule.bell_periods().await?;
        let formatter = BellFormatter::new(self.output_format);
        print!("{}", formatter.format(&periods));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdBellSet {
    pub period: PeriodNumber,
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
    pub active: Option<bool>,
}

impl CmdBellSet {
    pub const NAME: &str = "set";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Change the times or state of one bell period")
            .arg(SlotArgs::period())
            .arg(arg_start())
            .arg(arg_end())
            .arg(arg!(--active "Switch the period on").conflicts_with("inactive"))
            .arg(arg!(--inactive "Switch the period off"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let active = match (matches.get_flag("active"), matches.get_flag("inactive")) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        Self {
            period: SlotArgs::get_period(matches),
            start: get_start(matches),
            end: get_end(matches),
            active,
        }
    }

    /// Applies the requested changes on top of the current definition.
    pub fn apply(&self, current: BellPeriod) -> BellPeriod {
        BellPeriod {
            number: self.period,
            start: self.start.unwrap_or(current.start),
            end: self.end.unwrap_or(current.end),
            active: self.active.unwrap_or(current.active),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "setting bell period...");
        let timetable = schedule.bell_timetable().await?;
        let current = timetable
            .get(self.period)
            .copied()
            .unwrap_or_else(|| BellPeriod::default_for(self.period));

        let report = schedule.set_bell_period(self.apply(current)).await?;
        print_report(&report, ArgOutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdBellReset;

impl CmdBellReset {
    pub const NAME: &str = "reset";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Restore the default bell periods")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!("resetting bell periods...");
        let report = schedule.reset_bell_periods().await?;
        print_report(&report, ArgOutputFormat::Table)
    }
}
