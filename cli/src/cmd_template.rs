// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use lessonbook_core::{DayOfWeek, PeriodNumber, Schedule, TemplateSlot, WeekParity};

use crate::arg::{ArgOutputFormat, SlotArgs};
use crate::cmd_schedule::print_report;
use crate::template_formatter::TemplateFormatter;

#[derive(Debug, Clone, Copy)]
pub struct CmdTemplateShow {
    pub parity: WeekParity,
    pub all: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdTemplateShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the template of an even or odd week")
            .arg(SlotArgs::parity())
            .arg(arg!(-a --all "Include empty slots"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            parity: SlotArgs::get_parity(matches),
            all: matches.get_flag("all"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing template...");
        let grid = schedule.template_grid(self.parity).await?;
        let slots: Vec<TemplateSlot> = grid
            .into_slots()
            .into_iter()
            .filter(|slot| self.all || !slot.is_blank())
            .collect();

        if slots.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", format!("The {} week template is empty", self.parity).italic());
            return Ok(());
        }

        let formatter = TemplateFormatter::new(self.output_format);
        print!("{}", formatter.format(&slots));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTemplateSet {
    pub parity: WeekParity,
    pub day: DayOfWeek,
    pub period: PeriodNumber,
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

impl CmdTemplateSet {
    pub const NAME: &str = "set";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Assign a lesson to one slot of a week template")
            .arg(SlotArgs::parity())
            .arg(SlotArgs::day())
            .arg(SlotArgs::period())
            .arg(arg!(-s --subject <SUBJECT> "Subject of the lesson").required(true))
            .arg(arg!(-t --teacher <TEACHER> "Teacher of the lesson"))
            .arg(arg!(-r --room <ROOM> "Room of the lesson"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let subject = matches
            .get_one::<String>("subject")
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        if subject.is_empty() {
            return Err("Subject must not be blank, use `template clear` to empty a slot".into());
        }

        Ok(Self {
            parity: SlotArgs::get_parity(matches),
            day: SlotArgs::get_day(matches),
            period: SlotArgs::get_period(matches),
            subject,
            teacher: matches.get_one("teacher").cloned().unwrap_or_default(),
            room: matches.get_one("room").cloned().unwrap_or_default(),
        })
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "setting template slot...");
        let report = schedule
            .set_template_slot(
                self.parity,
                self.day,
                self.period,
                &self.subject,
                &self.teacher,
                &self.room,
            )
            .await?;
        print_report(&report, ArgOutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdTemplateClear {
    pub parity: WeekParity,
    pub day: DayOfWeek,
    pub period: PeriodNumber,
}

impl CmdTemplateClear {
    pub const NAME: &str = "clear";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Empty one slot of a week template")
            .arg(SlotArgs::parity())
            .arg(SlotArgs::day())
            .arg(SlotArgs::period())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            parity: SlotArgs::get_parity(matches),
            day: SlotArgs::get_day(matches),
            period: SlotArgs::get_period(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "clearing template slot...");
        let report = schedule
            .clear_template_slot(self.parity, self.day, self.period)
            .await?;
        print_report(&report, ArgOutputFormat::Table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template_command() -> Command {
        Command::new("test")
            .subcommand(CmdTemplateShow::command())
            .subcommand(CmdTemplateSet::command())
            .subcommand(CmdTemplateClear::command())
    }

    #[test]
    fn test_parse_template_set() {
        let args = [
            "test", "set", "even", "tue", "2", "-s", " Math ", "-t", "Smith", "-r", "201",
        ];
        let matches = template_command().try_get_matches_from(args).unwrap();
        let sub_matches = matches.subcommand_matches(CmdTemplateSet::NAME).unwrap();

        let parsed = CmdTemplateSet::from(sub_matches).unwrap();

        assert_eq!(parsed.parity, WeekParity::Even);
        assert_eq!(parsed.day.get(), 2);
        assert_eq!(parsed.period.get(), 2);
        assert_eq!(parsed.subject, "Math");
        assert_eq!(parsed.teacher, "Smith");
        assert_eq!(parsed.room, "201");
    }

    #[test]
    fn test_parse_template_set_requires_subject() {
        let args = ["test", "set", "even", "tue", "2"];
        assert!(template_command().try_get_matches_from(args).is_err());

        let args = ["test", "set", "even", "tue", "2", "--subject", "  "];
        let matches = template_command().try_get_matches_from(args).unwrap();
        let sub_matches = matches.subcommand_matches(CmdTemplateSet::NAME).unwrap();
        assert!(CmdTemplateSet::from(sub_matches).is_err());
    }

    #[test]
    fn test_parse_template_show_and_clear() {
        let matches = template_command()
            .try_get_matches_from(["test", "show", "odd", "--all"])
            .unwrap();
        let show = CmdTemplateShow::from(matches.subcommand_matches("show").unwrap());
        assert_eq!(show.parity, WeekParity::Odd);
        assert!(show.all);

        let matches = template_command()
            .try_get_matches_from(["test", "clear", "odd", "6", "8"])
            .unwrap();
        let clear = CmdTemplateClear::from(matches.subcommand_matches("clear").unwrap());
        assert_eq!(clear.day, DayOfWeek::SATURDAY);
        assert_eq!(clear.period.get(), 8);
    }
}
