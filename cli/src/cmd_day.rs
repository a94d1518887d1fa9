// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use lessonbook_core::{DayOfWeek, DaySchedule, Lesson, Schedule};

use crate::arg::{ArgDate, ArgOutputFormat};
use crate::lesson_formatter::LessonFormatter;

/// Show the lessons of one date.
#[derive(Debug, Clone, Copy)]
pub struct CmdDay {
    pub date: ArgDate,
    pub output_format: ArgOutputFormat,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("Show the lessons of a day")
            .arg(ArgDate::arg())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: ArgDate::from(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    /// The command run without a subcommand: today's lessons.
    pub fn today() -> Self {
        Self {
            date: ArgDate::Today,
            output_format: ArgOutputFormat::Table,
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing day...");
        let date = self.date.resolve(schedule.today())?;
        let day = schedule.day(date).await?;

        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&day)?),
            ArgOutputFormat::Table => {
                let parity = schedule.parity_of(date)?;
                println!("{}", format!("{date} {:?} ({parity} week)", date.weekday()).bold());
                print!("{}", render_day(&day));
            }
        }
        Ok(())
    }
}

/// Show the lessons of the week containing a date.
#[derive(Debug, Clone, Copy)]
pub struct CmdWeek {
    pub date: ArgDate,
    pub output_format: ArgOutputFormat,
}

impl CmdWeek {
    pub const NAME: &str = "week";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("w")
            .about("Show the lessons of a week, Monday to Sunday")
            .arg(ArgDate::arg())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: ArgDate::from(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing week...");
        let date = self.date.resolve(schedule.today())?;
        let days = schedule.week(date).await?;

        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&days)?),
            ArgOutputFormat::Table => {
                let parity = schedule.parity_of(date)?;
                let monday = days.first().map(|d| d.date).unwrap_or(date);
                println!("{}", format!("Week of {monday} ({parity} week)").bold());

                let lessons: Vec<Lesson> = days.into_iter().flat_map(|d| d.lessons).collect();
                if lessons.is_empty() {
                    println!("{}", "No lessons this week".italic());
                } else {
                    print!("{}", LessonFormatter::new().with_date().format(&lessons));
                }
            }
        }
        Ok(())
    }
}

fn render_day(day: &DaySchedule) -> String {
    if DayOfWeek::of(day.date).is_none() {
        format!("{}\n", "No school on Sunday".italic())
    } else if day.all_periods_inactive() {
        format!("{}\n", "All periods of this day are switched off".italic())
    } else if day.lessons.is_empty() {
        format!("{}\n", "No lessons".italic())
    } else {
        LessonFormatter::new().format(&day.lessons).to_string()
    }
}
