// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use lessonbook_core::{MaterializeReport, Schedule};

use crate::arg::{ArgDate, ArgOutputFormat};

/// Rebuild the materialized window from the current templates and bells.
#[derive(Debug, Clone, Copy)]
pub struct CmdRegenerate {
    pub output_format: ArgOutputFormat,
}

impl CmdRegenerate {
    pub const NAME: &str = "regenerate";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("regen")
            .about("Regenerate the lessons of the window around today")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "regenerating schedule...");
        schedule.refresh_today();
        let report = schedule.regenerate().await?;
        print_report(&report, self.output_format)
    }
}

/// Delete every materialized lesson.
#[derive(Debug, Clone, Copy)]
pub struct CmdClearGenerated;

impl CmdClearGenerated {
    pub const NAME: &str = "clear-generated";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Delete all generated lessons, keeping templates and bells")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!("clearing generated lessons...");
        let removed = schedule.clear_materialized().await?;
        println!("Removed {removed} generated lessons");
        Ok(())
    }
}

/// Show the week parity of a date.
#[derive(Debug, Clone, Copy)]
pub struct CmdParity {
    pub date: ArgDate,
}

impl CmdParity {
    pub const NAME: &str = "parity";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show whether a date falls in an even or odd week")
            .arg(ArgDate::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: ArgDate::from(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        let date = self.date.resolve(schedule.today())?;
        let parity = schedule.parity_of(date)?;
        println!("{date}: {parity}");
        Ok(())
    }
}

/// Prints the outcome of a materialization run.
pub fn print_report(
    report: &MaterializeReport,
    output_format: ArgOutputFormat,
) -> Result<(), Box<dyn Error>> {
    match output_format {
        ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        ArgOutputFormat::Table => println!("{}", summarize(report)),
    }
    Ok(())
}

fn summarize(report: &MaterializeReport) -> String {
    if report.skipped {
        return "Both week templates are empty, nothing generated".to_string();
    }

    let mut out = format!(
        "Generated {} lessons on {} dates",
        report.lessons, report.dates
    );
    if let (Some(first), Some(last)) = (report.first, report.last) {
        out.push_str(&format!(" ({first} to {last})"));
    }
    if report.pruned > 0 {
        out.push_str(&format!(", pruned {} outside the window", report.pruned));
    }
    if report.truncated {
        out.push_str(&format!(" {}", "(window truncated)".yellow()));
    }
    out
}
