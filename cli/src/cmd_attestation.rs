// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::str::FromStr;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use lessonbook_core::{AttestationDraft, ClockTime, Schedule};

use crate::arg::{ArgDate, ArgOutputFormat, arg_id, get_id};
use crate::attestation_formatter::AttestationFormatter;

#[derive(Debug, Clone, Copy)]
pub struct CmdAttestationList {
    pub output_format: ArgOutputFormat,
}

impl CmdAttestationList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List tests and exams by date")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing attestations...");
        let attestations = schedule.attestations().await?;

        if attestations.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", "No attestations planned".italic());
            return Ok(());
        }

        let formatter = AttestationFormatter::new(self.output_format);
        print!("{}", formatter.format(&attestations));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdAttestationAdd {
    pub subject: String,
    pub kind: String,
    pub date: ArgDate,
    pub time: Option<ClockTime>,
    pub room: String,
    pub description: String,
}

impl CmdAttestationAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Add a test or exam")
            .arg(arg!(subject: <SUBJECT> "Subject being tested"))
            .arg(arg!(-k --kind <KIND> "Kind of attestation, e.g. test or exam"))
            .arg(
                arg!(--date <DATE> "Date as YYYY-MM-DD, or today, tomorrow, yesterday")
                    .value_parser(ArgDate::from_str),
            )
            .arg(arg!(--time <TIME> "Start time, HH:MM").value_parser(ClockTime::from_str))
            .arg(arg!(-r --room <ROOM> "Room"))
            .arg(arg!(-d --description <DESCRIPTION> "Topics or other details"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            subject: matches
                .get_one::<String>("subject")
                .expect("subject is required")
                .clone(),
            kind: matches.get_one("kind").cloned().unwrap_or_default(),
            date: matches.get_one("date").copied().unwrap_or(ArgDate::Today),
            time: matches.get_one("time").copied(),
            room: matches.get_one("room").cloned().unwrap_or_default(),
            description: matches.get_one("description").cloned().unwrap_or_default(),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding attestation...");
        let draft = AttestationDraft {
            subject: self.subject,
            kind: self.kind,
            date: self.date.resolve(schedule.today())?,
            time: self.time,
            room: self.room,
            description: self.description,
        };
        let attestation = schedule.add_attestation(&draft).await?;
        println!(
            "Added attestation {} on {}",
            attestation.id, attestation.date
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdAttestationDelete {
    pub id: i64,
}

impl CmdAttestationDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an attestation")
            .arg(arg_id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting attestation...");
        schedule.delete_attestation(self.id).await?;
        println!("Deleted attestation {}", self.id);
        Ok(())
    }
}
