// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use lessonbook_core::{NoteDraft, Schedule};

use crate::arg::{ArgOutputFormat, arg_id, get_id};
use crate::note_formatter::NoteFormatter;

#[derive(Debug, Clone, Copy)]
pub struct CmdNoteList {
    pub output_format: ArgOutputFormat,
}

impl CmdNoteList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List notes, newest first")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing notes...");
        let notes = schedule.notes().await?;

        if notes.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", "No notes".italic());
            return Ok(());
        }

        let formatter = NoteFormatter::new(self.output_format);
        print!("{}", formatter.format(&notes));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdNoteAdd {
    pub title: String,
    pub content: String,
}

impl CmdNoteAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Write a note")
            .arg(arg!(title: [TITLE] "Title of the note"))
            .arg(arg!(-m --content <TEXT> "Body of the note"))
            .arg_required_else_help(true)
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: matches.get_one("title").cloned().unwrap_or_default(),
            content: matches.get_one("content").cloned().unwrap_or_default(),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding note...");
        let draft = NoteDraft {
            title: self.title,
            content: self.content,
        };
        let note = schedule.add_note(&draft).await?;
        println!("Added note {} \"{}\"", note.id, note.title);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdNoteDelete {
    pub id: i64,
}

impl CmdNoteDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a note")
            .arg(arg_id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting note...");
        schedule.delete_note(self.id).await?;
        println!("Deleted note {}", self.id);
        Ok(())
    }
}
