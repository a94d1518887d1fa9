// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::str::FromStr;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use lessonbook_core::{Schedule, TaskDraft};

use crate::arg::{ArgDate, ArgOutputFormat, arg_id, get_id};
use crate::task_formatter::TaskFormatter;

#[derive(Debug, Clone, Copy)]
pub struct CmdTaskList {
    pub archived: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdTaskList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List homework tasks still to do")
            .arg(arg!(-a --archived "List archived tasks instead"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            archived: matches.get_flag("archived"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing tasks...");
        let tasks = match self.archived {
            true => schedule.archived_tasks().await?,
            false => schedule.tasks().await?,
        };

        if tasks.is_empty() && self.output_format == ArgOutputFormat::Table {
            let what = if self.archived { "No archived tasks" } else { "Nothing to do" };
            println!("{}", what.italic());
            return Ok(());
        }

        let formatter = TaskFormatter::new(self.output_format);
        print!("{}", formatter.format(&tasks));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTaskAdd {
    pub title: String,
    pub subject: String,
    pub description: String,
    pub due: ArgDate,
}

impl CmdTaskAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Add a homework task")
            .arg(arg!(title: <TITLE> "What to do"))
            .arg(arg!(-s --subject <SUBJECT> "Subject of the task"))
            .arg(arg!(-d --description <DESCRIPTION> "Details of the task"))
            .arg(
                arg!(--due <DATE> "Due date as YYYY-MM-DD, or today, tomorrow, yesterday")
                    .value_parser(ArgDate::from_str),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: matches
                .get_one::<String>("title")
                .expect("title is required")
                .clone(),
            subject: matches.get_one("subject").cloned().unwrap_or_default(),
            description: matches.get_one("description").cloned().unwrap_or_default(),
            due: matches.get_one("due").copied().unwrap_or(ArgDate::Today),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding task...");
        let draft = TaskDraft {
            subject: self.subject,
            title: self.title,
            description: self.description,
            due: self.due.resolve(schedule.today())?,
        };
        let task = schedule.add_task(&draft).await?;
        println!("Added task {} due {}", task.id, task.due);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdTaskArchive {
    pub id: i64,
    pub restore: bool,
}

impl CmdTaskArchive {
    pub const NAME: &str = "archive";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("done")
            .about("Archive a finished task")
            .arg(arg_id())
            .arg(arg!(-u --undo "Move the task back to the active list"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            restore: matches.get_flag("undo"),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "archiving task...");
        schedule.set_task_archived(self.id, !self.restore).await?;
        match self.restore {
            true => println!("Restored task {}", self.id),
            false => println!("Archived task {}", self.id),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdTaskDelete {
    pub id: i64,
}

impl CmdTaskDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a task")
            .arg(arg_id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting task...");
        schedule.delete_task(self.id).await?;
        println!("Deleted task {}", self.id);
        Ok(())
    }
}
