// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use lessonbook_core::{APP_NAME, Schedule};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd_attestation::{CmdAttestationAdd, CmdAttestationDelete, CmdAttestationList};
use crate::cmd_bell::{CmdBellList, CmdBellReset, CmdBellSet};
use crate::cmd_day::{CmdDay, CmdWeek};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_note::{CmdNoteAdd, CmdNoteDelete, CmdNoteList};
use crate::cmd_schedule::{CmdClearGenerated, CmdParity, CmdRegenerate};
use crate::cmd_task::{CmdTaskAdd, CmdTaskArchive, CmdTaskDelete, CmdTaskList};
use crate::cmd_template::{CmdTemplateClear, CmdTemplateSet, CmdTemplateShow};
use crate::config::parse_config;

/// Run the lessonbook command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("School timetable: bell periods, even and odd week templates, dated lessons.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to today's lessons
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/lessonbook/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/lessonbook/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDay::command())
            .subcommand(CmdWeek::command())
            .subcommand(
                Command::new("bell")
                    .alias("b")
                    .about("Manage the bell periods")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdBellList::command())
                    .subcommand(CmdBellSet::command())
                    .subcommand(CmdBellReset::command()),
            )
            .subcommand(
                Command::new("template")
                    .alias("t")
                    .about("Manage the even and odd week templates")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdTemplateShow::command())
                    .subcommand(CmdTemplateSet::command())
                    .subcommand(CmdTemplateClear::command()),
            )
            .subcommand(
                Command::new("task")
                    .alias("hw")
                    .about("Manage homework tasks")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdTaskList::command())
                    .subcommand(CmdTaskAdd::command())
                    .subcommand(CmdTaskArchive::command())
                    .subcommand(CmdTaskDelete::command()),
            )
            .subcommand(
                Command::new("attestation")
                    .alias("exam")
                    .about("Manage tests and exams")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdAttestationList::command())
                    .subcommand(CmdAttestationAdd::command())
                    .subcommand(CmdAttestationDelete::command()),
            )
            .subcommand(
                Command::new("note")
                    .alias("n")
                    .about("Manage notes")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdNoteList::command())
                    .subcommand(CmdNoteAdd::command())
                    .subcommand(CmdNoteDelete::command()),
            )
            .subcommand(CmdRegenerate::command())
            .subcommand(CmdClearGenerated::command())
            .subcommand(CmdParity::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdDay::NAME, matches)) => Day(CmdDay::from(matches)),
            Some((CmdWeek::NAME, matches)) => Week(CmdWeek::from(matches)),
            Some(("bell", matches)) => match matches.subcommand() {
                Some((CmdBellList::NAME, matches)) => BellList(CmdBellList::from(matches)),
                Some((CmdBellSet::NAME, matches)) => BellSet(CmdBellSet::from(matches)),
                Some((CmdBellReset::NAME, matches)) => BellReset(CmdBellReset::from(matches)),
                _ => unreachable!(),
            },
            Some(("template", matches)) => match matches.subcommand() {
                Some((CmdTemplateShow::NAME, matches)) => {
                    TemplateShow(CmdTemplateShow::from(matches))
                }
                Some((CmdTemplateSet::NAME, matches)) => {
                    TemplateSet(CmdTemplateSet::from(matches)?)
                }
                Some((CmdTemplateClear::NAME, matches)) => {
                    TemplateClear(CmdTemplateClear::from(matches))
                }
                _ => unreachable!(),
            },
            Some(("task", matches)) => match matches.subcommand() {
                Some((CmdTaskList::NAME, matches)) => TaskList(CmdTaskList::from(matches)),
                Some((CmdTaskAdd::NAME, matches)) => TaskAdd(CmdTaskAdd::from(matches)),
                Some((CmdTaskArchive::NAME, matches)) => TaskArchive(CmdTaskArchive::from(matches)),
                Some((CmdTaskDelete::NAME, matches)) => TaskDelete(CmdTaskDelete::from(matches)),
                _ => unreachable!(),
            },
            Some(("attestation", matches)) => match matches.subcommand() {
                Some((CmdAttestationList::NAME, matches)) => {
                    AttestationList(CmdAttestationList::from(matches))
                }
                Some((CmdAttestationAdd::NAME, matches)) => {
                    AttestationAdd(CmdAttestationAdd::from(matches))
                }
                Some((CmdAttestationDelete::NAME, matches)) => {
                    AttestationDelete(CmdAttestationDelete::from(matches))
                }
                _ => unreachable!(),
            },
            Some(("note", matches)) => match matches.subcommand() {
                Some((CmdNoteList::NAME, matches)) => NoteList(CmdNoteList::from(matches)),
                Some((CmdNoteAdd::NAME, matches)) => NoteAdd(CmdNoteAdd::from(matches)),
                Some((CmdNoteDelete::NAME, matches)) => NoteDelete(CmdNoteDelete::from(matches)),
                _ => unreachable!(),
            },
            Some((CmdRegenerate::NAME, matches)) => Regenerate(CmdRegenerate::from(matches)),
            Some((CmdClearGenerated::NAME, matches)) => {
                ClearGenerated(CmdClearGenerated::from(matches))
            }
            Some((CmdParity::NAME, matches)) => Parity(CmdParity::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Day(CmdDay::today()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the lessons of a day
    Day(CmdDay),

    /// Show the lessons of a week
    Week(CmdWeek),

    /// List the bell periods
    BellList(CmdBellList),

    /// Change one bell period
    BellSet(CmdBellSet),

    /// Restore the default bell periods
    BellReset(CmdBellReset),

    /// Show a week template
    TemplateShow(CmdTemplateShow),

    /// Assign a lesson to a template slot
    TemplateSet(CmdTemplateSet),

    /// Empty a template slot
    TemplateClear(CmdTemplateClear),

    /// List homework tasks
    TaskList(CmdTaskList),

    /// Add a homework task
    TaskAdd(CmdTaskAdd),

    /// Archive or restore a task
    TaskArchive(CmdTaskArchive),

    /// Delete a task
    TaskDelete(CmdTaskDelete),

    /// List tests and exams
    AttestationList(CmdAttestationList),

    /// Add a test or exam
    AttestationAdd(CmdAttestationAdd),

    /// Delete a test or exam
    AttestationDelete(CmdAttestationDelete),

    /// List notes
    NoteList(CmdNoteList),

    /// Write a note
    NoteAdd(CmdNoteAdd),

    /// Delete a note
    NoteDelete(CmdNoteDelete),

    /// Regenerate the materialized lessons
    Regenerate(CmdRegenerate),

    /// Delete the materialized lessons
    ClearGenerated(CmdClearGenerated),

    /// Show the parity of a week
    Parity(CmdParity),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Day(a)            => Self::run_with(config, |x| a.run(x).boxed()).await,
            Week(a)           => Self::run_with(config, |x| a.run(x).boxed()).await,
            BellList(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            BellSet(a)        => Self::run_with(config, |x| a.run(x).boxed()).await,
            BellReset(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            TemplateShow(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            TemplateSet(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            TemplateClear(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            TaskList(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            TaskAdd(a)        => Self::run_with(config, |x| a.run(x).boxed()).await,
            TaskArchive(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            TaskDelete(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            AttestationList(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            AttestationAdd(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            AttestationDelete(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            NoteList(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            NoteAdd(a)        => Self::run_with(config, |x| a.run(x).boxed()).await,
            NoteDelete(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            Regenerate(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            ClearGenerated(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Parity(a)         => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Schedule) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let mut core_config = parse_config(config).await?;
        core_config.normalize()?;

        let today = jiff::Zoned::now().date();
        let mut schedule = Schedule::open(core_config, today).await?;

        f(&mut schedule).await?;

        schedule.close().await;
        Ok(())
    }
}
