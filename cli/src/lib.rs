// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of lessonbook.

mod arg;
mod attestation_formatter;
mod bell_formatter;
mod cli;
mod cmd_attestation;
mod cmd_bell;
mod cmd_day;
mod cmd_generate_completion;
mod cmd_note;
mod cmd_schedule;
mod cmd_task;
mod cmd_template;
mod config;
mod lesson_formatter;
mod note_formatter;
mod table;
mod task_formatter;
mod template_formatter;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::parse_config;
