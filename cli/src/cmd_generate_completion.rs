// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs::File, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::generate;
use clap_complete_nushell::Nushell;

use crate::Cli;

/// Print or write the completion script of a shell.
#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub output: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
            .arg(
                arg!(-o --output <FILE> "Write the script to a file instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: *matches
                .get_one::<Shell>("shell")
                .expect("shell is required"),
            output: matches.get_one("output").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        match &self.output {
            Some(path) => {
                let mut file = File::create(path)
                    .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
                self.generate(&mut file);
            }
            None => self.generate(&mut io::stdout()),
        }
        Ok(())
    }

    pub fn generate(&self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        let bin = cmd.get_name().to_string();
        match self.shell.builtin() {
            Some(shell) => generate(shell, &mut cmd, bin, buf),
            None => generate(Nushell, &mut cmd, bin, buf),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// The generator shipped with `clap_complete`, `None` for shells served by an extra crate.
    fn builtin(self) -> Option<clap_complete::Shell> {
        use clap_complete::Shell as ClapShell;
        match self {
            Shell::Bash => Some(ClapShell::Bash),
            Shell::Elvish => Some(ClapShell::Elvish),
            Shell::Fish => Some(ClapShell::Fish),
            Shell::PowerShell => Some(ClapShell::PowerShell),
            Shell::Zsh => Some(ClapShell::Zsh),
            Shell::Nushell => None,
        }
    }
}
