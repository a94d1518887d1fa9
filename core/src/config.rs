// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{MaterializeWindow, ParityRule, ScheduleError};

/// The name of the lessonbook application.
pub const APP_NAME: &str = "lessonbook";

const DB_FILENAME: &str = "lessonbook.db";

/// Configuration for the schedule core.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for storing application state. Without one the schedule lives in memory.
    pub state_dir: Option<PathBuf>,

    /// Weeks before the current one kept materialized.
    pub weeks_back: u8,

    /// Weeks after the current one kept materialized.
    pub weeks_forward: u8,

    /// Delete lessons outside the materialization window after each regeneration.
    pub prune_outside_window: bool,

    /// How dates map to even and odd weeks.
    pub parity: ParityRule,

    /// Quiet period before a triggered regeneration runs, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        let window = MaterializeWindow::default();
        Config {
            state_dir: None,
            weeks_back: window.weeks_back,
            weeks_forward: window.weeks_forward,
            prune_outside_window: window.prune_outside,
            parity: ParityRule::default(),
            debounce_ms: 500,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), ScheduleError> {
        match &self.state_dir {
            Some(a) => self.state_dir = Some(expand_path(a)?),
            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        };
        Ok(())
    }

    pub fn window(&self) -> MaterializeWindow {
        MaterializeWindow {
            weeks_back: self.weeks_back,
            weeks_forward: self.weeks_forward,
            prune_outside: self.prune_outside_window,
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Path of the database file, `None` for an in-memory schedule.
    pub fn db_path(&self) -> Option<PathBuf> {
        self.state_dir.as_ref().map(|dir| dir.join(DB_FILENAME))
    }
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, ScheduleError> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| ScheduleError::InvalidPath(path.display().to_string()))?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, ScheduleError> {
    dirs::home_dir()
        .ok_or_else(|| ScheduleError::InvalidPath("user-specific home directory not found".into()))
}

/// User-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, ScheduleError> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| {
        ScheduleError::InvalidPath("user-specific config directory not found".into())
    })
}

fn get_state_dir() -> Result<PathBuf, ScheduleError> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir
        .ok_or_else(|| ScheduleError::InvalidPath("user-specific state directory not found".into()))
}
