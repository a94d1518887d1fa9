// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scratch directories for on-disk schedules, removed when dropped.

use std::path::PathBuf;

use tempfile::TempDir;
use tokio::fs;

/// A scratch base directory with a ready-made state directory inside.
#[derive(Debug)]
pub struct TempDirs {
    root: TempDir,
    /// Where the database of the schedule under test lives.
    pub state_dir: PathBuf,
}

impl TempDirs {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let root = tempfile::tempdir()?;
        let state_dir = root.path().join("state");
        fs::create_dir_all(&state_dir).await?;
        Ok(Self { root, state_dir })
    }

    pub fn base(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }

    /// A state directory whose parents do not exist yet.
    pub fn missing_state_dir(&self) -> PathBuf {
        self.root.path().join("missing").join("state")
    }
}

pub async fn setup_temp_dirs() -> Result<TempDirs, Box<dyn std::error::Error>> {
    TempDirs::new().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn temp_dirs_prepares_state_dir() {
        let dirs = TempDirs::new().await.unwrap();

        assert!(dirs.state_dir.is_dir());
        assert!(dirs.state_dir.starts_with(dirs.base()));
        assert!(!dirs.missing_state_dir().exists());
    }

    #[tokio::test]
    async fn temp_dirs_removed_on_drop() {
        let dirs = TempDirs::new().await.unwrap();
        let base = dirs.base();

        drop(dirs);

        assert!(!base.exists());
    }
}
