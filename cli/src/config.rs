// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use lessonbook_core::{APP_NAME, Config, get_config_dir};

const LESSONBOOK_CONFIG_ENV: &str = "LESSONBOOK_CONFIG";
const LESSONBOOK_DEV_ENV: &str = "LESSONBOOK_DEV";

const DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Locates and parses the configuration file.
///
/// An explicit path (flag or environment) must exist. The default location may be missing, in
/// which case the built-in defaults apply.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(LESSONBOOK_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({LESSONBOOK_DEV_ENV} is set): config must be explicitly specified via --config or {LESSONBOOK_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !fs::try_exists(&config).await.unwrap_or(false) {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        config
    };

    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?;
    Ok(raw.core)
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(LESSONBOOK_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            LESSONBOOK_DEV_ENV,
            val,
            DEV_VALID_TRUE.join(", "),
            DEV_VALID_FALSE.join(", "),
        );
        None
    }
}
