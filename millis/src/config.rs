//! Configuration for tools built on the library.

use std::{fs::read_to_string, path::Path};

use anyhow::{ensure, Context as _};
use chrono_tz::Tz;
use millis_common::{Factor, HOUR};
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Format log output as JSON
    #[serde(default)]
    pub log_json: bool,
    /// Factor used to floor and ceil when none is given (default: one hour)
    #[serde(default = "default_factor")]
    pub default_factor: Factor,
    /// IANA timezone for calendar conversions (default: UTC)
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_json: false,
            default_factor: default_factor(),
            timezone: default_timezone(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str::<Self>(text).context("failed to parse JSON config")?;
        ensure!(
            config.default_factor > 0,
            "default_factor must be positive, got {}",
            config.default_factor
        );
        Ok(config)
    }
}

fn default_factor() -> Factor {
    HOUR
}

fn default_timezone() -> Tz {
    Tz::UTC
}
