use std::path::Path;

use anyhow::Context;
use scn_diff::CompareConfig;
use serde::{Deserialize, Serialize};

/// Settings read from the `--config` TOML file. Every key is optional.
///
/// ```toml
/// [compare]
/// duplicates = "keep-last"
/// detect_moves = true
///
/// [display]
/// hide_unchanged = true
/// color = false
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub compare: CompareConfig,
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Hide unchanged scenes in `compare` unless a filter asks for them.
    pub hide_unchanged: bool,
    /// Colorize text output.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hide_unchanged: false,
            color: true,
        }
    }
}

impl CliConfig {
    /// Load from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}
