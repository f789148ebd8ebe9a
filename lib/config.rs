use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Optional render settings read from a TOML file. Command-line flags take precedence.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub threads: Option<usize>,
    pub output: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl RenderConfig {
    pub fn load(path: &Path) -> anyhow::Result<RenderConfig> {
        let text = fs::read_to_string(path).with_context(|| format!("couldn't read config {}", path.display()))?;
        RenderConfig::from_toml(&text).with_context(|| format!("couldn't parse config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<RenderConfig> {
        Ok(toml::from_str(text)?)
    }
}
