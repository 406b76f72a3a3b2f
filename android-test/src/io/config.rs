//! Adapter configuration stored in `.android-test.toml` at the source root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// File name looked up below the source root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".android-test.toml";

/// Adapter configuration (TOML).
///
/// Missing fields default to values that work in a regular checkout.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AndroidTestConfig {
    /// Wall-clock limit for a single gradle run, in seconds.
    pub timeout_secs: u64,

    pub gradle: GradleConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GradleConfig {
    /// Command prefix used to invoke gradle (e.g. `["./gradlew"]`).
    pub command: Vec<String>,
}

impl Default for GradleConfig {
    fn default() -> Self {
        Self {
            command: vec!["./gradlew".to_string()],
        }
    }
}

impl Default for AndroidTestConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 2 * 60 * 60,
            gradle: GradleConfig::default(),
        }
    }
}

impl AndroidTestConfig {
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be > 0"));
        }
        if self.gradle.command.is_empty() || self.gradle.command[0].trim().is_empty() {
            return Err(anyhow!("gradle.command must be a non-empty array"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AndroidTestConfig::default()`.
pub fn load_config(path: &Path) -> Result<AndroidTestConfig> {
    if !path.exists() {
        let cfg = AndroidTestConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AndroidTestConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
