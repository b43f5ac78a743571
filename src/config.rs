use super::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where uap-core packages install their ruleset.
pub const DEFAULT_REGEXES_PATH: &str = "/usr/share/uap-core/regexes.yaml";

/// Prefix of host-visible variable names, e.g. `uap_browser_family`.
pub const DEFAULT_VARIABLE_PREFIX: &str = "uap_";

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the uap-core `regexes.yaml` ruleset.
    pub regexes: PathBuf,
    pub variable_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            regexes: PathBuf::from(DEFAULT_REGEXES_PATH),
            variable_prefix: DEFAULT_VARIABLE_PREFIX.to_owned(),
        }
    }
}

impl Config {
    /// Read a YAML config file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
