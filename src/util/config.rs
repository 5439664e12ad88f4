//! Configuration file support.
//!
//! Macro definitions can be supplied in a TOML file instead of (or in
//! addition to) command-line flags:
//!
//! ```toml
//! [macros]
//! defines = ["RGGEN_ENABLE_BACKDOOR"]
//! ```
//!
//! With no explicit path, `rggen-vhdl-rtl.toml` in the current directory is
//! used when present; a missing file means nothing is defined.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::macros::MacroSet;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "rggen-vhdl-rtl.toml";

/// Build configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Macro settings
    pub macros: MacrosConfig,
}

/// Macro-definition settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MacrosConfig {
    /// Macros considered defined for this build
    pub defines: Vec<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration, falling back to defaults.
    ///
    /// An explicitly given path must exist. Without one, the default config
    /// file is loaded when present in the current directory, otherwise an
    /// empty configuration (nothing defined) is returned.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// The macro registry described by this configuration.
    pub fn macro_set(&self) -> MacroSet {
        self.macros.defines.iter().cloned().collect()
    }
}
