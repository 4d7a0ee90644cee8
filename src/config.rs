//! User configuration
//!
//! A small optional file at `~/.config/stencil/config.toml`. An absent file
//! is not an error; every field has a default.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_python() -> String {
    "python3".to_string()
}

/// Configuration for scaffolding defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StencilConfig {
    /// Author name used when the CLI does not supply one
    #[serde(default)]
    pub default_author: Option<String>,

    /// Interpreter used to provision virtual environments
    #[serde(default = "default_python")]
    pub python: String,
}

impl Default for StencilConfig {
    fn default() -> Self {
        StencilConfig {
            default_author: None,
            python: default_python(),
        }
    }
}

impl StencilConfig {
    /// XDG config file path (~/.config/stencil/config.toml).
    pub fn default_path() -> Option<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".config").join("stencil").join("config.toml"))
    }

    /// Load configuration, preferring an explicit path over the XDG default.
    /// Missing files yield the built-in defaults; a malformed file is an
    /// error only when its path was given explicitly.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()));
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Ok(Self::load_from_file(&path).unwrap_or_default()),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_missing_keys() {
        let cfg: StencilConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.python, "python3");
        assert!(cfg.default_author.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let cfg: StencilConfig =
            toml::from_str("default_author = \"Ada\"\npython = \"python3.12\"").unwrap();
        assert_eq!(cfg.default_author.as_deref(), Some("Ada"));
        assert_eq!(cfg.python, "python3.12");
    }
}
