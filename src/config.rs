//! Repository coordinates and connection settings.
//!
//! Flags win over `relnotes.toml` in the working directory, which wins over
//! `~/.config/relnotes.toml`, which wins over built-in defaults. The token
//! is never read from a config file; it comes from `--token` or the
//! `GITHUB_TOKEN` environment variable.

use colored::Colorize;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for one compilation run, fully resolved.
#[derive(Debug, Clone)]
pub struct RepoConfig {
    pub owner: String,
    pub repository: String,
    pub token: Option<String>,
    /// Comparison base when the target milestone has no predecessor.
    pub default_branch: String,
}

/// Optional `relnotes.toml` settings file.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub owner: Option<String>,
    pub repository: Option<String>,
    pub default_branch: Option<String>,
}

impl ConfigFile {
    /// Load the layered settings files: working directory first, then the
    /// user-wide file. Earlier layers win per field.
    pub fn load() -> Self {
        let mut candidates: Vec<PathBuf> = vec![PathBuf::from("relnotes.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("relnotes.toml"));
        }

        let mut merged = ConfigFile::default();
        for path in candidates {
            if let Some(layer) = Self::read_from(&path) {
                merged.merge(layer);
            }
        }
        merged
    }

    fn read_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("⚠️  Could not read {}: {}", path.display(), e).yellow()
                );
                return None;
            }
        };
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("⚠️  Ignoring malformed {}: {}", path.display(), e).yellow()
                );
                None
            }
        }
    }

    /// Fill fields that are still unset from a lower-priority layer.
    fn merge(&mut self, lower: ConfigFile) {
        if self.owner.is_none() {
            self.owner = lower.owner;
        }
        if self.repository.is_none() {
            self.repository = lower.repository;
        }
        if self.default_branch.is_none() {
            self.default_branch = lower.default_branch;
        }
    }
}
