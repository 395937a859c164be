//! User preferences for the commit workflow.
//!
//! The preferences file is JSON with exactly the [`WorkflowConfiguration`] fields.
//! Missing fields fall back to the built-in defaults, and a missing or broken file
//! is never an error: [`WorkflowConfiguration::load`] logs and returns defaults.

use crate::core::commit_type::default_type_tags;
use crate::core::dirs::get_config_directory;
use crate::core::error::{EasyCommitError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const SAMPLE_FILE_NAME: &str = "config.sample.json";
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 50;

fn default_max_description_length() -> usize {
    DEFAULT_MAX_DESCRIPTION_LENGTH
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowConfiguration {
    #[serde(default = "default_type_tags", alias = "commitTypes")]
    pub allowed_types: Vec<String>,

    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,

    #[serde(default = "default_true")]
    pub push_after_commit: bool,

    #[serde(default = "default_true", alias = "addAllFiles")]
    pub stage_all_files: bool,
}

impl Default for WorkflowConfiguration {
    fn default() -> Self {
        Self {
            allowed_types: default_type_tags(),
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            push_after_commit: true,
            stage_all_files: true,
        }
    }
}

impl WorkflowConfiguration {
    /// Path of the per-user preferences file
    pub fn config_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE_NAME))
    }

    /// Load the user's preferences, falling back to defaults on any problem
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                log::warn!("Using default configuration: {e}");
                Self::default()
            }
        }
    }

    /// Load preferences from a specific file, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No configuration file at {}, using defaults", path.display());
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Could not read {}: {e}. Using defaults.", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Self>(&content) {
            Ok(config) => {
                log::debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Could not parse {}: {e}. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    /// Write this configuration to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| EasyCommitError::config_write_failed(parent, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| EasyCommitError::config_write_failed(path, e))?;

        log::debug!("Wrote configuration to {}", path.display());
        Ok(())
    }

    /// Overwrite the preferences file with the defaults
    pub fn reset() -> Result<PathBuf> {
        let path = Self::config_path()?;
        Self::default().save_to(&path)?;
        Ok(path)
    }

    /// Write a sample preferences file next to the live one, leaving the live file untouched
    pub fn create_sample() -> Result<PathBuf> {
        let path = get_config_directory()?.join(SAMPLE_FILE_NAME);
        Self::default().save_to(&path)?;
        Ok(path)
    }

    /// Apply the one-run overrides coming from CLI flags
    pub fn with_overrides(mut self, no_push: bool, no_add: bool) -> Self {
        if no_push {
            self.push_after_commit = false;
        }
        if no_add {
            self.stage_all_files = false;
        }
        self
    }
}
