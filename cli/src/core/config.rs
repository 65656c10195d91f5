//! # DocxKit Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional configuration for `docx-pack` and `docx-unpack`.
//! Both tools work without any configuration file; the settings here only tune
//! details such as the deflate level used when packing and the content part
//! that `docx-unpack` points the user at.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.docxkit.toml` in the current directory or ancestors
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/docxkit/config.toml` on Linux)
//! 3. Default values defined in the code
//!
//! Files are parsed with `serde`/`toml`, merged field by field, then validated.
//!
//! ## Examples
//!
//! ```toml
//! [pack]
//! compression_level = 9
//!
//! [unpack]
//! main_part = "word/document.xml"
//! ```
//!
//! ```rust,no_run
//! let cfg = docxkit::core::config::load_config()?;
//! let level = cfg.pack.compression_level;
//! let main_part = cfg.unpack.main_part();
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::core::error::{DocxError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Component, Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub pack: PackConfig,
    #[serde(default)]
    pub unpack: UnpackConfig,
}

/// Settings for `docx-pack`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PackConfig {
    /// Deflate level (1-9). `None` uses the zip library's default level.
    pub compression_level: Option<i64>,
}

/// Settings for `docx-unpack`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UnpackConfig {
    /// Part reported as the main content after unpacking, relative to the output directory.
    pub main_part: Option<String>,
}

impl UnpackConfig {
    /// The configured main content part, or `word/document.xml`.
    pub fn main_part(&self) -> &str {
        self.main_part.as_deref().unwrap_or(DEFAULT_MAIN_PART)
    }
}

pub const DEFAULT_MAIN_PART: &str = "word/document.xml";
const MIN_DEFLATE_LEVEL: i64 = 1;
const MAX_DEFLATE_LEVEL: i64 = 9;
const PROJECT_CONFIG_FILENAME: &str = ".docxkit.toml";

/// Loads, merges and validates configuration from all sources.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) found.");
            None
        }
    };
    let merged = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("", "", "docxkit") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!("User configuration file not found at {}", config_path.display());
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.docxkit.toml`.
pub fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win over user values, field by field.
pub fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    Config {
        pack: PackConfig {
            compression_level: project
                .pack
                .compression_level
                .or(user.pack.compression_level),
        },
        unpack: UnpackConfig {
            main_part: project.unpack.main_part.or(user.unpack.main_part),
        },
    }
}

pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(level) = config.pack.compression_level {
        if !(MIN_DEFLATE_LEVEL..=MAX_DEFLATE_LEVEL).contains(&level) {
            return Err(anyhow!(DocxError::Config(format!(
                "pack.compression_level must be between {MIN_DEFLATE_LEVEL} and {MAX_DEFLATE_LEVEL}, got {level}"
            ))));
        }
    }
    if let Some(part) = &config.unpack.main_part {
        let path = Path::new(part);
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if part.trim().is_empty() || escapes {
            return Err(anyhow!(DocxError::Config(format!(
                "unpack.main_part must be a relative path inside the document, got '{part}'"
            ))));
        }
    }
    Ok(())
}
