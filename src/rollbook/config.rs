//! # Configuration
//!
//! Rollbook configuration is managed by [`confique`], layered in priority order:
//! 1. **Environment variables**: `ROLLBOOK_ID_PREFIX`, `ROLLBOOK_SEED_FILE`, `ROLLBOOK_BUILTIN_SEED`.
//! 2. **Config file**: `--config <PATH>`, otherwise `rollbook.toml` in the OS config
//!    directory (via `directories`). A missing file is fine.
//! 3. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `id_prefix` | `24-25STU` | Fixed prefix of generated student IDs |
//! | `seed_file` | none | JSON array of extra seed records |
//! | `builtin_seed` | `true` | Load the built-in fifteen-student roster |
//!
//! A relative `seed_file` read from a config file is taken relative to that file's
//! directory. One given through `ROLLBOOK_SEED_FILE` stays relative to the working
//! directory.

use crate::error::Result;
use crate::ids::DEFAULT_PREFIX;
use crate::model::Student;
use crate::seed::{builtin_roster, load_seed_file};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "rollbook.toml";
const SEED_FILE_ENV: &str = "ROLLBOOK_SEED_FILE";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RollbookConfig {
    /// Fixed prefix of generated student IDs
    #[config(env = "ROLLBOOK_ID_PREFIX", default = "24-25STU")]
    pub id_prefix: String,

    /// JSON file with additional seed records
    #[config(env = "ROLLBOOK_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Whether the built-in roster is loaded at startup
    #[config(env = "ROLLBOOK_BUILTIN_SEED", default = true)]
    pub builtin_seed: bool,
}

impl Default for RollbookConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_PREFIX.to_string(),
            seed_file: None,
            builtin_seed: true,
        }
    }
}

impl RollbookConfig {
    /// Loads env vars over `path` (or the default config file) over defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };

        let mut builder = RollbookConfig::builder().env();
        if let Some(file) = &file {
            builder = builder.file(file);
        }
        let mut config = builder.load()?;

        if std::env::var_os(SEED_FILE_ENV).is_none() {
            if let Some(file) = &file {
                config.resolve_seed_file(file);
            }
        }
        Ok(config)
    }

    /// Anchors a relative `seed_file` to the directory holding `config_file`.
    fn resolve_seed_file(&mut self, config_file: &Path) {
        let Some(seed) = &self.seed_file else {
            return;
        };
        if seed.is_absolute() {
            return;
        }
        if let Some(dir) = config_file.parent() {
            self.seed_file = Some(dir.join(seed));
        }
    }

    /// Records to seed the store with: the built-in roster (if enabled), then the
    /// seed file's records (if any).
    pub fn seed_records(&self) -> Result<Vec<Student>> {
        let mut records = if self.builtin_seed {
            builtin_roster()
        } else {
            Vec::new()
        };
        if let Some(path) = &self.seed_file {
            records.extend(load_seed_file(path)?);
        }
        Ok(records)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "rollbook", "rollbook")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
