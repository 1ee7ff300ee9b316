pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, FileLoggingConfigItem, PathConfigItem, PollTimeoutConfigItem,
};
use crate::errors::{Error, Result};
use crate::extensions::enums::parse_variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    ListPath,
    CategoriesPath,
    SnapshotDir,
    PollTimeoutSecs,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub list_path: PathConfigItem,
    pub categories_path: PathConfigItem,
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathConfigItem,
    #[serde(default)]
    pub poll_timeout_secs: PollTimeoutConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

fn default_snapshot_dir() -> PathConfigItem {
    PathConfigItem::new(".", "Directory for timestamped list snapshots.")
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            list_path: PathConfigItem::new(
                "shared_shopping_list.json",
                "Shared list file read and written by the desk and the bot.",
            ),
            categories_path: PathConfigItem::new(
                "categories.json",
                "Remembered item categories.",
            ),
            snapshot_dir: default_snapshot_dir(),
            poll_timeout_secs: PollTimeoutConfigItem::default(),
            file_logging_enabled: FileLoggingConfigItem::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    pub last_change: Option<(String, String, String)>,
}

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
    pub fn get(&self, index: usize) -> Option<&(String, String, String)> {
        self.0.get(index)
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Parse(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Parse(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    /// Like `load_from`, but writes a default config first when none exists.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            let fresh = Self {
                path: path.clone(),
                data: ConfigFile::default(),
                last_change: None,
            };
            fresh.save()?;
            return Ok(fresh);
        }
        Self::load_from(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list_path(&self) -> &Path {
        self.data.list_path.get_value()
    }
    pub fn categories_path(&self) -> &Path {
        self.data.categories_path.get_value()
    }
    pub fn snapshot_dir(&self) -> &Path {
        self.data.snapshot_dir.get_value()
    }
    pub fn poll_timeout_secs(&self) -> u64 {
        *self.data.poll_timeout_secs.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    fn describe(&self, key: ConfigKey) -> (String, String) {
        match key {
            ConfigKey::ListPath => (
                self.data.list_path.description().to_string(),
                self.list_path().display().to_string(),
            ),
            ConfigKey::CategoriesPath => (
                self.data.categories_path.description().to_string(),
                self.categories_path().display().to_string(),
            ),
            ConfigKey::SnapshotDir => (
                self.data.snapshot_dir.description().to_string(),
                self.snapshot_dir().display().to_string(),
            ),
            ConfigKey::PollTimeoutSecs => (
                self.data.poll_timeout_secs.description().to_string(),
                self.poll_timeout_secs().to_string(),
            ),
            ConfigKey::FileLoggingEnabled => (
                self.data.file_logging_enabled.description().to_string(),
                self.data.file_logging_enabled.get_value().to_string(),
            ),
        }
    }

    pub fn rows(&self) -> ConfigRows {
        let rows = ConfigKey::iter()
            .map(|key| {
                let (description, value) = self.describe(key);
                (key.to_string(), description, value)
            })
            .collect();
        ConfigRows(rows)
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let (_, old) = self.describe(key);
        self.edit(|cfg| match key {
            ConfigKey::ListPath => cfg.list_path.set_value(new_value),
            ConfigKey::CategoriesPath => cfg.categories_path.set_value(new_value),
            ConfigKey::SnapshotDir => cfg.snapshot_dir.set_value(new_value),
            ConfigKey::PollTimeoutSecs => cfg.poll_timeout_secs.set_value(new_value),
            ConfigKey::FileLoggingEnabled => cfg.file_logging_enabled.set_value(new_value),
        })?;
        let (_, new_val) = self.describe(key);
        // stash for caller to log.
        self.last_change = Some((key.to_string(), old, new_val));
        Ok(())
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key: ConfigKey =
            parse_variant(key_str, "configuration key").map_err(Error::Parse)?;
        self.set_key(key, new_value)
    }

    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    /// Applies `f` to a copy and only keeps it if the copy saves.
    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        let mut draft = self.data.clone();
        f(&mut draft)?;
        let previous = std::mem::replace(&mut self.data, draft);
        if let Err(err) = self.save() {
            self.data = previous;
            return Err(err);
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::Parse(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::Parse(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::Parse(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
