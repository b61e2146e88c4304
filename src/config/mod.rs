pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    AvailabilityPolicyConfigItem, CellCapacityConfigItem, ConfigItem, FileLoggingConfigItem,
    MarathonThresholdConfigItem, StorageBackendConfigItem,
};
use crate::core::edit::EditRules;
use crate::core::types::{AvailabilityPolicy, StorageBackend};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    CellCapacity,
    MarathonThreshold,
    AvailabilityPolicy,
    StorageBackend,
    FileLoggingEnabled,
}

impl ConfigKey {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::config(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                s.trim(),
                valid_csv::<ConfigKey>()
            ))
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub cell_capacity: CellCapacityConfigItem,
    #[serde(default)]
    pub marathon_threshold: MarathonThresholdConfigItem,
    #[serde(default)]
    pub availability_policy: AvailabilityPolicyConfigItem,
    #[serde(default)]
    pub storage_backend: StorageBackendConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
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
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    /// Loads `path`, writing a default file first when none exists.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self {
            path: path.to_path_buf(),
            data: ConfigFile::default(),
            last_change: None,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::config(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }
        config.save()?;
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cell_capacity(&self) -> usize {
        *self.data.cell_capacity.get_value()
    }
    pub fn marathon_threshold(&self) -> usize {
        *self.data.marathon_threshold.get_value()
    }
    pub fn availability_policy(&self) -> AvailabilityPolicy {
        *self.data.availability_policy.get_value()
    }
    pub fn storage_backend(&self) -> StorageBackend {
        *self.data.storage_backend.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    pub fn edit_rules(&self) -> EditRules {
        EditRules {
            capacity: self.cell_capacity(),
            threshold: self.marathon_threshold(),
            policy: self.availability_policy(),
        }
    }

    fn value_string(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::CellCapacity => self.data.cell_capacity.get_value().to_string(),
            ConfigKey::MarathonThreshold => self.data.marathon_threshold.get_value().to_string(),
            ConfigKey::AvailabilityPolicy => {
                self.data.availability_policy.get_value().to_string()
            }
            ConfigKey::StorageBackend => self.data.storage_backend.get_value().to_string(),
            ConfigKey::FileLoggingEnabled => {
                self.data.file_logging_enabled.get_value().to_string()
            }
        }
    }

    fn description_of(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::CellCapacity => self.data.cell_capacity.description(),
            ConfigKey::MarathonThreshold => self.data.marathon_threshold.description(),
            ConfigKey::AvailabilityPolicy => self.data.availability_policy.description(),
            ConfigKey::StorageBackend => self.data.storage_backend.description(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.description(),
        }
    }

    /// (key, description, value) per key, in declaration order.
    pub fn rows(&self) -> ConfigRows {
        ConfigRows(
            ConfigKey::iter()
                .map(|key| {
                    (
                        key.to_string(),
                        self.description_of(key).to_string(),
                        self.value_string(key),
                    )
                })
                .collect(),
        )
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let old = self.value_string(key);
        self.edit(|cfg| match key {
            ConfigKey::CellCapacity => cfg.cell_capacity.set_value(new_value),
            ConfigKey::MarathonThreshold => cfg.marathon_threshold.set_value(new_value),
            ConfigKey::AvailabilityPolicy => cfg.availability_policy.set_value(new_value),
            ConfigKey::StorageBackend => cfg.storage_backend.set_value(new_value),
            ConfigKey::FileLoggingEnabled => cfg.file_logging_enabled.set_value(new_value),
        })?;
        // Held for the caller to log.
        self.last_change = Some((key.to_string(), old, self.value_string(key)));
        Ok(())
    }

    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = ConfigKey::try_from(key_str)?;
        self.set_key(key, new_value)
    }

    /// Applies every pair or none of them.
    pub fn set_many<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut next = self.data.clone();
        for (k, v) in pairs {
            let v = v.as_ref();
            match ConfigKey::try_from(k.as_ref())? {
                ConfigKey::CellCapacity => next.cell_capacity.set_value(v)?,
                ConfigKey::MarathonThreshold => next.marathon_threshold.set_value(v)?,
                ConfigKey::AvailabilityPolicy => next.availability_policy.set_value(v)?,
                ConfigKey::StorageBackend => next.storage_backend.set_value(v)?,
                ConfigKey::FileLoggingEnabled => next.file_logging_enabled.set_value(v)?,
            }
        }
        self.edit(|cfg| {
            *cfg = next;
            Ok(())
        })
    }

    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        let mut next = self.data.clone();
        f(&mut next)?;
        let previous = std::mem::replace(&mut self.data, next);
        if let Err(e) = self.save() {
            self.data = previous;
            return Err(e);
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
