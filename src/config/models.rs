use crate::core::applier::DEFAULT_CELL_CAPACITY;
use crate::core::fatigue::DEFAULT_MARATHON_THRESHOLD;
use crate::core::types::{AvailabilityPolicy, Bool, StorageBackend};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

/// Whole number with a lower bound of `MIN`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountConfigItem<const MIN: usize> {
    pub value: usize,
    pub description: String,
}

impl<const MIN: usize> CountConfigItem<MIN> {
    fn parse(raw: &str) -> Result<usize, Error> {
        let n: usize = raw.trim().parse().map_err(|_| {
            Error::Parse(format!("Invalid number: '{}'. Expected a whole number.", raw.trim()))
        })?;
        if n < MIN {
            return Err(Error::Parse(format!(
                "Value {n} is too small. Minimum is {MIN}."
            )));
        }
        Ok(n)
    }
}

impl<const MIN: usize> ConfigItem<usize> for CountConfigItem<MIN> {
    fn get_value(&self) -> &usize {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Self::parse(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

pub type CellCapacityConfigItem = CountConfigItem<1>;
pub type MarathonThresholdConfigItem = CountConfigItem<2>;

impl Default for CellCapacityConfigItem {
    fn default() -> Self {
        Self {
            value: DEFAULT_CELL_CAPACITY,
            description: "Most entries a single-slot assign may put in one cell.".into(),
        }
    }
}

impl Default for MarathonThresholdConfigItem {
    fn default() -> Self {
        Self {
            value: DEFAULT_MARATHON_THRESHOLD,
            description: "Consecutive periods in a day that need confirmation.".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityPolicyConfigItem {
    pub value: AvailabilityPolicy,
    pub description: String,
}

impl Default for AvailabilityPolicyConfigItem {
    fn default() -> Self {
        Self {
            value: AvailabilityPolicy::Open,
            description: "Who counts as free for a slot: open or restricted.".into(),
        }
    }
}

impl ConfigItem<AvailabilityPolicy> for AvailabilityPolicyConfigItem {
    fn get_value(&self) -> &AvailabilityPolicy {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = AvailabilityPolicy::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageBackendConfigItem {
    pub value: StorageBackend,
    pub description: String,
}

impl Default for StorageBackendConfigItem {
    fn default() -> Self {
        Self {
            value: StorageBackend::Json,
            description: "Where the timetable is kept: json or memory. Read at start-up.".into(),
        }
    }
}

impl ConfigItem<StorageBackend> for StorageBackendConfigItem {
    fn get_value(&self) -> &StorageBackend {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = StorageBackend::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
