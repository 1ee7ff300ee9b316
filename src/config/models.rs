use crate::core::types::Bool;
use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfigItem {
    pub value: PathBuf,
    pub description: String,
}

impl PathConfigItem {
    pub fn new(value: &str, description: &str) -> Self {
        Self {
            value: PathBuf::from(value),
            description: description.into(),
        }
    }
}

impl ConfigItem<PathBuf> for PathConfigItem {
    fn get_value(&self) -> &PathBuf {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let trimmed = new_value.trim();
        if trimmed.is_empty() {
            return Err(Error::Parse("Path must not be empty.".into()));
        }
        self.value = PathBuf::from(trimmed);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// Long-poll timeout in seconds; the Bot API caps it at 50.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollTimeoutConfigItem {
    pub value: u64,
    pub description: String,
}

impl PollTimeoutConfigItem {
    pub const MAX_SECS: u64 = 50;
}

impl Default for PollTimeoutConfigItem {
    fn default() -> Self {
        Self {
            value: 30,
            description: "Seconds the bot waits for new messages per poll (0-50).".into(),
        }
    }
}

impl ConfigItem<u64> for PollTimeoutConfigItem {
    fn get_value(&self) -> &u64 {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let parsed: u64 = new_value.trim().parse().map_err(|_| {
            Error::Parse(format!("Invalid poll timeout: '{}'.", new_value.trim()))
        })?;
        if parsed > Self::MAX_SECS {
            return Err(Error::Parse(format!(
                "Poll timeout must be between 0 and {}, got {parsed}.",
                Self::MAX_SECS
            )));
        }
        self.value = parsed;
        Ok(())
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
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
