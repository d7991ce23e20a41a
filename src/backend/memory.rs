//! In-memory settings backend.
//!
//! Holds everything in a `HashMap` and never fails. Useful for tests and
//! for applications that want settings for the lifetime of the process
//! only; nothing is written to disk.

use std::collections::HashMap;

use super::{BackendError, SettingsBackend};
use crate::domain::SettingValue;

/// A [`SettingsBackend`] backed by a process-local map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, SettingValue>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsBackend for MemoryBackend {
    fn get(&self, path: &str) -> Result<Option<SettingValue>, BackendError> {
        Ok(self.entries.get(path).cloned())
    }

    fn set(&mut self, path: &str, value: SettingValue) -> Result<(), BackendError> {
        self.entries.insert(path.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, path: &str) -> Result<(), BackendError> {
        self.entries.remove(path);
        Ok(())
    }

    fn contains(&self, path: &str) -> Result<bool, BackendError> {
        Ok(self.entries.contains_key(path))
    }
}
