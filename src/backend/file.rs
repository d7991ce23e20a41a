//! TOML-file settings backend.
//!
//! Keeps the whole key space mirrored in memory and rewrites the file on
//! every mutation. [`TomlBackend::open_default`] places the file under the
//! platform config directory:
//!
//! - Windows:  `%APPDATA%\<org>\<app>.toml`
//! - Linux:    `$XDG_CONFIG_HOME/<org>/<app>.toml` (or `~/.config/...`)
//! - macOS:    `~/Library/Application Support/<org>/<app>.toml`
//!
//! # Stored form
//!
//! Each hierarchical path becomes one quoted top-level key; values map to
//! the matching native TOML type. Binary blobs have no readable TOML
//! representation, so they are stored as a table with a single `base64`
//! field:
//!
//! ```toml
//! "Files/LastOpenedFile" = "/home/user/notes.txt"
//! "Files/RecentFiles" = ["b.txt", "a.txt"]
//! "Files/MaxRecentFiles" = 10
//!
//! ["Widgets/MainWindow/Geometry"]
//! base64 = "AQIDBA=="
//! ```
//!
//! The layout is an implementation detail of this backend, not a public
//! schema; only this module reads it back.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BackendError, SettingsBackend};
use crate::domain::SettingValue;

// ── Stored form ───────────────────────────────────────────────────────────────

/// On-disk shape of a single value. Private serde model; `untagged` lets each
/// TOML type select its variant without a discriminant in the file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Str(String),
    List(Vec<String>),
    Int(i64),
    Bool(bool),
    Bytes { base64: String },
}

fn encode_stored(value: &SettingValue) -> StoredValue {
    match value {
        SettingValue::Str(s) => StoredValue::Str(s.clone()),
        SettingValue::List(items) => StoredValue::List(items.clone()),
        SettingValue::Int(n) => StoredValue::Int(*n),
        SettingValue::Bool(b) => StoredValue::Bool(*b),
        SettingValue::Bytes(bytes) => StoredValue::Bytes {
            base64: STANDARD.encode(bytes),
        },
    }
}

fn decode_stored(key: &str, stored: StoredValue) -> Result<SettingValue, BackendError> {
    match stored {
        StoredValue::Str(s) => Ok(SettingValue::Str(s)),
        StoredValue::List(items) => Ok(SettingValue::List(items)),
        StoredValue::Int(n) => Ok(SettingValue::Int(n)),
        StoredValue::Bool(b) => Ok(SettingValue::Bool(b)),
        StoredValue::Bytes { base64 } => {
            let bytes = STANDARD
                .decode(base64.as_bytes())
                .map_err(|e| BackendError::Malformed {
                    key: key.to_string(),
                    reason: format!("invalid base64: {e}"),
                })?;
            Ok(SettingValue::Bytes(bytes))
        }
    }
}

// ── Backend ───────────────────────────────────────────────────────────────────

/// A [`SettingsBackend`] persisted to a single TOML file.
///
/// The file is read once at open; every successful mutation rewrites it in
/// full. Keys are kept sorted (`BTreeMap`) so the file is deterministic and
/// diffs stay readable.
#[derive(Debug)]
pub struct TomlBackend {
    path: PathBuf,
    entries: BTreeMap<String, SettingValue>,
}

impl TomlBackend {
    /// Opens the settings file at `path`, creating an empty store if the
    /// file does not exist yet (first run).
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Io`] for file-system errors other than
    /// "not found", [`BackendError::Parse`] if the TOML is malformed, and
    /// [`BackendError::Malformed`] if a stored blob fails base64 decoding.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BackendError> {
        let path = path.into();

        let stored: BTreeMap<String, StoredValue> = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(BackendError::Io {
                    path,
                    source: e,
                })
            }
        };

        let mut entries = BTreeMap::new();
        for (key, value) in stored {
            let decoded = decode_stored(&key, value)?;
            entries.insert(key, decoded);
        }

        debug!("loaded {} settings entries from {}", entries.len(), path.display());
        Ok(Self { path, entries })
    }

    /// Opens the settings file at the platform default location for the
    /// given organization and application name.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NoPlatformConfigDir`] when the platform
    /// config base directory cannot be determined from the environment, plus
    /// everything [`TomlBackend::open`] can return.
    pub fn open_default(org: &str, app: &str) -> Result<Self, BackendError> {
        let dir = platform_config_dir(org).ok_or(BackendError::NoPlatformConfigDir)?;
        Self::open(dir.join(format!("{app}.toml")))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrites the backing file from the in-memory mirror.
    fn persist(&self) -> Result<(), BackendError> {
        // Ensure directory exists before writing.
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| BackendError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let stored: BTreeMap<&String, StoredValue> = self
            .entries
            .iter()
            .map(|(key, value)| (key, encode_stored(value)))
            .collect();

        let content = toml::to_string_pretty(&stored)?;
        std::fs::write(&self.path, content).map_err(|source| BackendError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!("persisted {} settings entries to {}", self.entries.len(), self.path.display());
        Ok(())
    }
}

impl SettingsBackend for TomlBackend {
    fn get(&self, path: &str) -> Result<Option<SettingValue>, BackendError> {
        Ok(self.entries.get(path).cloned())
    }

    fn set(&mut self, path: &str, value: SettingValue) -> Result<(), BackendError> {
        self.entries.insert(path.to_string(), value);
        self.persist()
    }

    fn remove(&mut self, path: &str) -> Result<(), BackendError> {
        // Absent key: nothing changed, skip the file rewrite.
        if self.entries.remove(path).is_none() {
            return Ok(());
        }
        self.persist()
    }

    fn contains(&self, path: &str) -> Result<bool, BackendError> {
        Ok(self.entries.contains_key(path))
    }
}

/// Resolves the platform config base directory joined with `org`.
fn platform_config_dir(org: &str) -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join(org))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join(org))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(|h| PathBuf::from(h).join("Library").join("Application Support").join(org))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        let _ = org;
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
