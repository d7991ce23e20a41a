//! Persistent key-value backends.
//!
//! The store never touches storage directly; it goes through the
//! [`SettingsBackend`] trait, which models an opaque string-keyed value
//! store. Keys are hierarchical paths such as `"Files/RecentFiles"` or
//! `"Widgets/MainWindow/Geometry"`; the backend attaches no meaning to the
//! separator, it just stores whole keys.
//!
//! Two implementations ship with the crate:
//!
//! - [`memory::MemoryBackend`] – `HashMap` held in process, nothing persists.
//!   Used by tests and by applications that want session-only settings.
//! - [`file::TomlBackend`] – a TOML file mirrored in memory, written through
//!   on every mutation.
//!
//! # Absent versus empty
//!
//! `get` distinguishes *never set* (`Ok(None)`) from every stored value,
//! including the empty string. Seed-once logic depends on this: a key that
//! was explicitly set to `""` must not be re-seeded.
//!
//! # Testability
//!
//! The trait is annotated with `mockall::automock` under `cfg(test)`, so
//! store unit tests can script backend failures without a real file.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::SettingValue;

pub mod file;
pub mod memory;

/// Error type for backend storage operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A stored entry could not be decoded back into a value.
    #[error("malformed stored value at {key}: {reason}")]
    Malformed { key: String, reason: String },
}

/// Trait abstracting the persistent key-value store.
///
/// All operations are synchronous and blocking; writes take `&mut self`.
/// The in-memory implementation never returns an error, the file-backed one
/// surfaces I/O and codec failures.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsBackend {
    /// Returns the value stored at `path`, or `None` if the key was never
    /// set (or has been removed).
    fn get(&self, path: &str) -> Result<Option<SettingValue>, BackendError>;

    /// Stores `value` at `path`, replacing any previous value.
    fn set(&mut self, path: &str, value: SettingValue) -> Result<(), BackendError>;

    /// Removes the value at `path`. Removing an absent key is a no-op.
    fn remove(&mut self, path: &str) -> Result<(), BackendError>;

    /// Returns `true` if a value is stored at `path`.
    ///
    /// `contains(p)` agrees with `get(p).is_some()`; it exists so callers
    /// checking presence do not clone the value.
    fn contains(&self, path: &str) -> Result<bool, BackendError>;
}
