//! # prefstore
//!
//! Window/widget state and user-settings persistence for desktop
//! applications.
//!
//! Applications name every setting and every persisted widget with a small
//! opaque identifier, register each identifier's storage path once at
//! startup, and go through a [`SettingsStore`] for all saves and loads. The
//! store keeps identifier handling, default values, the recent-files list,
//! and widget geometry/state behind one facade so application code never
//! touches storage paths directly.
//!
//! # Module overview
//!
//! - **`domain`** – Pure logic with no I/O: the identifier registry
//!   ([`PathRegistry`]) and the dynamically typed [`SettingValue`] that
//!   moves between the application and storage.
//!
//! - **`backend`** – Where values actually live. The [`SettingsBackend`]
//!   trait models an opaque string-keyed store; [`MemoryBackend`] keeps
//!   values for the process lifetime, [`TomlBackend`] persists them to a
//!   TOML file under the platform config directory.
//!
//! - **`store`** – The [`SettingsStore`] facade: plain and recent-list
//!   saves, seed-once defaults, widget geometry/state persistence.
//!
//! - **`widget`** – The [`GeometryPersist`]/[`StatePersist`] capability
//!   traits a GUI widget implements so its opaque blobs can be persisted.
//!
//! # Getting started
//!
//! ```
//! use prefstore::{
//!     MemoryBackend, PathRegistry, SettingId, SettingKind, SettingsStore,
//! };
//!
//! // Identifiers are plain constants chosen by the application.
//! const LAST_PROJECT: SettingId = SettingId(0);
//! const RECENT_FILES: SettingId = SettingId(1);
//!
//! # fn main() -> Result<(), prefstore::StoreError> {
//! let mut registry = PathRegistry::new();
//! registry.register_setting(LAST_PROJECT, "Files/LastProject", SettingKind::Plain);
//! registry.register_setting(RECENT_FILES, "Files/RecentFiles", SettingKind::RecentList);
//!
//! let mut store = SettingsStore::new(MemoryBackend::new(), registry);
//!
//! store.save_setting(LAST_PROJECT, "/home/user/project.toml")?;
//! store.save_setting(RECENT_FILES, "a.txt")?;
//! store.save_setting(RECENT_FILES, "b.txt")?;
//!
//! assert_eq!(store.recent_items(RECENT_FILES)?, vec!["b.txt", "a.txt"]);
//! # Ok(())
//! # }
//! ```
//!
//! Swap [`MemoryBackend`] for [`TomlBackend`] and the same calls persist
//! across runs.

pub mod backend;
pub mod domain;
pub mod store;
pub mod widget;

// Re-export the most-used types at the crate root so callers can write
// `prefstore::SettingsStore` instead of `prefstore::store::SettingsStore`.
pub use backend::file::TomlBackend;
pub use backend::memory::MemoryBackend;
pub use backend::{BackendError, SettingsBackend};
pub use domain::registry::{
    MissingMapping, PathRegistry, SettingEntry, SettingId, SettingKind, WidgetId,
};
pub use domain::value::SettingValue;
pub use store::{SettingsStore, StoreError, DEFAULT_MAX_RECENT_ITEMS};
pub use widget::{GeometryPersist, StatePersist};
