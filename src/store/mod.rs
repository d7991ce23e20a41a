//! SettingsStore: the persistence facade applications talk to.
//!
//! The store ties the two halves of the crate together: the
//! [`PathRegistry`](crate::domain::PathRegistry) that maps identifiers to
//! hierarchical paths, and a [`SettingsBackend`] that stores values at those
//! paths. Applications declare their identifiers once, build the registry,
//! then go through the store for every save and load.
//!
//! # Save behavior
//!
//! What a save does depends on the behavior tag the setting was registered
//! with:
//!
//! - [`SettingKind::Plain`] – last write wins, the stored value is replaced.
//! - [`SettingKind::RecentList`] – the saved value is coerced to a string
//!   and worked into a bounded most-recent-first list (see
//!   [`SettingsStore::save_setting`]).
//!
//! # Widget persistence
//!
//! Widgets store two opaque blobs under a fixed group layout:
//!
//! ```text
//! Widgets/<segment>/Geometry     window placement
//! Widgets/<segment>/State        toolbars, docks, splitters
//! ```
//!
//! `<segment>` is the path segment the widget was registered under. The
//! blobs come from the [`GeometryPersist`]/[`StatePersist`] capabilities and
//! are never interpreted here.

use thiserror::Error;
use tracing::{debug, warn};

use crate::backend::{BackendError, SettingsBackend};
use crate::domain::{
    MissingMapping, PathRegistry, SettingId, SettingKind, SettingValue, WidgetId,
};
use crate::widget::{GeometryPersist, StatePersist};

/// Upper bound applied to recent-item lists unless reconfigured.
pub const DEFAULT_MAX_RECENT_ITEMS: i32 = 10;

/// Group that widget geometry and state entries live under.
const WIDGET_GROUP: &str = "Widgets";

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An identifier was used without being registered first.
    #[error("{0}")]
    MissingMapping(#[from] MissingMapping),

    /// The backing store failed.
    #[error("settings backend failure: {0}")]
    Backend(#[from] BackendError),
}

/// Facade over a [`SettingsBackend`] with identifier-based addressing.
///
/// Construction takes the fully populated registry by value; the store never
/// mutates it, so every identifier an application will use must be
/// registered up front.
///
/// # Example
///
/// ```
/// use prefstore::{
///     MemoryBackend, PathRegistry, SettingId, SettingKind, SettingsStore,
/// };
///
/// const LAST_FILE: SettingId = SettingId(0);
///
/// # fn main() -> Result<(), prefstore::StoreError> {
/// let mut registry = PathRegistry::new();
/// registry.register_setting(LAST_FILE, "Files/LastFile", SettingKind::Plain);
///
/// let mut store = SettingsStore::new(MemoryBackend::new(), registry);
/// store.save_setting(LAST_FILE, "/home/user/notes.txt")?;
///
/// let stored = store.load_setting_or(LAST_FILE, "")?;
/// assert_eq!(stored.as_str(), Some("/home/user/notes.txt"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SettingsStore<B> {
    backend: B,
    registry: PathRegistry,
    max_recent_items: i32,
}

impl<B: SettingsBackend> SettingsStore<B> {
    /// Creates a store over `backend` using the given identifier mappings.
    pub fn new(backend: B, registry: PathRegistry) -> Self {
        Self {
            backend,
            registry,
            max_recent_items: DEFAULT_MAX_RECENT_ITEMS,
        }
    }

    /// The identifier mappings this store resolves against.
    pub fn registry(&self) -> &PathRegistry {
        &self.registry
    }

    /// Shared access to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Maximum length of recent-item lists. Non-positive means unbounded.
    pub fn max_recent_items(&self) -> i32 {
        self.max_recent_items
    }

    /// Reconfigures the recent-list bound.
    ///
    /// A non-positive `max` disables truncation entirely; already stored
    /// lists are not re-trimmed until their setting is saved again.
    pub fn set_max_recent_items(&mut self, max: i32) {
        self.max_recent_items = max;
    }

    // ── Settings ──────────────────────────────────────────────────────────

    /// Saves a value for the given setting.
    ///
    /// For a [`SettingKind::Plain`] setting this overwrites whatever was
    /// stored. For a [`SettingKind::RecentList`] setting the value is
    /// coerced to a string and the stored list is updated instead: any
    /// existing occurrence of the string is removed, the string is inserted
    /// at the front, and the list is truncated to
    /// [`max_recent_items`](Self::max_recent_items) when that bound is
    /// positive.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingMapping`] when `id` was never
    /// registered, or [`StoreError::Backend`] when the backend fails.
    pub fn save_setting(
        &mut self,
        id: SettingId,
        value: impl Into<SettingValue>,
    ) -> Result<(), StoreError> {
        let entry = self.registry.resolve_setting(id)?;
        let (path, kind) = (entry.path.clone(), entry.kind);

        match kind {
            SettingKind::Plain => {
                debug!("storing setting {id:?} at {path}");
                self.backend.set(&path, value.into())?;
            }
            SettingKind::RecentList => {
                self.update_recent_items(&path, value.into().into_string_lossy())?;
            }
        }
        Ok(())
    }

    /// Loads the stored value for the given setting.
    ///
    /// `Ok(None)` means the setting was never saved (or has been cleared);
    /// it is distinct from every stored value, including the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingMapping`] when `id` was never
    /// registered, or [`StoreError::Backend`] when the backend fails.
    pub fn load_setting(&self, id: SettingId) -> Result<Option<SettingValue>, StoreError> {
        let entry = self.registry.resolve_setting(id)?;
        Ok(self.backend.get(&entry.path)?)
    }

    /// Loads the stored value, falling back to `default` when nothing is
    /// stored. The default is returned unchanged, whatever its shape.
    pub fn load_setting_or(
        &self,
        id: SettingId,
        default: impl Into<SettingValue>,
    ) -> Result<SettingValue, StoreError> {
        Ok(self.load_setting(id)?.unwrap_or_else(|| default.into()))
    }

    /// Stores `value` only if the setting has no stored value yet.
    ///
    /// Presence is what counts: a setting that was explicitly saved as an
    /// empty string (or zero, or an empty list) is present and will not be
    /// overwritten. Seeding goes through [`save_setting`](Self::save_setting),
    /// so seeding a [`SettingKind::RecentList`] setting produces a
    /// one-element list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingMapping`] when `id` was never
    /// registered, or [`StoreError::Backend`] when the backend fails.
    pub fn store_if_not_exist(
        &mut self,
        id: SettingId,
        value: impl Into<SettingValue>,
    ) -> Result<(), StoreError> {
        let path = self.registry.resolve_setting(id)?.path.clone();
        if self.backend.contains(&path)? {
            debug!("setting {id:?} already present at {path}; keeping stored value");
            return Ok(());
        }
        self.save_setting(id, value)
    }

    /// Seeds every `(id, value)` pair that has no stored value yet.
    ///
    /// Typically called once at startup with the application's factory
    /// defaults; values the user already changed are left alone.
    pub fn seed_defaults(
        &mut self,
        defaults: impl IntoIterator<Item = (SettingId, SettingValue)>,
    ) -> Result<(), StoreError> {
        for (id, value) in defaults {
            self.store_if_not_exist(id, value)?;
        }
        Ok(())
    }

    /// Removes the stored value for the given setting.
    ///
    /// Clearing an absent value is a no-op. For a recent-list setting this
    /// is the only way to empty the list, since saving always re-inserts.
    pub fn clear_setting(&mut self, id: SettingId) -> Result<(), StoreError> {
        let path = self.registry.resolve_setting(id)?.path.clone();
        debug!("clearing setting {id:?} at {path}");
        self.backend.remove(&path)?;
        Ok(())
    }

    /// Returns `true` if the setting has a stored value.
    pub fn is_set(&self, id: SettingId) -> Result<bool, StoreError> {
        let entry = self.registry.resolve_setting(id)?;
        Ok(self.backend.contains(&entry.path)?)
    }

    /// Returns the stored recent-item list, newest first.
    ///
    /// Convenience getter coercing whatever is stored to a string list: a
    /// stored plain string becomes a one-element list, an absent or
    /// non-text value an empty one.
    pub fn recent_items(&self, id: SettingId) -> Result<Vec<String>, StoreError> {
        let items = match self.load_setting(id)? {
            Some(stored) => stored.into_string_list(),
            None => Vec::new(),
        };
        Ok(items)
    }

    /// Runs the recent-items update against the stored list at `path`.
    fn update_recent_items(&mut self, path: &str, item: String) -> Result<(), BackendError> {
        let mut items = match self.backend.get(path)? {
            Some(stored) => stored.into_string_list(),
            None => Vec::new(),
        };

        items.retain(|existing| existing != &item);
        items.insert(0, item);
        if self.max_recent_items > 0 {
            items.truncate(self.max_recent_items as usize);
        }

        debug!("recent list at {path} now holds {} items", items.len());
        self.backend.set(path, SettingValue::List(items))
    }

    // ── Widget geometry & state ───────────────────────────────────────────

    /// Captures and stores the widget's geometry blob.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingMapping`] when `id` was never
    /// registered, or [`StoreError::Backend`] when the backend fails.
    pub fn save_widget_geometry<W: GeometryPersist>(
        &mut self,
        id: WidgetId,
        widget: &W,
    ) -> Result<(), StoreError> {
        let path = widget_geometry_path(self.registry.resolve_widget(id)?);
        let blob = widget.save_geometry();
        debug!("storing widget geometry at {path} ({} bytes)", blob.len());
        self.backend.set(&path, SettingValue::Bytes(blob))?;
        Ok(())
    }

    /// Loads the stored geometry blob and hands it to the widget.
    ///
    /// When nothing (or a value of the wrong shape) is stored, the widget
    /// is restored from an empty slice and keeps its current placement.
    pub fn load_widget_geometry<W: GeometryPersist>(
        &self,
        id: WidgetId,
        widget: &mut W,
    ) -> Result<(), StoreError> {
        let path = widget_geometry_path(self.registry.resolve_widget(id)?);
        let blob = self.load_blob(&path)?;
        widget.restore_geometry(&blob);
        Ok(())
    }

    /// Captures and stores the widget's internal-state blob.
    pub fn save_widget_state<W: StatePersist>(
        &mut self,
        id: WidgetId,
        widget: &W,
    ) -> Result<(), StoreError> {
        let path = widget_state_path(self.registry.resolve_widget(id)?);
        let blob = widget.save_state();
        debug!("storing widget state at {path} ({} bytes)", blob.len());
        self.backend.set(&path, SettingValue::Bytes(blob))?;
        Ok(())
    }

    /// Loads the stored state blob and hands it to the widget.
    ///
    /// Same absent-value behavior as
    /// [`load_widget_geometry`](Self::load_widget_geometry).
    pub fn load_widget_state<W: StatePersist>(
        &self,
        id: WidgetId,
        widget: &mut W,
    ) -> Result<(), StoreError> {
        let path = widget_state_path(self.registry.resolve_widget(id)?);
        let blob = self.load_blob(&path)?;
        widget.restore_state(&blob);
        Ok(())
    }

    /// Stores geometry, then state. Two independent writes, not atomic; a
    /// backend failure on the second write leaves the first in place.
    pub fn save_widget<W>(&mut self, id: WidgetId, widget: &W) -> Result<(), StoreError>
    where
        W: GeometryPersist + StatePersist,
    {
        self.save_widget_geometry(id, widget)?;
        self.save_widget_state(id, widget)
    }

    /// Restores geometry, then state.
    pub fn load_widget<W>(&self, id: WidgetId, widget: &mut W) -> Result<(), StoreError>
    where
        W: GeometryPersist + StatePersist,
    {
        self.load_widget_geometry(id, widget)?;
        self.load_widget_state(id, widget)
    }

    /// Fetches the blob at `path`, mapping absent or mistyped values to the
    /// empty blob.
    fn load_blob(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        match self.backend.get(path)? {
            Some(stored) => {
                if stored.as_bytes().is_none() {
                    warn!("stored value at {path} is not a byte blob; restoring from empty");
                }
                Ok(stored.into_blob())
            }
            None => Ok(Vec::new()),
        }
    }
}

fn widget_geometry_path(segment: &str) -> String {
    format!("{WIDGET_GROUP}/{segment}/Geometry")
}

fn widget_state_path(segment: &str) -> String {
    format!("{WIDGET_GROUP}/{segment}/State")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
