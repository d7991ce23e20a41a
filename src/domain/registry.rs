//! Identifier-to-path registry.
//!
//! Applications name their settings and widgets with small opaque
//! identifiers; the registry assigns meaning by mapping each identifier to
//! a hierarchical storage path. The two identifier spaces are disjoint:
//! a widget owns a path *segment* under which both a geometry and a state
//! entry live, while a setting owns exactly one path.
//!
//! Entries are declared once, before any save/load call, and are never
//! mutated afterwards by the store. Resolving an identifier that was never
//! registered is a programming defect in the calling application (a
//! declaration was forgotten), reported as [`MissingMapping`] and not meant
//! to be recovered from.

use std::collections::HashMap;

use thiserror::Error;

/// Opaque identifier for a setting, chosen by the application.
///
/// Carries no meaning of its own; applications typically declare them as
/// `const` items:
///
/// ```rust
/// use prefstore::SettingId;
///
/// const LAST_FILE: SettingId = SettingId(0);
/// const SHOW_TOOLBAR: SettingId = SettingId(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettingId(pub u32);

/// Opaque identifier for a widget, chosen by the application.
///
/// Distinct from [`SettingId`] because a widget maps to a path segment with
/// two sub-entries (geometry and state), not to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u32);

/// Per-setting behavior tag, declared at registration time.
///
/// Selects the write strategy [`crate::store::SettingsStore::save_setting`]
/// applies: a plain last-write-wins overwrite, or maintenance of a
/// deduplicated most-recent-first list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Saving overwrites the stored value unconditionally.
    Plain,
    /// Saving updates a bounded recent-items list instead of overwriting.
    RecentList,
}

/// A registered setting: its storage path plus its behavior tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingEntry {
    /// Hierarchical path the value is stored under, e.g. `"Files/LastFile"`.
    pub path: String,
    /// Write strategy applied on save.
    pub kind: SettingKind,
}

/// Resolution failure: an identifier was used without being registered.
///
/// This is a defect signal, not a runtime data error – it means the
/// application forgot to declare the identifier before using it. Nothing in
/// this crate catches it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MissingMapping {
    /// No path was registered for this setting identifier.
    #[error("setting {0:?} has no registered path; register it before use")]
    Setting(SettingId),

    /// No path segment was registered for this widget identifier.
    #[error("widget {0:?} has no registered path segment; register it before use")]
    Widget(WidgetId),
}

/// Mapping from logical identifiers to storage paths.
///
/// Populated by the application during setup, then handed to
/// [`crate::store::SettingsStore`], which only reads it.
#[derive(Debug, Default)]
pub struct PathRegistry {
    settings: HashMap<SettingId, SettingEntry>,
    widgets: HashMap<WidgetId, String>,
}

impl PathRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a setting under `path` with the given behavior tag.
    ///
    /// Registering the same identifier again overwrites the previous entry.
    /// Multiple identifiers mapping to the same path is not rejected, but
    /// is a caller error in practice.
    pub fn register_setting(&mut self, id: SettingId, path: impl Into<String>, kind: SettingKind) {
        self.settings.insert(
            id,
            SettingEntry {
                path: path.into(),
                kind,
            },
        );
    }

    /// Registers a widget under the path segment `segment`.
    ///
    /// The segment names the widget's group in the backing store; geometry
    /// and state entries live beneath it. Registering the same identifier
    /// again overwrites the previous entry.
    pub fn register_widget(&mut self, id: WidgetId, segment: impl Into<String>) {
        self.widgets.insert(id, segment.into());
    }

    /// Resolves a setting identifier to its registered entry.
    ///
    /// # Errors
    ///
    /// Returns [`MissingMapping::Setting`] when `id` was never registered –
    /// a defect in the calling application.
    pub fn resolve_setting(&self, id: SettingId) -> Result<&SettingEntry, MissingMapping> {
        self.settings.get(&id).ok_or(MissingMapping::Setting(id))
    }

    /// Resolves a widget identifier to its registered path segment.
    ///
    /// # Errors
    ///
    /// Returns [`MissingMapping::Widget`] when `id` was never registered.
    pub fn resolve_widget(&self, id: WidgetId) -> Result<&str, MissingMapping> {
        self.widgets
            .get(&id)
            .map(String::as_str)
            .ok_or(MissingMapping::Widget(id))
    }

    /// Number of registered settings.
    pub fn setting_count(&self) -> usize {
        self.settings.len()
    }

    /// Number of registered widgets.
    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }
}
