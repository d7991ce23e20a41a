//! Domain model: identifier registry and the dynamically typed value
//! carried between application code and the backing store.

pub mod registry;
pub mod value;

pub use registry::{MissingMapping, PathRegistry, SettingEntry, SettingId, SettingKind, WidgetId};
pub use value::SettingValue;
